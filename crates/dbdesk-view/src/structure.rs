//! Inline structure editing: column rename and allow-NULL toggle
//!
//! The two operations follow different policies:
//!
//! - **Rename** is confirm-then-reflect. The edited name is shown dimmed
//!   until the server answers, and the column list and cached rows are only
//!   rewritten after success.
//! - **Allow NULL** is reflect-then-confirm. The checkbox flips on click and
//!   is flipped back if the server rejects the change.
//!
//! In both cases the in-memory column is only updated after confirmation.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use dbdesk_core::{TableBackend, TableSnapshot};

use crate::collaborators::SectionView;
use crate::diagnostics::Diagnostics;
use crate::editable::{CommitDecision, EditableField};
use crate::error::{ValidationFailure, ViewError, ViewResult};
use crate::nullability::NullabilityToggle;

const RENAME_COLUMN: &str = "rename column";
const SET_NULLABILITY: &str = "set column nullability";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Edited text matched the original; nothing was sent
    Unchanged,
    Renamed { old_name: String, new_name: String },
}

pub struct StructureEditController {
    table: Arc<RwLock<TableSnapshot>>,
    backend: Arc<dyn TableBackend>,
    diagnostics: Diagnostics,
}

impl StructureEditController {
    pub fn new(
        table: Arc<RwLock<TableSnapshot>>,
        backend: Arc<dyn TableBackend>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            table,
            backend,
            diagnostics,
        }
    }

    pub fn table(&self) -> &Arc<RwLock<TableSnapshot>> {
        &self.table
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// One editable name field per column, derived from the current column list.
    ///
    /// Fields do not survive a re-render; call this again after any change.
    pub fn name_fields(&self) -> Vec<EditableField> {
        self.table
            .read()
            .columns
            .iter()
            .map(|c| EditableField::new(c.name.clone()))
            .collect()
    }

    pub fn nullability_toggles(&self) -> Vec<NullabilityToggle> {
        self.table
            .read()
            .columns
            .iter()
            .map(|c| NullabilityToggle::new(c.name.clone(), c.nullable))
            .collect()
    }

    /// Refresh the column list from the server
    #[tracing::instrument(skip(self))]
    pub async fn reload_columns(&self) -> dbdesk_core::Result<()> {
        let table_name = self.table.read().name.clone();
        let columns = self.backend.load_columns(&table_name).await?;
        tracing::debug!(table = %table_name, columns = columns.len(), "loaded full columns");
        self.table.write().columns = columns;
        Ok(())
    }

    /// Commit an edited column name.
    ///
    /// `field` must be in the editing state; the call plays the
    /// editing → committing → idle/error transitions on it.
    #[tracing::instrument(skip(self, field), fields(column = %field.original_value()))]
    pub async fn commit_rename(&self, field: &mut EditableField) -> ViewResult<RenameOutcome> {
        let pending = match field.finish_edit()? {
            CommitDecision::Unchanged => {
                tracing::debug!("column name unchanged, skipping commit");
                return Ok(RenameOutcome::Unchanged);
            }
            CommitDecision::Commit(pending) => pending,
        };
        let (old_name, new_name) = (pending.old_value, pending.new_value);

        tracing::info!("Changing {} to {}", old_name, new_name);

        let table_name = {
            let table = self.table.read();
            let failure = if table.column(&old_name).is_none() {
                Some(ValidationFailure::ColumnNotFound(old_name.clone()))
            } else if table.column(&new_name).is_some() {
                Some(ValidationFailure::ColumnExists(new_name.clone()))
            } else {
                None
            };
            if let Some(failure) = failure {
                drop(table);
                self.diagnostics.record(RENAME_COLUMN, failure.to_string());
                field.resolve_failure(failure.to_string());
                return Err(failure.into());
            }
            table.name.clone()
        };

        match self
            .backend
            .rename_column(&table_name, &old_name, &new_name)
            .await
        {
            Ok(()) => {
                {
                    let mut table = self.table.write();
                    if !table.apply_rename(&old_name, &new_name) {
                        // A reload during the commit already brought in the new name
                        tracing::warn!(
                            table = %table_name,
                            "column {} missing after rename, re-keying rows only",
                            old_name
                        );
                        table.rekey_rows(&old_name, &new_name);
                    }
                }
                field.resolve_success();
                tracing::info!(table = %table_name, "Column renamed from {} to {}", old_name, new_name);
                Ok(RenameOutcome::Renamed { old_name, new_name })
            }
            Err(err) => {
                let message = format!(
                    "Could not change field name from {} to {}",
                    old_name, new_name
                );
                self.diagnostics.record(RENAME_COLUMN, message.clone());
                field.resolve_failure(message.clone());
                Err(ViewError::RemoteRejected {
                    operation: RENAME_COLUMN,
                    message: format!("{}: {}", message, err),
                })
            }
        }
    }

    /// Toggle a column's allow-NULL flag. Returns the confirmed value.
    #[tracing::instrument(skip(self, toggle), fields(column = %toggle.column()))]
    pub async fn toggle_nullability(&self, toggle: &mut NullabilityToggle) -> ViewResult<bool> {
        if toggle.is_committing() {
            return Err(ViewError::CommitInProgress);
        }

        let table_name = {
            let table = self.table.read();
            if table.column(toggle.column()).is_none() {
                drop(table);
                let failure = ValidationFailure::ColumnNotFound(toggle.column().to_string());
                self.diagnostics.record(SET_NULLABILITY, failure.to_string());
                return Err(failure.into());
            }
            table.name.clone()
        };

        let allow_null = toggle.click()?;
        let column = toggle.column().to_string();

        match self
            .backend
            .set_column_nullability(&table_name, &column, allow_null)
            .await
        {
            Ok(()) => {
                self.table.write().apply_nullability(&column, allow_null);
                toggle.resolve_success();
                tracing::info!(table = %table_name, column = %column, allow_null, "Column nullability changed");
                Ok(allow_null)
            }
            Err(err) => {
                let message = "An error occurred whilst altering the NULL setting".to_string();
                self.diagnostics.record(SET_NULLABILITY, message.clone());
                toggle.resolve_failure(message.clone());
                Err(ViewError::RemoteRejected {
                    operation: SET_NULLABILITY,
                    message: format!("{}: {}", message, err),
                })
            }
        }
    }
}

/// Data handed to the templating layer when the structure section is drawn
#[derive(Debug, Clone)]
pub struct StructureContext {
    pub table: TableSnapshot,
    pub name_fields: Vec<EditableField>,
    pub nullability_toggles: Vec<NullabilityToggle>,
}

/// Templating collaborator for the structure grid
pub trait StructureRenderer: Send + Sync {
    fn render(&self, context: StructureContext);
}

/// The structure section: loads the full column list, then renders the grid
pub struct StructureSection {
    controller: Arc<StructureEditController>,
    renderer: Arc<dyn StructureRenderer>,
}

impl StructureSection {
    pub fn new(
        controller: Arc<StructureEditController>,
        renderer: Arc<dyn StructureRenderer>,
    ) -> Self {
        Self {
            controller,
            renderer,
        }
    }
}

#[async_trait]
impl SectionView for StructureSection {
    async fn render(&self) -> dbdesk_core::Result<()> {
        self.controller.reload_columns().await?;

        let context = StructureContext {
            table: self.controller.table().read().clone(),
            name_fields: self.controller.name_fields(),
            nullability_toggles: self.controller.nullability_toggles(),
        };
        self.renderer.render(context);
        Ok(())
    }
}
