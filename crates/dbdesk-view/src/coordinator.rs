//! Section coordinator for a single table view
//!
//! Owns which of the structure, content, info and query sections is shown,
//! remembers that choice across restarts, and produces the toolbar triggers
//! that switch between sections or delete the table.
//!
//! # Activation order
//!
//! ```text
//! activate(section)
//!   1. loading indicator on
//!   2. selection persisted
//!   3. side pane closed (re-opened for the query console)
//!   4. section render entry point invoked
//!   5. loading indicator off once rendering resolves
//! ```

use std::sync::Arc;

use dbdesk_settings::ViewSettings;

use crate::collaborators::{
    ConfirmationDialog, ConfirmationRequest, Route, SectionView, Toolbar, ToolbarZone,
    TriggerAction, TriggerDescriptor,
};
use crate::context::ViewContext;
use crate::error::{ViewError, ViewResult};
use crate::section::Section;
use crate::selection::PersistedSelection;

const DROP_TABLE: &str = "drop table";
const RENDER_SECTION: &str = "render section";

/// Render entry points of the four sections
#[derive(Clone)]
pub struct SectionViews {
    pub structure: Arc<dyn SectionView>,
    pub content: Arc<dyn SectionView>,
    pub info: Arc<dyn SectionView>,
    pub query: Arc<dyn SectionView>,
}

impl SectionViews {
    pub fn get(&self, section: Section) -> &Arc<dyn SectionView> {
        match section {
            Section::Structure => &self.structure,
            Section::Content => &self.content,
            Section::Info => &self.info,
            Section::Query => &self.query,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined; nothing was sent
    Cancelled,
    Dropped,
}

pub struct SectionCoordinator {
    database_name: String,
    table_name: String,
    views: SectionViews,
    context: ViewContext,
    selection: PersistedSelection,
    /// Section remembered when the view was opened
    initial: Section,
    current: Section,
    reactive_trigger_flags: bool,
}

impl SectionCoordinator {
    /// Create the coordinator and turn the loading indicator on.
    ///
    /// The remembered section is read here; a missing or unrecognised value
    /// silently yields [`Section::DEFAULT`].
    pub fn new(
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        views: SectionViews,
        context: ViewContext,
        settings: &ViewSettings,
    ) -> Self {
        context.loading.set_loading(true);

        let selection = PersistedSelection::new(context.store.clone(), settings.selection_key.clone());
        let initial = selection.section();

        tracing::debug!(
            storage_key = %selection.storage_key(),
            section = %initial,
            "restored table view section"
        );

        Self {
            database_name: database_name.into(),
            table_name: table_name.into(),
            views,
            context,
            selection,
            initial,
            current: initial,
            reactive_trigger_flags: settings.reactive_trigger_flags,
        }
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    pub fn initial_section(&self) -> Section {
        self.initial
    }

    pub fn selection(&self) -> &PersistedSelection {
        &self.selection
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// First draw: toolbar, pane chrome, then the remembered section
    #[tracing::instrument(skip(self, toolbar), fields(table = %self.table_name))]
    pub async fn open(&mut self, toolbar: &mut dyn Toolbar) {
        self.register_triggers(toolbar);
        self.context.pane.render();
        if self.current.opens_pane() {
            self.context.pane.open();
        }
        self.render_current().await;
    }

    /// Activate the section named by `key`, substituting the default for an
    /// absent or unrecognised key. Returns the section actually activated.
    pub async fn activate(&mut self, key: Option<&str>) -> Section {
        let section = Section::resolve(key);
        self.activate_section(section).await;
        section
    }

    #[tracing::instrument(skip(self), fields(table = %self.table_name))]
    pub async fn activate_section(&mut self, section: Section) {
        self.set_loading(true);
        self.selection.set(section.key());
        self.context.pane.close();
        if section.opens_pane() {
            self.context.pane.open();
        }
        self.current = section;
        self.render_current().await;
    }

    /// Populate `toolbar` with one trigger per section plus "Delete table".
    ///
    /// Active flags reflect the section remembered at construction unless
    /// reactive flags are enabled in [`ViewSettings`].
    pub fn register_triggers(&self, toolbar: &mut dyn Toolbar) {
        toolbar.clear();

        let active = if self.reactive_trigger_flags {
            self.current
        } else {
            self.initial
        };

        for section in Section::ALL {
            toolbar.add_item(TriggerDescriptor {
                zone: ToolbarZone::Left,
                label: section.label(),
                action: TriggerAction::Activate(section),
                is_active: section == active,
            });
        }

        toolbar.add_item(TriggerDescriptor {
            zone: ToolbarZone::Right,
            label: "Delete table",
            action: TriggerAction::DeleteTable,
            is_active: false,
        });
    }

    /// Run the action behind a toolbar trigger
    pub async fn dispatch(
        &mut self,
        action: TriggerAction,
        dialog: &dyn ConfirmationDialog,
    ) -> ViewResult<()> {
        match action {
            TriggerAction::Activate(section) => {
                self.activate_section(section).await;
                Ok(())
            }
            TriggerAction::DeleteTable => self.confirm_and_delete_table(dialog).await.map(|_| ()),
        }
    }

    /// Ask for confirmation, then drop the table.
    ///
    /// Navigation to the parent database happens only when the drop
    /// succeeded; a rejected drop records a diagnostic and stays on the table.
    #[tracing::instrument(skip(self, dialog), fields(table = %self.table_name))]
    pub async fn confirm_and_delete_table(
        &self,
        dialog: &dyn ConfirmationDialog,
    ) -> ViewResult<DeleteOutcome> {
        let request = ConfirmationRequest {
            title: format!("Delete table \u{201c}{}\u{201d}?", self.table_name),
            body: "Deleting this table will remove all data.\nAre you really sure?".to_string(),
            confirm_label: "Delete table".to_string(),
            cancel_label: "Cancel".to_string(),
        };

        if !dialog.confirm(&request).await {
            tracing::debug!("table deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.context.backend.drop_table(&self.table_name).await {
            Ok(()) => {
                tracing::info!(database = %self.database_name, "Table dropped");
                self.context
                    .navigator
                    .navigate(Route::Database(self.database_name.clone()));
                Ok(DeleteOutcome::Dropped)
            }
            Err(err) => {
                let message = format!("Could not delete table {}", self.table_name);
                self.context.diagnostics.record(DROP_TABLE, message.clone());
                Err(ViewError::RemoteRejected {
                    operation: DROP_TABLE,
                    message: format!("{}: {}", message, err),
                })
            }
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.context.loading.set_loading(loading);
    }

    async fn render_current(&self) {
        let section = self.current;
        if let Err(err) = self.views.get(section).render().await {
            self.context.diagnostics.record(
                RENDER_SECTION,
                format!("Could not load {} for {}: {}", section.label(), self.table_name, err),
            );
        }
        self.set_loading(false);
    }
}
