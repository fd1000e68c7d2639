//! Optimistic in-place editing of a single text field
//!
//! ```text
//! Idle ──begin_edit──▶ Editing ──finish_edit──▶ Committing ──resolve_success──▶ Idle
//!   ▲                     │                          │
//!   │        (unchanged)  │                          └──resolve_failure──▶ Error
//!   └─────────────────────┘                                                  │
//!   Error ──begin_edit──▶ Editing ◀──────────────────────────────────────────┘
//! ```
//!
//! While a commit is outstanding every edit gesture is refused, which is what
//! guarantees at most one in-flight commit per field.

use crate::error::{ValidationFailure, ViewError, ViewResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Idle,
    Editing,
    Committing,
    Error,
}

/// A change captured when editing ends, ready to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitDecision {
    /// Nothing to save; the field is back to idle and no remote call is due
    Unchanged,
    Commit(PendingCommit),
}

#[derive(Debug, Clone)]
pub struct EditableField {
    original_value: String,
    text: String,
    pending_value: Option<String>,
    status: EditStatus,
    dimmed: bool,
    diagnostic: Option<String>,
}

impl EditableField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: value.clone(),
            original_value: value,
            pending_value: None,
            status: EditStatus::Idle,
            dimmed: false,
            diagnostic: None,
        }
    }

    pub fn status(&self) -> EditStatus {
        self.status
    }

    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Set only while a commit is outstanding
    pub fn pending_value(&self) -> Option<&str> {
        self.pending_value.as_deref()
    }

    /// What the field currently displays
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether text mutation is currently enabled
    pub fn is_editable(&self) -> bool {
        self.status == EditStatus::Editing
    }

    /// Text is dimmed while a save is in flight
    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Explicit begin-edit gesture (double activation on the field)
    pub fn begin_edit(&mut self) -> ViewResult<()> {
        match self.status {
            EditStatus::Committing => {
                tracing::debug!(value = %self.original_value, "ignoring edit gesture during commit");
                Err(ViewError::CommitInProgress)
            }
            EditStatus::Editing => Ok(()),
            EditStatus::Idle | EditStatus::Error => {
                self.status = EditStatus::Editing;
                self.diagnostic = None;
                Ok(())
            }
        }
    }

    /// Replace the edited text
    pub fn set_text(&mut self, text: impl Into<String>) -> ViewResult<()> {
        self.require_editing()?;
        self.text = text.into();
        Ok(())
    }

    /// Edit focus released or confirm gesture.
    ///
    /// Empty or unchanged text short-circuits back to idle with the original
    /// value restored.
    pub fn finish_edit(&mut self) -> ViewResult<CommitDecision> {
        self.require_editing()?;

        let candidate = self.text.trim();
        if candidate.is_empty() || candidate == self.original_value {
            self.text = self.original_value.clone();
            self.status = EditStatus::Idle;
            return Ok(CommitDecision::Unchanged);
        }

        let new_value = candidate.to_string();
        self.text = new_value.clone();
        self.pending_value = Some(new_value.clone());
        self.status = EditStatus::Committing;
        self.dimmed = true;

        Ok(CommitDecision::Commit(PendingCommit {
            old_value: self.original_value.clone(),
            new_value,
        }))
    }

    /// The server confirmed the pending value
    pub fn resolve_success(&mut self) {
        let Some(pending) = self.pending_value.take() else {
            tracing::warn!(status = ?self.status, "resolve_success without a pending commit");
            return;
        };
        self.original_value = pending;
        self.text = self.original_value.clone();
        self.status = EditStatus::Idle;
        self.dimmed = false;
        self.diagnostic = None;
    }

    /// Revert to the original value and surface `diagnostic`.
    ///
    /// The field stays interactive; the user has to begin a new edit to retry.
    pub fn resolve_failure(&mut self, diagnostic: impl Into<String>) {
        self.pending_value = None;
        self.text = self.original_value.clone();
        self.status = EditStatus::Error;
        self.dimmed = false;
        self.diagnostic = Some(diagnostic.into());
    }

    fn require_editing(&self) -> ViewResult<()> {
        match self.status {
            EditStatus::Editing => Ok(()),
            EditStatus::Committing => Err(ViewError::CommitInProgress),
            EditStatus::Idle | EditStatus::Error => Err(ValidationFailure::NotEditing.into()),
        }
    }
}
