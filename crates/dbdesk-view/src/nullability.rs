//! Allow-NULL checkbox with optimistic update

use crate::error::{ViewError, ViewResult};

/// Checkbox bound to one column's allow-NULL attribute.
///
/// Unlike a renamed field, the checkbox reflects the user's click before the
/// server answers and is flipped back if the change is rejected.
#[derive(Debug, Clone)]
pub struct NullabilityToggle {
    column: String,
    checked: bool,
    committing: bool,
    diagnostic: Option<String>,
}

impl NullabilityToggle {
    pub fn new(column: impl Into<String>, allow_null: bool) -> Self {
        Self {
            column: column.into(),
            checked: allow_null,
            committing: false,
            diagnostic: None,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_committing(&self) -> bool {
        self.committing
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Flip the checkbox and enter the committing state. Returns the new
    /// allow-NULL value to send.
    pub fn click(&mut self) -> ViewResult<bool> {
        if self.committing {
            return Err(ViewError::CommitInProgress);
        }
        self.checked = !self.checked;
        self.committing = true;
        self.diagnostic = None;
        Ok(self.checked)
    }

    pub fn resolve_success(&mut self) {
        self.committing = false;
    }

    /// Put the checkbox back to the opposite of the attempted value
    pub fn resolve_failure(&mut self, diagnostic: impl Into<String>) {
        self.checked = !self.checked;
        self.committing = false;
        self.diagnostic = Some(diagnostic.into());
    }
}
