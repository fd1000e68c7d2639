use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

/// Errors surfaced by view-layer operations.
///
/// None of these are fatal: each one is local to a single interaction and
/// leaves the rest of the view usable.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Local check failed before any remote effect
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The server refused the change; speculative UI state has been reverted
    #[error("{operation} rejected by server: {message}")]
    RemoteRejected {
        operation: &'static str,
        message: String,
    },

    /// An edit gesture arrived while the field's previous commit is outstanding
    #[error("A commit is already in progress for this field")]
    CommitInProgress,
}

impl ViewError {
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, ViewError::Validation(_))
    }

    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, ViewError::RemoteRejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Could not find the column \"{0}\"")]
    ColumnNotFound(String),

    #[error("A column named \"{0}\" already exists")]
    ColumnExists(String),

    #[error("Unknown section key \"{0}\"")]
    InvalidSection(String),

    #[error("Field is not being edited")]
    NotEditing,
}
