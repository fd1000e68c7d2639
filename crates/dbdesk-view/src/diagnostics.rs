//! User-visible diagnostic messages
//!
//! Structural-edit failures never open a dialog. They revert the inline
//! state and leave a message here, which the view shows next to the grid.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Operation that produced the message (e.g. "rename column")
    pub operation: &'static str,
    pub message: String,
}

/// Entries kept before the oldest ones are dropped
pub const MAX_DIAGNOSTICS: usize = 100;

/// Shared log of the most recent diagnostics for one view
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, operation: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(operation = operation, "{}", message);
        let mut entries = self.entries.lock();
        if entries.len() >= MAX_DIAGNOSTICS {
            let excess = entries.len() + 1 - MAX_DIAGNOSTICS;
            entries.drain(..excess);
        }
        entries.push(Diagnostic { operation, message });
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<Diagnostic> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
