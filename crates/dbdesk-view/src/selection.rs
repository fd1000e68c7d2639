//! Remembered section of the table view

use std::sync::Arc;

use dbdesk_settings::KeyValueStore;

use crate::section::Section;

/// The single "last active section" value, stored durably so it survives a
/// restart. Absence is valid and means "use the default section".
#[derive(Clone)]
pub struct PersistedSelection {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistedSelection {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key this selection lives under
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The stored section key, if any
    pub fn get(&self) -> Option<String> {
        self.store.get(&self.key)
    }

    /// Overwrite the stored key. Write failures are logged and otherwise ignored.
    pub fn set(&self, key: &str) {
        if let Err(err) = self.store.set(&self.key, key) {
            tracing::warn!(
                storage_key = %self.key,
                value = %key,
                error = %err,
                "Failed to persist section selection"
            );
        }
    }

    /// The remembered section, degrading silently to the default
    pub fn section(&self) -> Section {
        Section::resolve(self.get().as_deref())
    }
}
