use std::sync::Arc;

use dbdesk_core::TableBackend;
use dbdesk_settings::KeyValueStore;

use crate::collaborators::{LoadingIndicator, Navigator, Pane};
use crate::diagnostics::Diagnostics;

/// Collaborators shared by every controller of one table view
#[derive(Clone)]
pub struct ViewContext {
    pub backend: Arc<dyn TableBackend>,
    pub store: Arc<dyn KeyValueStore>,
    pub loading: Arc<dyn LoadingIndicator>,
    pub pane: Arc<dyn Pane>,
    pub navigator: Arc<dyn Navigator>,
    pub diagnostics: Diagnostics,
}
