//! Connect-to-server flow

use std::sync::Arc;

use dbdesk_core::{ConnectParams, ServerConnector};
use dbdesk_settings::KeyValueStore;

use crate::collaborators::{Navigator, Notifier, Route};

/// Storage key of the session token
pub const TOKEN_KEY: &str = "token";

const CONNECT_FAILED: &str = "Sorry, could not connect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Connected { token: String },
    Refused,
}

pub struct LoginController {
    connector: Arc<dyn ServerConnector>,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl LoginController {
    pub fn new(
        connector: Arc<dyn ServerConnector>,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            connector,
            store,
            navigator,
            notifier,
        }
    }

    /// Values the connect form is pre-filled with
    pub fn form_defaults() -> ConnectParams {
        ConnectParams::default()
    }

    /// Session token saved by a previous successful connect
    pub fn saved_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Connect, remember the token and move on to the database list.
    ///
    /// A refusal or a transport error shows an alert and stays on the form.
    #[tracing::instrument(skip(self, params), fields(host = %params.hostname, user = %params.username))]
    pub async fn connect(&self, params: &ConnectParams) -> LoginOutcome {
        let token = match self.connector.connect(params).await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "connect round-trip failed");
                None
            }
        };

        match token {
            Some(token) => {
                if let Err(err) = self.store.set(TOKEN_KEY, &token) {
                    tracing::warn!(error = %err, "Failed to persist session token");
                }
                tracing::info!("Connected to server");
                self.navigator.navigate(Route::DatabaseList);
                LoginOutcome::Connected { token }
            }
            None => {
                self.notifier.alert(CONNECT_FAILED);
                LoginOutcome::Refused
            }
        }
    }
}
