//! Remote service traits consumed by the view layer
//!
//! The view never builds SQL or speaks a wire protocol itself. Every
//! structural change goes through a [`TableBackend`], and the login screen
//! goes through a [`ServerConnector`]. All calls are single-shot and resolve
//! to success or failure; timeouts are the implementor's responsibility.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ColumnInfo, Result};

/// The remote table service
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Rename a column of `table` from `old_name` to `new_name`
    async fn rename_column(&self, table: &str, old_name: &str, new_name: &str) -> Result<()>;

    /// Change whether `column` of `table` accepts NULL values
    async fn set_column_nullability(&self, table: &str, column: &str, allow_null: bool)
    -> Result<()>;

    /// Drop `table` and all of its data
    async fn drop_table(&self, table: &str) -> Result<()>;

    /// Fetch the full column list of `table`
    async fn load_columns(&self, table: &str) -> Result<Vec<ColumnInfo>>;
}

/// Parameters entered on the connect-to-server form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectParams {
    pub hostname: String,
    pub username: String,
    pub password: String,
    /// Empty means the driver default
    pub port: String,
}

impl Default for ConnectParams {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            username: "root".to_string(),
            password: String::new(),
            port: String::new(),
        }
    }
}

/// Establishes a session with a database server
#[async_trait]
pub trait ServerConnector: Send + Sync {
    /// Returns a session token, or `None` when the server refused the credentials
    async fn connect(&self, params: &ConnectParams) -> Result<Option<String>>;
}
