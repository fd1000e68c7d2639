//! Error types for DBDESK

use thiserror::Error;

/// Core error type for DBDESK operations
#[derive(Error, Debug)]
pub enum DbdeskError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),
}

/// Result type alias for DBDESK operations
pub type Result<T> = std::result::Result<T, DbdeskError>;
