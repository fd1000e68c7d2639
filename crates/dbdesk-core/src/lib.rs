//! DBDESK Core - Core abstractions for the table view layer
//!
//! This crate provides the fundamental types and traits that the other
//! DBDESK crates depend on. It defines:
//!
//! - `TableBackend` - Trait for the remote table service (structural edits, drops)
//! - `ServerConnector` - Trait for the login round-trip
//! - `TableSnapshot` - In-memory copy of a table's columns and cached rows
//! - Common types like `Value`, `CachedRow`, `ColumnInfo`

mod backend;
mod error;
mod schema;
mod types;

pub use backend::*;
pub use error::*;
pub use schema::*;
pub use types::*;
