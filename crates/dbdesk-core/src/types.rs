//! Core types for DBDESK

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A database value as held by the local row cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// JSON value
    Json(serde_json::Value),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Denormalized copy of a database row, keyed by column name.
///
/// Kept only so the grid stays consistent with the column list after a
/// structural change; the database remains the source of truth.
pub type CachedRow = HashMap<String, Value>;

/// Move the value stored under `old` to `new`.
///
/// Rows without an `old` entry are left untouched. An existing `new` entry
/// is overwritten, so renames onto a live column name must be refused first.
pub fn rename_key(row: &mut CachedRow, old: &str, new: &str) {
    if old == new {
        return;
    }
    if let Some(value) = row.remove(old) {
        row.insert(new.to_string(), value);
    }
}
