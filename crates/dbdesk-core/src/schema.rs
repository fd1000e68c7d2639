//! Table structure as held in memory by the view layer

use serde::{Deserialize, Serialize};

use crate::types::{CachedRow, rename_key};

/// Column information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub ordinal: usize,
    pub data_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
}

impl ColumnInfo {
    /// Create a nullable TEXT column with the given name
    pub fn new(name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
            data_type: "TEXT".to_string(),
            nullable: true,
            default_value: None,
            is_primary_key: false,
        }
    }

    /// Builder: set data type
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    /// Builder: set as not null
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Builder: set as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.nullable = false;
        self
    }
}

/// In-memory copy of one table: its column list and the cached rows shown
/// in the content grid.
///
/// Columns are only mutated after the server has confirmed a change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    pub database: String,
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<CachedRow>,
}

impl TableSnapshot {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Builder: set the column list
    pub fn with_columns(mut self, columns: Vec<ColumnInfo>) -> Self {
        self.columns = columns;
        self
    }

    /// Builder: set the cached rows
    pub fn with_rows(mut self, rows: Vec<CachedRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Look up a column by its current name
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut ColumnInfo> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Apply a confirmed column rename.
    ///
    /// Rewrites the column's name and re-keys every cached row. Returns
    /// `false` when no column named `old` exists; the rows are left alone in
    /// that case, use [`TableSnapshot::rekey_rows`] for them.
    pub fn apply_rename(&mut self, old: &str, new: &str) -> bool {
        let Some(column) = self.column_mut(old) else {
            return false;
        };
        column.name = new.to_string();
        self.rekey_rows(old, new);
        true
    }

    /// Move every cached row's `old` entry to `new`
    pub fn rekey_rows(&mut self, old: &str, new: &str) {
        for row in &mut self.rows {
            rename_key(row, old, new);
        }

        tracing::debug!(
            table = %self.name,
            old = %old,
            new = %new,
            rows = self.rows.len(),
            "re-keyed cached rows"
        );
    }

    /// Apply a confirmed nullability change. Returns `false` for unknown columns.
    pub fn apply_nullability(&mut self, column: &str, allow_null: bool) -> bool {
        match self.column_mut(column) {
            Some(col) => {
                col.nullable = allow_null;
                true
            }
            None => false,
        }
    }
}
