//! The mutually exclusive top-level panels of the table view

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Structure,
    Content,
    Info,
    Query,
}

impl Section {
    /// Toolbar order
    pub const ALL: [Section; 4] = [
        Section::Structure,
        Section::Content,
        Section::Info,
        Section::Query,
    ];

    /// Shown when nothing (or nothing recognisable) was remembered
    pub const DEFAULT: Section = Section::Content;

    /// Key stored in the persisted selection
    pub fn key(self) -> &'static str {
        match self {
            Section::Structure => "structure",
            Section::Content => "content",
            Section::Info => "info",
            Section::Query => "query",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Structure => "Structure",
            Section::Content => "Content",
            Section::Info => "Table Info",
            Section::Query => "Query",
        }
    }

    pub fn parse(key: &str) -> Result<Section, ValidationFailure> {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| ValidationFailure::InvalidSection(key.to_string()))
    }

    /// Resolve an optional key, substituting [`Section::DEFAULT`] for absent
    /// or unrecognised values.
    pub fn resolve(key: Option<&str>) -> Section {
        match key {
            None | Some("") => Self::DEFAULT,
            Some(key) => Self::parse(key).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "falling back to default section");
                Self::DEFAULT
            }),
        }
    }

    /// The query console lives in the side pane, so it opens it instead of
    /// leaving it closed.
    pub fn opens_pane(self) -> bool {
        matches!(self, Section::Query)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
