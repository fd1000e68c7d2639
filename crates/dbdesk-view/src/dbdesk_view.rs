//! Table view for DBDESK
//!
//! The part of the client that decides which panel of a table is shown and
//! lets the user change the table's structure directly in the grid.
//!
//! ## Features
//!
//! - Section switching (structure, content, info, query) remembered across restarts
//! - Toolbar trigger production, including a confirmed "Delete table"
//! - Optimistic inline column rename with rollback on failure
//! - Allow-NULL toggle applied to the checkbox before the server answers
//! - Connect-to-server flow with persisted session token
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dbdesk_view::{SectionCoordinator, SectionViews, ViewContext};
//!
//! let mut coordinator = SectionCoordinator::new("shop", "users", views, context, &settings.view);
//! coordinator.open(&mut toolbar).await;
//! coordinator.activate(Some("structure")).await;
//! ```

pub mod collaborators;
pub mod logging;

mod context;
mod coordinator;
mod diagnostics;
mod editable;
mod error;
mod login;
mod nullability;
mod section;
mod selection;
mod structure;

pub use collaborators::{
    ConfirmationDialog, ConfirmationRequest, LoadingFlag, LoadingIndicator, Navigator, Notifier,
    Pane, Route, SectionView, Toolbar, ToolbarZone, TriggerAction, TriggerDescriptor,
};
pub use context::ViewContext;
pub use coordinator::{DeleteOutcome, SectionCoordinator, SectionViews};
pub use diagnostics::{Diagnostic, Diagnostics, MAX_DIAGNOSTICS};
pub use editable::{CommitDecision, EditStatus, EditableField, PendingCommit};
pub use error::{ValidationFailure, ViewError, ViewResult};
pub use login::{LoginController, LoginOutcome, TOKEN_KEY};
pub use nullability::NullabilityToggle;
pub use section::Section;
pub use selection::PersistedSelection;
pub use structure::{
    RenameOutcome, StructureContext, StructureEditController, StructureRenderer, StructureSection,
};
