//! Interfaces the view layer drives but does not implement
//!
//! Rendering, the toolbar widget, the side pane, dialogs and page navigation
//! all live outside this crate. Everything here is passed in explicitly, so
//! no part of the view reaches for an ambient "current view" or "current
//! table".

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dbdesk_core::Result;

use crate::section::Section;

/// Process-wide busy indicator. Setting the same state twice is harmless.
pub trait LoadingIndicator: Send + Sync {
    fn set_loading(&self, loading: bool);
}

/// Plain shared flag, for embedders without a spinner of their own
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    loading: Arc<AtomicBool>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for LoadingFlag {
    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
    }
}

/// The side pane / overlay next to the main area
pub trait Pane: Send + Sync {
    fn open(&self);
    fn close(&self);
    /// Draw the pane chrome once when the view is first shown
    fn render(&self) {}
}

/// Render entry point of one section
#[async_trait]
pub trait SectionView: Send + Sync {
    /// Fetch whatever the section shows and hand it to the templating layer
    async fn render(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarZone {
    Left,
    Right,
}

/// What a toolbar trigger does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Activate(Section),
    DeleteTable,
}

/// One toolbar item as produced by the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDescriptor {
    pub zone: ToolbarZone,
    pub label: &'static str,
    pub action: TriggerAction,
    pub is_active: bool,
}

/// Navigation trigger registry
pub trait Toolbar {
    fn clear(&mut self);
    fn add_item(&mut self, item: TriggerDescriptor);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Two-button confirmation dialog
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    /// Resolves to `true` only on explicit confirmation
    async fn confirm(&self, request: &ConfirmationRequest) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Database list shown after logging in
    DatabaseList,
    /// Table list of one database
    Database(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::DatabaseList => "#/database/".to_string(),
            Route::Database(name) => format!("#/database/{}/", name),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Blocking alert, used only by the connect flow
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
