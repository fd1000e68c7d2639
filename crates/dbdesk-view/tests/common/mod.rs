//! Common test utilities and mocks

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

use dbdesk_core::{
    CachedRow, ColumnInfo, ConnectParams, DbdeskError, Result, ServerConnector, TableBackend,
    TableSnapshot, Value,
};
use dbdesk_settings::{KeyValueStore, MemoryStore, ViewSettings};
use dbdesk_view::{
    ConfirmationDialog, ConfirmationRequest, Diagnostics, LoadingIndicator, Navigator, Notifier,
    Pane, Route, SectionCoordinator, SectionView, SectionViews, Toolbar, TriggerDescriptor,
    ViewContext,
};

/// Ordered record of side effects across all collaborators
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// Mock remote table service.
///
/// Records every call so tests can assert that validation failures never
/// reach the server.
pub struct MockBackend {
    pub should_fail: bool,
    pub columns: Vec<ColumnInfo>,
    pub call_log: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            should_fail: false,
            columns: vec![],
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnInfo>) -> Self {
        self.columns = columns;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.call_log.lock().push(call);
        if self.should_fail {
            Err(DbdeskError::Query("ALTER rejected by server".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TableBackend for MockBackend {
    async fn rename_column(&self, table: &str, old_name: &str, new_name: &str) -> Result<()> {
        self.record(format!("rename_column {} {} {}", table, old_name, new_name))
    }

    async fn set_column_nullability(
        &self,
        table: &str,
        column: &str,
        allow_null: bool,
    ) -> Result<()> {
        self.record(format!(
            "set_column_nullability {} {} {}",
            table, column, allow_null
        ))
    }

    async fn drop_table(&self, table: &str) -> Result<()> {
        self.record(format!("drop_table {}", table))
    }

    async fn load_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        self.record(format!("load_columns {}", table))?;
        Ok(self.columns.clone())
    }
}

/// Backend whose rename applies server-side, then waits for the test to
/// release it. Column loads see the server state, so a reload can land while
/// the rename is still unanswered.
pub struct GatedBackend {
    pub server_columns: Mutex<Vec<ColumnInfo>>,
    pub rename_started: Notify,
    pub release: Notify,
}

impl GatedBackend {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self {
            server_columns: Mutex::new(columns),
            rename_started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl TableBackend for GatedBackend {
    async fn rename_column(&self, _table: &str, old_name: &str, new_name: &str) -> Result<()> {
        if let Some(column) = self
            .server_columns
            .lock()
            .iter_mut()
            .find(|c| c.name == old_name)
        {
            column.name = new_name.to_string();
        }
        self.rename_started.notify_one();
        self.release.notified().await;
        Ok(())
    }

    async fn set_column_nullability(&self, _: &str, _: &str, _: bool) -> Result<()> {
        Ok(())
    }

    async fn drop_table(&self, _: &str) -> Result<()> {
        Ok(())
    }

    async fn load_columns(&self, _table: &str) -> Result<Vec<ColumnInfo>> {
        Ok(self.server_columns.lock().clone())
    }
}

/// Memory store that also logs writes to the shared event log
pub struct RecordingStore {
    inner: MemoryStore,
    log: EventLog,
}

impl RecordingStore {
    pub fn new(log: EventLog) -> Self {
        Self {
            inner: MemoryStore::new(),
            log,
        }
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.log.push(format!("persist:{}", value));
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.inner.remove(key)
    }
}

/// Store whose writes always fail
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage is read-only")
    }

    fn remove(&self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage is read-only")
    }
}

pub struct RecordingLoading(pub EventLog);

impl LoadingIndicator for RecordingLoading {
    fn set_loading(&self, loading: bool) {
        self.0.push(format!("loading:{}", loading));
    }
}

pub struct RecordingPane(pub EventLog);

impl Pane for RecordingPane {
    fn open(&self) {
        self.0.push("pane:open");
    }

    fn close(&self) {
        self.0.push("pane:close");
    }

    fn render(&self) {
        self.0.push("pane:render");
    }
}

pub struct RecordingView {
    pub name: &'static str,
    pub log: EventLog,
    pub should_fail: bool,
}

#[async_trait]
impl SectionView for RecordingView {
    async fn render(&self) -> Result<()> {
        self.log.push(format!("render:{}", self.name));
        if self.should_fail {
            Err(DbdeskError::Connection("lost connection".into()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct RecordingToolbar {
    pub items: Vec<TriggerDescriptor>,
    pub clears: usize,
}

impl Toolbar for RecordingToolbar {
    fn clear(&mut self) {
        self.items.clear();
        self.clears += 1;
    }

    fn add_item(&mut self, item: TriggerDescriptor) {
        self.items.push(item);
    }
}

impl RecordingToolbar {
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.items
            .iter()
            .filter(|i| i.is_active)
            .map(|i| i.label)
            .collect()
    }
}

pub struct ScriptedDialog {
    pub answer: bool,
    pub requests: Mutex<Vec<ConfirmationRequest>>,
}

impl ScriptedDialog {
    pub fn confirming() -> Self {
        Self {
            answer: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfirmationDialog for ScriptedDialog {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        self.requests.lock().push(request.clone());
        self.answer
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}

pub struct MockConnector {
    pub token: Option<String>,
    pub should_fail: bool,
    pub attempts: Mutex<Vec<ConnectParams>>,
}

impl MockConnector {
    pub fn accepting(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            should_fail: false,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            token: None,
            should_fail: false,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            token: None,
            should_fail: true,
            attempts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ServerConnector for MockConnector {
    async fn connect(&self, params: &ConnectParams) -> Result<Option<String>> {
        self.attempts.lock().push(params.clone());
        if self.should_fail {
            return Err(DbdeskError::Connection("connection refused".into()));
        }
        Ok(self.token.clone())
    }
}

/// `users` table with an `email` column and one cached row
pub fn users_table() -> TableSnapshot {
    let row: CachedRow = [
        ("id".to_string(), Value::Int64(1)),
        ("email".to_string(), Value::from("a@x.com")),
    ]
    .into_iter()
    .collect();

    TableSnapshot::new("shop", "users")
        .with_columns(users_columns())
        .with_rows(vec![row])
}

pub fn users_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("id", 0).data_type("INTEGER").primary_key(),
        ColumnInfo::new("email", 1).data_type("VARCHAR(255)"),
    ]
}

/// Everything a coordinator test needs, wired to one event log
pub struct Harness {
    pub log: EventLog,
    pub backend: Arc<MockBackend>,
    pub store: Arc<RecordingStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub diagnostics: Diagnostics,
    pub context: ViewContext,
    pub views: SectionViews,
}

impl Harness {
    pub fn new(backend: MockBackend) -> Self {
        Self::build(backend, None)
    }

    pub fn with_failing_view(backend: MockBackend, failing: &'static str) -> Self {
        Self::build(backend, Some(failing))
    }

    fn build(backend: MockBackend, failing: Option<&'static str>) -> Self {
        let log = EventLog::default();
        let backend = Arc::new(backend);
        let store = Arc::new(RecordingStore::new(log.clone()));
        let navigator = Arc::new(RecordingNavigator::default());
        let diagnostics = Diagnostics::new();

        let context = ViewContext {
            backend: backend.clone(),
            store: store.clone(),
            loading: Arc::new(RecordingLoading(log.clone())),
            pane: Arc::new(RecordingPane(log.clone())),
            navigator: navigator.clone(),
            diagnostics: diagnostics.clone(),
        };

        let view = |name: &'static str| -> Arc<dyn SectionView> {
            Arc::new(RecordingView {
                name,
                log: log.clone(),
                should_fail: failing == Some(name),
            })
        };
        let views = SectionViews {
            structure: view("structure"),
            content: view("content"),
            info: view("info"),
            query: view("query"),
        };

        Self {
            log,
            backend,
            store,
            navigator,
            diagnostics,
            context,
            views,
        }
    }

    /// Pretend a previous session remembered `key`
    pub fn remember(&self, key: &str) {
        self.store
            .inner
            .set(&ViewSettings::default().selection_key, key)
            .unwrap();
    }

    pub fn coordinator(&self) -> SectionCoordinator {
        self.coordinator_with(&ViewSettings::default())
    }

    pub fn coordinator_with(&self, settings: &ViewSettings) -> SectionCoordinator {
        SectionCoordinator::new(
            "shop",
            "users",
            self.views.clone(),
            self.context.clone(),
            settings,
        )
    }
}
