//! In-memory fakes for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::api::{AdminApi, ApiResponse};
use crate::board::{ToggleKey, ToggleState, ToggleView};
use crate::config::AdminConfig;
use crate::context::AdminContext;
use crate::error::AdminError;
use crate::page::Page;

pub type FakeContext = AdminContext<FakeApi, FakePage, FakeView>;

pub fn fake_context(api: FakeApi) -> FakeContext {
    fake_context_with(api, AdminConfig::default())
}

pub fn fake_context_with(api: FakeApi, config: AdminConfig) -> FakeContext {
    AdminContext::new(api, FakePage::new(), FakeView::default(), config)
}

/// Shared ordering log
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<&'static str>>>);

impl EventLog {
    pub fn push(&self, entry: &'static str) {
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

// ========================
// Api
// ========================

impl ApiResponse {
    pub fn ok() -> Self {
        Self { success: true, ..Default::default() }
    }
}

#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<(String, serde_json::Value)>>,
    responses: RefCell<VecDeque<Result<ApiResponse, AdminError>>>,
    log: Option<EventLog>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: EventLog) -> Self {
        Self { log: Some(log), ..Self::default() }
    }

    /// Queue the result of the next POST. Unqueued POSTs succeed.
    pub fn respond(&self, result: Result<ApiResponse, AdminError>) {
        self.responses.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.borrow().clone()
    }
}

impl AdminApi for FakeApi {
    async fn post(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, AdminError> {
        self.calls.borrow_mut().push((endpoint.to_string(), body));
        if let Some(log) = &self.log {
            log.push("post");
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::ok()))
    }
}

// ========================
// Page
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ScrollTo(f64),
    Reload,
    Alert(String),
    Confirm(String),
    Navigate(String),
    OpenTab(String),
}

#[derive(Default)]
struct PageState {
    events: RefCell<Vec<PageEvent>>,
    session: RefCell<HashMap<String, String>>,
    scroll_y: Cell<f64>,
    hidden: Cell<bool>,
    confirm_answer: Cell<bool>,
    scheduled: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

/// Clones share state so scheduled tasks can capture the page
#[derive(Clone, Default)]
pub struct FakePage(Rc<PageState>);

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.0.scroll_y.set(y);
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.0.hidden.set(hidden);
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.0.confirm_answer.set(answer);
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.0.events.borrow().clone()
    }

    pub fn session_value(&self, key: &str) -> Option<String> {
        self.0.session.borrow().get(key).cloned()
    }

    /// Delays of the tasks waiting to run
    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.0.scheduled.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_scheduled(&self) {
        let tasks: Vec<_> = self.0.scheduled.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }

    fn record(&self, event: PageEvent) {
        self.0.events.borrow_mut().push(event);
    }
}

impl Page for FakePage {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y.get()
    }

    fn scroll_to(&self, y: f64) {
        self.0.scroll_y.set(y);
        self.record(PageEvent::ScrollTo(y));
    }

    fn reload(&self) {
        self.record(PageEvent::Reload);
    }

    fn alert(&self, message: &str) {
        self.record(PageEvent::Alert(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.record(PageEvent::Confirm(message.to_string()));
        self.0.confirm_answer.get()
    }

    fn navigate(&self, url: &str) {
        self.record(PageEvent::Navigate(url.to_string()));
    }

    fn open_tab(&self, url: &str) {
        self.record(PageEvent::OpenTab(url.to_string()));
    }

    fn is_hidden(&self) -> bool {
        self.0.hidden.get()
    }

    fn session_get(&self, key: &str) -> Option<String> {
        self.session_value(key)
    }

    fn session_set(&self, key: &str, value: &str) {
        self.0.session.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn session_remove(&self, key: &str) {
        self.0.session.borrow_mut().remove(key);
    }

    fn clock_label(&self) -> String {
        "14:30".to_string()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.0.scheduled.borrow_mut().push((delay_ms, task));
    }
}

// ========================
// Toggle view
// ========================

#[derive(Default)]
pub struct FakeView {
    shown: RefCell<Vec<(ToggleKey, ToggleState)>>,
}

impl FakeView {
    pub fn shown(&self) -> Vec<(ToggleKey, ToggleState)> {
        self.shown.borrow().clone()
    }
}

impl ToggleView for FakeView {
    fn show(&self, key: ToggleKey, state: ToggleState) {
        self.shown.borrow_mut().push((key, state));
    }
}
