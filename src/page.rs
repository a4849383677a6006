//! Browser Page Effects
//!
//! Everything the controllers do to the page outside of the toggle buttons and dropdowns.

use crate::console;

pub trait Page {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, y: f64);
    fn reload(&self);
    /// Blocking alert
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn navigate(&self, url: &str);
    fn open_tab(&self, url: &str);
    /// `document.hidden`
    fn is_hidden(&self) -> bool;
    fn session_get(&self, key: &str) -> Option<String>;
    fn session_set(&self, key: &str, value: &str);
    fn session_remove(&self, key: &str);
    /// Local wall clock as `HH:MM`
    fn clock_label(&self) -> String;
    /// Run `task` once after `delay_ms`
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

// ========================
// Browser Implementation
// ========================

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl BrowserPage {
    fn window(&self) -> Option<web_sys::Window> {
        let window = web_sys::window();
        if window.is_none() {
            console::error("[PAGE] window is unavailable");
        }
        window
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        self.window()?.session_storage().ok().flatten()
    }
}

impl Page for BrowserPage {
    fn scroll_y(&self) -> f64 {
        self.window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        if let Some(w) = self.window() {
            w.scroll_to_with_x_and_y(0.0, y);
        }
    }

    fn reload(&self) {
        if let Some(w) = self.window() {
            if let Err(e) = w.location().reload() {
                console::error(&format!("[PAGE] reload failed: {:?}", e));
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(w) = self.window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn navigate(&self, url: &str) {
        if let Some(w) = self.window() {
            if let Err(e) = w.location().set_href(url) {
                console::error(&format!("[PAGE] navigation to {} failed: {:?}", url, e));
            }
        }
    }

    fn open_tab(&self, url: &str) {
        if let Some(w) = self.window() {
            let _ = w.open_with_url_and_target(url, "_blank");
        }
    }

    fn is_hidden(&self) -> bool {
        self.window()
            .and_then(|w| w.document())
            .map(|d| d.hidden())
            .unwrap_or(false)
    }

    fn session_get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn session_set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                console::warn(&format!("[PAGE] sessionStorage rejected '{}'", key));
            }
        }
    }

    fn session_remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clock_label(&self) -> String {
        let now = js_sys::Date::new_0();
        clock_label(now.get_hours(), now.get_minutes())
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
