//! Admin Context
//!
//! Bundles the HTTP client, page effects, toggle board and config the controllers run against.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::HttpApi;
use crate::board::{SignalBoard, ToggleKey, ToggleState, ToggleView};
use crate::config::{AdminConfig, SyncMode};
use crate::page::{BrowserPage, Page};
use crate::scroll;

pub struct AdminContext<A, P, V> {
    pub api: A,
    pub page: P,
    pub view: V,
    pub config: AdminConfig,
}

pub type BrowserContext = AdminContext<HttpApi, BrowserPage, SignalBoard>;

/// How a successful toggle reached the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Synced {
    Reloaded,
    InPlace,
}

impl<A, P: Page, V: ToggleView> AdminContext<A, P, V> {
    pub fn new(api: A, page: P, view: V, config: AdminConfig) -> Self {
        Self { api, page, view, config }
    }

    /// Reflect an accepted toggle according to the configured sync mode.
    ///
    /// `scroll` is the offset captured before the request; without it a reload leaves no marker.
    pub fn apply_toggle(&self, key: ToggleKey, sent: bool, scroll: Option<f64>) -> Synced {
        match self.config.sync {
            SyncMode::Reload => {
                match scroll {
                    Some(offset) => scroll::reload_preserving_scroll(&self.page, offset),
                    None => self.page.reload(),
                }
                Synced::Reloaded
            }
            SyncMode::InPlace => {
                self.view.show(key, self.toggle_state(sent));
                Synced::InPlace
            }
        }
    }

    pub fn toggle_state(&self, sent: bool) -> ToggleState {
        if sent {
            ToggleState::sent(self.page.clock_label())
        } else {
            ToggleState::unsent()
        }
    }
}

impl BrowserContext {
    pub fn from_config(config: AdminConfig) -> Self {
        Self::new(HttpApi::new(&config), BrowserPage, SignalBoard, config)
    }
}

thread_local! {
    static CONTEXT: RefCell<Option<Rc<BrowserContext>>> = RefCell::new(None);
}

/// Make `ctx` available to event handlers.
pub fn install(ctx: BrowserContext) -> Rc<BrowserContext> {
    let ctx = Rc::new(ctx);
    CONTEXT.with(|slot| *slot.borrow_mut() = Some(ctx.clone()));
    ctx
}

pub fn browser_context() -> Option<Rc<BrowserContext>> {
    CONTEXT.with(|slot| slot.borrow().clone())
}
