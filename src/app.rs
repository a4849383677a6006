//! Admin Page Start-up
//!
//! Wires whatever the current admin page carries: status dropdowns, toggle buttons,
//! and the scroll marker left by a previous reload.

use crate::board::SignalBoard;
use crate::cart;
use crate::components::mount_toggle_buttons;
use crate::config::AdminConfig;
use crate::console;
use crate::context::{self, BrowserContext};
use crate::dom;
use crate::error::AdminError;
use crate::lead;
use crate::scroll;

pub fn start() {
    let config = AdminConfig::load();
    let ctx = context::install(BrowserContext::from_config(config));

    let page = ctx.page;
    if let Err(e) = dom::on_load(move || {
        if let Some(y) = scroll::restore(&page) {
            console::log(&format!("[SCROLL] restored to {}", y));
        }
    }) {
        console::error(&format!("[APP] scroll restore not scheduled: {}", e));
    }

    report("cart status selects", cart::bind_status_selects());
    report("lead status selects", lead::bind_status_selects());
    report("toggle buttons", mount_toggle_buttons(&ctx.config.sent_color));

    console::log(&format!(
        "[APP] ready, sync={:?}, {} toggle(s) registered",
        ctx.config.sync,
        SignalBoard::len()
    ));
}

fn report(what: &str, result: Result<usize, AdminError>) {
    match result {
        Ok(0) => {}
        Ok(n) => console::log(&format!("[APP] bound {} {}", n, what)),
        Err(e) => console::error(&format!("[APP] binding {} failed: {}", what, e)),
    }
}
