//! Scroll Restorer
//!
//! Carries the vertical offset across a full page reload through `sessionStorage`.

use crate::console;
use crate::page::Page;

pub const SCROLL_KEY: &str = "scrollPos";

/// Store the offset for the next page load. Overwrites any earlier marker.
pub fn remember<P: Page>(page: &P, offset: f64) {
    page.session_set(SCROLL_KEY, &(offset.round() as i64).to_string());
}

/// Remember `offset`, then reload.
pub fn reload_preserving_scroll<P: Page>(page: &P, offset: f64) {
    remember(page, offset);
    page.reload();
}

/// Consume the marker left by a previous reload, scrolling back to it.
pub fn restore<P: Page>(page: &P) -> Option<f64> {
    let raw = page.session_get(SCROLL_KEY)?;
    page.session_remove(SCROLL_KEY);

    match raw.trim().parse::<f64>() {
        Ok(y) if y.is_finite() => {
            let y = y.trunc();
            page.scroll_to(y);
            Some(y)
        }
        _ => {
            console::warn(&format!("[SCROLL] discarding bad marker {:?}", raw));
            None
        }
    }
}
