//! Cookie lookup for the anti-forgery token.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

use crate::console;

/// Find `name` in a `document.cookie` style string and percent-decode its value.
///
/// The first `name=` segment wins. A value that does not decode to UTF-8 counts as absent.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{}=", name);
    let raw = cookies
        .split(';')
        .map(str::trim)
        .find_map(|segment| segment.strip_prefix(prefix.as_str()))?;

    match percent_decode_str(raw).decode_utf8() {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            console::warn(&format!("[COOKIE] '{}' is not valid UTF-8 ({}), ignoring it", name, e));
            None
        }
    }
}

/// Read a cookie from the current document.
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?;
    let cookies = document.cookie().ok()?;
    find_cookie(&cookies, name)
}
