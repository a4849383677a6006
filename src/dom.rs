//! DOM lookup helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::AdminError;

pub fn document() -> Result<Document, AdminError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AdminError::Dom("document is unavailable".to_string()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, AdminError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| AdminError::Dom(format!("bad selector {}: {:?}", selector, e)))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Numeric id stored in a data attribute.
pub fn parse_id(element: &Element, attribute: &str) -> Option<u64> {
    element.get_attribute(attribute)?.trim().parse().ok()
}

/// Run `f` once the page has finished loading (immediately if it already has).
pub fn on_load(f: impl FnOnce() + 'static) -> Result<(), AdminError> {
    let window = web_sys::window().ok_or_else(|| AdminError::Dom("window is unavailable".to_string()))?;
    if document()?.ready_state() == "complete" {
        f();
        return Ok(());
    }
    let on_load = wasm_bindgen::closure::Closure::once(f);
    window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| AdminError::Dom(format!("{:?}", e)))?;
    on_load.forget();
    Ok(())
}
