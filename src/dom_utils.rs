//! dom_utils.rs – thin helper layer for repetitive DOM operations.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement};

/// The current document, `None` outside a browser.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element the page layout guarantees, failing loudly otherwise.
pub fn require_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Set the border colour of an element through its inline style.
pub fn set_border_color(el: &Element, color: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("border-color", color);
    }
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Mark `el` as carrying the `key` listeners. Returns `false` when an
/// earlier call already did, so re-running an `attach` is a no-op.
pub fn claim_listeners(el: &Element, key: &str) -> Result<bool, JsValue> {
    let attr = format!("data-wired-{}", key);
    if el.has_attribute(&attr) {
        return Ok(false);
    }
    el.set_attribute(&attr, "")?;
    Ok(true)
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}
