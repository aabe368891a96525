//! Small helpers over `web_sys`. Every lookup degrades to `None` instead of
//! panicking so a missing element turns the caller into a no-op.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0)
}

/// Height the document can scroll through: scrollHeight minus the viewport.
pub fn scrollable_height() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let viewport = root.client_height() as f64;
    (root.scroll_height() as f64 - viewport).max(0.0)
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

/// Whether the event landed in an element where typing is expected.
pub fn is_text_field(target: Option<&web_sys::EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_ref::<Element>()) else {
        return false;
    };
    matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA")
}

/// Milliseconds since an arbitrary origin, for animation timing.
pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Whether the user asked for reduced motion. Read once at startup; the
/// session keeps the answer for its whole lifetime.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
