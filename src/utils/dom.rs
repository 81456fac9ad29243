//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset in pixels (0 when unavailable).
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the element with the given id into view.
///
/// Returns `true` if the element was found.
pub fn scroll_to_id(id: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    } else {
        false
    }
}

/// Whether the host environment provides `IntersectionObserver`.
pub fn supports_intersection_observer() -> bool {
    window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    })
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
