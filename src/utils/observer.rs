//! Owned browser event subscriptions.
//!
//! Each handle keeps its JS closure alive and unsubscribes in `Drop`, so
//! whoever owns the handle decides exactly when the subscription ends.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::core::Intersection;
use crate::core::error::ObserverError;

// ============================================================================
// ViewportObserver
// ============================================================================

/// An `IntersectionObserver` watching a single element.
///
/// The handler receives an [`Intersection`] every time the element's visible
/// ratio crosses one of `thresholds`. Dropping the handle disconnects the
/// observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ViewportObserver {
    pub fn observe(
        target: &Element,
        thresholds: &[f64],
        mut on_entry: impl FnMut(Intersection) + 'static,
    ) -> Result<Self, ObserverError> {
        if dom::window().is_none() {
            return Err(ObserverError::NoWindow);
        }
        if !dom::supports_intersection_observer() {
            return Err(ObserverError::Unsupported);
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                on_entry(intersection(&entry));
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        let thresholds: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        options.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserverError::ObserveFailed(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

fn intersection(entry: &IntersectionObserverEntry) -> Intersection {
    if !entry.is_intersecting() {
        return Intersection::default();
    }
    let viewport_px = entry
        .root_bounds()
        .map(|r| r.height())
        .or_else(|| dom::window()?.inner_height().ok()?.as_f64())
        .unwrap_or(0.0);
    Intersection {
        ratio: entry.intersection_ratio(),
        visible_px: entry.intersection_rect().height(),
        viewport_px,
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// ============================================================================
// WindowListener
// ============================================================================

/// An event listener attached to `window`, removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    /// Attach `handler` to `event`. Returns `None` outside a browser.
    pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = dom::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = dom::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let bump = {
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        };
        (hits, bump)
    }

    #[wasm_bindgen_test]
    async fn test_viewport_observer_is_silent_after_drop() {
        let document = dom::window().and_then(|w| w.document()).unwrap();
        let element = document.create_element("section").unwrap();
        document.body().unwrap().append_child(&element).unwrap();

        let (kept_hits, mut kept_bump) = counter();
        let (dropped_hits, mut dropped_bump) = counter();
        let kept = ViewportObserver::observe(&element, &[0.0], move |_| kept_bump()).unwrap();
        let dropped =
            ViewportObserver::observe(&element, &[0.0], move |_| dropped_bump()).unwrap();
        drop(dropped);

        // Every observer gets an initial report for its target.
        TimeoutFuture::new(100).await;
        assert!(kept_hits.get() >= 1);
        assert_eq!(dropped_hits.get(), 0);

        drop(kept);
        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_window_listener_is_removed_on_drop() {
        let window = dom::window().unwrap();
        let (hits, bump) = counter();
        let listener = WindowListener::add("hub-ping", bump).unwrap();

        window.dispatch_event(&web_sys::Event::new("hub-ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);

        drop(listener);
        window.dispatch_event(&web_sys::Event::new("hub-ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
