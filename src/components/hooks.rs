//! Custom hooks shared by the page sections.
//!
//! Each hook ties a browser subscription to the calling component: the
//! subscription is acquired when the component mounts and released in
//! `on_cleanup`, whichever way the component goes away.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::{CounterGroup, Intersection, Reveal, Transition};
use crate::utils::{ViewportObserver, WindowListener, dom};

/// Reveal a section the first time enough of it scrolls into view.
///
/// Returns a flag that flips to `true` once and stays there. A section
/// taller than the viewport also counts once it fills `threshold` of the
/// viewport. If the browser
/// cannot observe the section, or `threshold` is invalid, the section is
/// shown immediately instead of staying hidden forever.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let visible = RwSignal::new(false);

    let reveal = match Reveal::new(threshold) {
        Ok(reveal) => reveal,
        Err(err) => {
            log::error!("reveal disabled, showing section: {}", err);
            visible.set(true);
            return visible.into();
        }
    };

    let state = StoredValue::new_local(reveal);
    let observer = StoredValue::new_local(None::<ViewportObserver>);

    Effect::new(move || {
        if visible.get() {
            // Visible is terminal; nothing left to observe.
            observer.update_value(|o| {
                o.take();
            });
            return;
        }

        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }

        let on_entry = move |hit: Intersection| {
            if state.try_update_value(|r| r.observe(hit.coverage())) == Some(Transition::Revealed) {
                visible.try_set(true);
            }
        };

        let thresholds = state.with_value(Reveal::observer_thresholds);
        match ViewportObserver::observe(&element, &thresholds, on_entry) {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(err) => {
                log::warn!("cannot observe section, showing it now: {}", err);
                state.update_value(|r| {
                    r.fail_open();
                });
                visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|o| {
            o.take();
        });
    });

    visible.into()
}

/// Drive a [`CounterGroup`] once `armed` turns true.
///
/// Returns the displayed values (all 0 until armed). The group is consumed
/// on arming, so it never restarts. One timer ticks every counter; it stops
/// after the last step or as soon as the owning component is gone.
pub fn use_count_up(armed: Signal<bool>, group: CounterGroup) -> ReadSignal<Vec<u64>> {
    let (counts, set_counts) = signal(group.current());
    let pending = StoredValue::new_local(Some(group));

    Effect::new(move || {
        if !armed.get() {
            return;
        }
        let Some(mut group) = pending.try_update_value(Option::take).flatten() else {
            return;
        };

        let step_ms = group.timing().step_ms();
        log::debug!("count-up armed: {} steps of {}ms", group.timing().steps(), step_ms);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(step_ms).await;
                let Some(values) = group.tick() else {
                    break;
                };
                if set_counts.try_set(values).is_some() {
                    // Section was torn down mid-animation.
                    break;
                }
            }
        });
    });

    counts
}

/// Track `window.scrollY`, listening only while the component is mounted.
pub fn use_window_scroll() -> ReadSignal<f64> {
    let (scroll, set_scroll) = signal(dom::scroll_y());

    let listener = WindowListener::add("scroll", move || {
        set_scroll.try_set(dom::scroll_y());
    });
    let listener = StoredValue::new_local(listener);

    on_cleanup(move || {
        listener.try_update_value(|l| {
            l.take();
        });
    });

    scroll
}
