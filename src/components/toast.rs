//! Toast stack rendered in the bottom-right corner.
//!
//! Toasts are pushed through [`AppContext::notify`], which also schedules
//! their dismissal; this component only renders the queue.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::classes;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <ol class=css::stack aria-live="polite">
            <For
                each=move || ctx.toasts.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let (icon, tone) = match toast.kind {
                        ToastKind::Success => (ic::CHECK, css::success),
                        ToastKind::Error => (ic::ALERT, css::error),
                    };
                    view! {
                        <li class=classes(css::toast, tone, true) role="status">
                            <span class=css::icon><Icon icon=icon /></span>
                            <div class=css::body>
                                <p class=css::title>{toast.title}</p>
                                {toast.description.map(|d| view! { <p class=css::description>{d}</p> })}
                            </div>
                            <button
                                class=css::close
                                aria-label="Dismiss notification"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
