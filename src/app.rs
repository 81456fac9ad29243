//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! toast notification surface shared by every section.

use gloo_timers::callback::Timeout;
use leptos::error::Errors;
use leptos::prelude::*;

use crate::components::{
    CommunityStats, FeaturedResources, Footer, Hero, ResourceDirectory, SubmitResourceForm,
    Toaster,
};
use crate::config::toast;
use crate::models::{Toast, ToastQueue};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toasts currently on screen.
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(ToastQueue::new(toast::MAX_VISIBLE)),
        }
    }

    /// Shows a toast and schedules its dismissal.
    ///
    /// Fire and forget: nothing is reported back to the caller.
    pub fn notify(&self, toast: Toast) {
        let mut id = 0;
        self.toasts.update(|q| id = q.push(toast));

        let toasts = self.toasts;
        Timeout::new(toast::DISMISS_MS, move || {
            toasts.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|q| q.dismiss(id));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the page in an ErrorBoundary so a misconfigured section shows a
///   readable error instead of a blank page
/// - Renders every page section in order, plus the toast stack
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| view! { <SetupFailed errors=errors /> }>
            <main>
                <Hero />
                <FeaturedResources />
                <CommunityStats />
                <ResourceDirectory />
                <SubmitResourceForm />
                <Footer />
            </main>
        </ErrorBoundary>
        <Toaster />
    }
}

/// Full-page notice listing the setup errors caught by the boundary.
#[component]
fn SetupFailed(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::failed>
            <div class=css::panel>
                <h1 class=css::title>"Something went wrong"</h1>
                <p class=css::hint>
                    "Part of the page could not be set up. Please try reloading."
                </p>
                <ul class=css::errors>
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                    }}
                </ul>
                <button class=css::reload on:click=reload>"Reload Page"</button>
            </div>
        </div>
    }
}
