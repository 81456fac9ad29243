//! Hero banner with parallax layers and scroll shortcuts.

use leptos::prelude::*;
use leptos_icons::Icon;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::hooks::use_window_scroll;
use crate::components::icons as ic;
use crate::config::{CITY, RESOURCES_ANCHOR, SUBMIT_ANCHOR, hero};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero.module.css");

/// Placement of one decorative star, in percent of the banner.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Star {
    left: f64,
    top: f64,
    /// Pulse animation delay in seconds.
    delay: f64,
    /// Parallax factor.
    depth: f64,
}

/// Deterministic scatter, so the layout is stable between renders.
fn star(index: usize) -> Star {
    let mut rng = SmallRng::seed_from_u64(index as u64);
    Star {
        left: rng.gen_range(0.0..100.0),
        top: rng.gen_range(0.0..100.0),
        delay: rng.gen_range(0.0..3.0),
        depth: rng.gen_range(0.2..0.5),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = use_window_scroll();
    let parallax = move |factor: f64| format!("translateY({:.1}px)", scroll.get() * factor);

    let stars = (0..hero::STAR_COUNT)
        .map(|i| {
            let star = star(i);
            view! {
                <span
                    class=css::star
                    style:left=format!("{:.2}%", star.left)
                    style:top=format!("{:.2}%", star.top)
                    style:animation-delay=format!("{:.2}s", star.delay)
                    style:transform=move || parallax(star.depth)
                ></span>
            }
        })
        .collect_view();

    view! {
        <section class=css::hero>
            <div
                class=css::background
                style:transform=move || parallax(hero::BACKGROUND_PARALLAX)
            >
                <div class=css::backdrop></div>
            </div>

            <div class=css::stars aria-hidden="true">{stars}</div>

            <div class=css::content>
                <div
                    class=css::inner
                    style:transform=move || parallax(hero::CONTENT_PARALLAX)
                >
                    <span class=css::eyebrow>{CITY}</span>
                    <h1 class=css::title>
                        <span class=css::titleTop>"Community"</span>
                        <span class=css::titleAccent>"Resource Hub"</span>
                    </h1>
                    <p class=css::lead>
                        "Discover local non-profits, support services, community programs, and resources that strengthen our Texas community"
                    </p>
                    <div class=css::actions>
                        <button
                            class=css::primary
                            on:click=move |_| {
                                dom::scroll_to_id(RESOURCES_ANCHOR);
                            }
                        >
                            "Explore Resources"
                        </button>
                        <button
                            class=css::secondary
                            on:click=move |_| {
                                dom::scroll_to_id(SUBMIT_ANCHOR);
                            }
                        >
                            "Submit Resource"
                        </button>
                    </div>
                </div>

                <button
                    class=css::scrollHint
                    aria-label="Scroll to resources"
                    on:click=move |_| {
                        dom::scroll_to_id(RESOURCES_ANCHOR);
                    }
                >
                    <Icon icon=ic::CHEVRON_DOWN />
                </button>
            </div>

            <div class=css::fade></div>
        </section>
    }
}
