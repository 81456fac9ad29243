//! Community impact section with count-up statistics.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::classes;
use super::hooks::{use_count_up, use_reveal};
use crate::components::icons as ic;
use crate::config::{STATS, counter, reveal, stagger};
use crate::core::{AnimationError, CounterGroup, CounterTiming};
use crate::utils::format_count;

stylance::import_crate_style!(css, "src/components/stats.module.css");

/// Counters for every configured statistic.
fn impact_counters() -> Result<CounterGroup, AnimationError> {
    let timing = CounterTiming::new(counter::DURATION_MS, counter::STEPS)?;
    CounterGroup::new(STATS.iter().map(|s| s.target), timing)
}

/// Impact statistics that count up once the section is on screen.
///
/// A malformed statistic is a setup error: the section renders the error
/// (caught by the root `ErrorBoundary`) instead of animating nonsense.
#[component]
pub fn CommunityStats() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, reveal::STATS);

    let counts = impact_counters()
        .inspect_err(|err| log::error!("impact counters refused to start: {}", err))
        .map(|group| use_count_up(visible, group));

    counts.map(move |counts| {
        let cards = STATS
            .iter()
            .enumerate()
            .map(move |(index, stat)| {
                let value = move || {
                    counts.with(|c| format_count(c.get(index).copied().unwrap_or_default()))
                };
                let delay = format!("{}ms", index as u32 * stagger::STAT_CARD_MS);
                view! {
                    <div
                        class=move || classes(css::card, css::shown, visible.get())
                        style:transition-delay=delay
                    >
                        <div class=css::icon>
                            <Icon icon=ic::stat_icon(stat.icon) />
                        </div>
                        <div class=css::value>{value}{stat.suffix}</div>
                        <div class=css::label>{stat.label}</div>
                        <div class=css::description>{stat.description}</div>
                        <div class=css::corner></div>
                    </div>
                }
            })
            .collect_view();

        view! {
            <section node_ref=section class=css::section>
                <div class=css::glowA></div>
                <div class=css::glowB></div>

                <div class=css::container>
                    <div class=move || classes(css::header, css::shown, visible.get())>
                        <h2 class=css::heading>
                            <span class=css::headingPlain>"Community "</span>
                            <span class=css::headingAccent>"Impact"</span>
                        </h2>
                        <p class=css::subtitle>
                            "Together, we're building a stronger Coppell through collaboration and community support"
                        </p>
                    </div>

                    <div class=css::grid>{cards}</div>
                </div>
            </section>
        }
    })
}
