//! Searchable, filterable resource directory.
//!
//! The visible list is a [`Memo`] over the current [`DirectoryFilter`], so it
//! is recomputed on every keystroke or category change and nowhere else.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::classes;
use super::hooks::use_reveal;
use crate::components::icons as ic;
use crate::config::{DIRECTORY_VISIBLE_SERVICES, RESOURCES_ANCHOR, reveal, stagger};
use crate::core::DirectoryFilter;
use crate::data::RESOURCES;
use crate::models::{CategoryFilter, Resource};
use crate::utils::{overflow_label, pluralize};

stylance::import_crate_style!(css, "src/components/directory.module.css");

#[component]
pub fn ResourceDirectory() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, reveal::DIRECTORY);

    let filter = RwSignal::new(DirectoryFilter::default());
    let results = Memo::new(move |_| filter.with(|f| f.apply(RESOURCES)));
    let count = Memo::new(move |_| results.with(|r| r.count()));

    Effect::new(move || {
        let total = count.get();
        filter.with_untracked(|f| {
            log::debug!(
                "directory filter query={:?} category={} -> {} {}",
                f.query,
                f.category,
                total,
                pluralize(total, "match", "matches")
            );
        });
    });

    let pills = CategoryFilter::OPTIONS
        .into_iter()
        .map(|option| {
            let active = move || filter.with(|f| f.category == option);
            view! {
                <button
                    class=move || classes(css::pill, css::pillActive, active())
                    aria-pressed=move || active().to_string()
                    on:click=move |_| filter.update(|f| f.category = option)
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section id=RESOURCES_ANCHOR class=css::section>
            <div class=css::glowA></div>
            <div class=css::glowB></div>

            <div class=css::container>
                <div class=move || classes(css::header, css::shown, visible.get())>
                    <span class=css::badge>"Resource Directory"</span>
                    <h2 class=css::heading>
                        <span class=css::headingPlain>"Find Your "</span>
                        <span class=css::headingAccent>"Community Resources"</span>
                    </h2>
                    <p class=css::subtitle>
                        "Search our comprehensive directory of local services and support"
                    </p>
                </div>

                <div class=move || classes(css::controls, css::shown, visible.get())>
                    <label class=css::search>
                        <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            type="text"
                            class=css::searchInput
                            placeholder="Search by name, service, or keyword..."
                            aria-label="Search resources"
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filter.update(|f| f.query = query);
                            }
                        />
                    </label>

                    <div class=css::pills role="group" aria-label="Filter by category">
                        {pills}
                    </div>
                </div>

                <p class=move || classes(css::count, css::countShown, visible.get())>
                    "Showing "
                    <span class=css::countValue>{move || count.get()}</span>
                    " "
                    {move || pluralize(count.get(), "resource", "resources")}
                </p>

                <div class=css::grid>
                    <For
                        each=move || results.with(|r| r.iter().enumerate().collect::<Vec<_>>())
                        // Keyed by slot too, so a card that moves takes its new slot's delay.
                        key=|(index, resource)| (*index, resource.id)
                        children=move |(index, resource): (usize, &'static Resource)| {
                            view! { <ResourceCard resource=resource index=index visible=visible /> }
                        }
                    />
                </div>

                <Show when=move || results.with(|r| r.is_empty())>
                    <p class=css::empty>
                        "No resources found. Try adjusting your search or filters."
                    </p>
                </Show>
            </div>
        </section>
    }
}

/// Entrance delay of the card in grid slot `index`.
fn card_delay_ms(index: usize) -> u32 {
    stagger::DIRECTORY_CARD_BASE_MS + index as u32 * stagger::DIRECTORY_CARD_MS
}

/// Directory card: contact details plus the first few service tags.
#[component]
fn ResourceCard(resource: &'static Resource, index: usize, visible: Signal<bool>) -> impl IntoView {
    let delay = format!("{}ms", card_delay_ms(index));

    let tags = resource
        .services
        .iter()
        .take(DIRECTORY_VISIBLE_SERVICES)
        .map(|service| view! { <span class=css::tag>{*service}</span> })
        .collect_view();
    let overflow = overflow_label(resource.services.len(), DIRECTORY_VISIBLE_SERVICES)
        .map(|label| view! { <span class=css::tag>{label}</span> });

    view! {
        <article
            class=move || classes(css::card, css::shown, visible.get())
            style:transition-delay=delay
        >
            <div class=css::cardHeader>
                <span class=css::category>{resource.category.label()}</span>
                <a
                    class=css::external
                    href=resource.website
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("Visit {} website", resource.name)
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            </div>

            <h3 class=css::name>{resource.name}</h3>
            <p class=css::description>{resource.description}</p>

            <ul class=css::details>
                <li class=css::detail>
                    <span class=css::detailIcon><Icon icon=ic::MAP_PIN /></span>
                    <span class=css::address>{resource.address}</span>
                </li>
                <li class=css::detail>
                    <span class=css::detailIcon><Icon icon=ic::PHONE /></span>
                    <span>{resource.phone}</span>
                </li>
                <li class=css::detail>
                    <span class=css::detailIcon><Icon icon=ic::CLOCK /></span>
                    <span>{resource.hours}</span>
                </li>
            </ul>

            <div class=css::tags>{tags}{overflow}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_card_delay_follows_slot() {
        assert_eq!(card_delay_ms(0), 300);
        assert_eq!(card_delay_ms(4), 500);
    }

    #[test]
    fn test_surviving_card_gets_new_slot_key() {
        fn key<'a>(
            resources: impl Iterator<Item = &'a Resource>,
            id: &str,
        ) -> Option<(usize, &'a str)> {
            resources
                .enumerate()
                .find(|(_, r)| r.id == id)
                .map(|(index, r)| (index, r.id))
        }
        let all = DirectoryFilter::default().apply(RESOURCES);
        let health = DirectoryFilter {
            category: CategoryFilter::Only(Category::HealthServices),
            ..Default::default()
        }
        .apply(RESOURCES);

        let id = health.iter().last().map(|r| r.id).unwrap();
        let before = key(all.iter(), id).unwrap();
        let after = key(health.iter(), id).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.0, health.count() - 1);
    }
}
