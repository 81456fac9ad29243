//! Featured-partner showcase.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::classes;
use super::hooks::use_reveal;
use crate::components::icons as ic;
use crate::config::{reveal, stagger};
use crate::data;
use crate::models::Resource;

stylance::import_crate_style!(css, "src/components/featured.module.css");

#[component]
pub fn FeaturedResources() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, reveal::FEATURED);

    let cards = data::featured()
        .enumerate()
        .map(|(index, resource)| view! { <FeaturedCard resource=resource index=index visible=visible /> })
        .collect_view();

    view! {
        <section node_ref=section class=css::section>
            <div class=css::glowA></div>
            <div class=css::glowB></div>

            <div class=css::container>
                <div class=move || classes(css::header, css::shown, visible.get())>
                    <span class=css::badge>"Featured Partners"</span>
                    <h2 class=css::heading>
                        <span class=css::headingPlain>"Community "</span>
                        <span class=css::headingAccent>"Champions"</span>
                    </h2>
                    <p class=css::subtitle>
                        "Meet the organizations leading the way in community support and service"
                    </p>
                </div>

                <div class=css::list>{cards}</div>
            </div>
        </section>
    }
}

/// One featured resource; even cards slide in from the left, odd from the right.
#[component]
fn FeaturedCard(resource: &'static Resource, index: usize, visible: Signal<bool>) -> impl IntoView {
    let from = if index % 2 == 0 { css::fromLeft } else { css::fromRight };
    let class = move || {
        if visible.get() {
            format!("{} {}", css::card, css::shown)
        } else {
            format!("{} {}", css::card, from)
        }
    };
    let delay = format!("{}ms", index as u32 * stagger::FEATURED_CARD_MS);

    let services = resource
        .services
        .iter()
        .map(|service| view! { <span class=css::tag>{*service}</span> })
        .collect_view();

    view! {
        <article class=class style:transition-delay=delay>
            <div class=css::body>
                <div class=css::main>
                    <div class=css::meta>
                        <span class=css::category>{resource.category.label()}</span>
                        <span class=css::star role="img" aria-label="featured">
                            <Icon icon=ic::STAR />
                        </span>
                    </div>

                    <h3 class=css::name>{resource.name}</h3>
                    <p class=css::description>{resource.description}</p>

                    <div class=css::contact>
                        <div class=css::contactItem>
                            <span class=css::contactIcon><Icon icon=ic::MAP_PIN /></span>
                            <div>
                                <div class=css::contactLabel>"Location"</div>
                                <div class=css::contactValue>{resource.address}</div>
                            </div>
                        </div>
                        <div class=css::contactItem>
                            <span class=css::contactIcon><Icon icon=ic::PHONE /></span>
                            <div>
                                <div class=css::contactLabel>"Contact"</div>
                                <div class=css::contactValue>{resource.phone}</div>
                            </div>
                        </div>
                        <div class=css::contactWide>
                            <span class=css::contactIcon><Icon icon=ic::CLOCK /></span>
                            <div>
                                <div class=css::contactLabel>"Hours"</div>
                                <div class=css::contactValue>{resource.hours}</div>
                            </div>
                        </div>
                    </div>

                    <div class=css::tags>{services}</div>
                </div>

                <div class=css::actions>
                    <a
                        class=css::visit
                        href=resource.website
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Visit Website"
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                    <a class=css::more href=resource.website target="_blank" rel="noopener noreferrer">
                        "Learn More"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                </div>
            </div>
        </article>
    }
}
