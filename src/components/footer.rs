//! Site footer with section links and the copyright line.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, CITY, CITY_URL, RESOURCES_ANCHOR, SUBMIT_ANCHOR};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let (lead, accent) = APP_NAME.split_once(' ').unwrap_or((APP_NAME, ""));

    view! {
        <footer class=css::footer>
            <span class=css::sparkle style="top: 0; left: 25%;"></span>
            <span class=css::sparkle style="top: 50%; right: 25%; animation-delay: 1s;"></span>
            <span class=css::sparkle style="bottom: 25%; left: 50%; animation-delay: 2s;"></span>

            <div class=css::inner>
                <div class=css::brand>
                    <span class=css::star><Icon icon=ic::STAR /></span>
                    <h3 class=css::title>
                        <span class=css::titlePlain>{lead}" "</span>
                        <span class=css::titleAccent>{accent}</span>
                    </h3>
                    <span class=css::star><Icon icon=ic::STAR /></span>
                </div>

                <p class=css::tagline>
                    "Connecting our community through accessible resources, services, and \
                     programs that strengthen "
                    {CITY}
                    "."
                </p>

                <nav class=css::links>
                    <a class=css::link href=format!("#{}", RESOURCES_ANCHOR)>"Browse Resources"</a>
                    <span class=css::dot>"•"</span>
                    <a class=css::link href=format!("#{}", SUBMIT_ANCHOR)>"Submit Resource"</a>
                    <span class=css::dot>"•"</span>
                    <a class=css::link href=CITY_URL target="_blank" rel="noopener noreferrer">
                        "City of Coppell"
                    </a>
                    <span class=css::dot>"•"</span>
                    <a class=css::link href="#">"Contact Us"</a>
                </nav>

                <div class=css::divider></div>

                <p class=css::made>
                    <span>"Made with"</span>
                    <span class=css::heart><Icon icon=ic::HEART /></span>
                    <span>"for "{CITY}</span>
                </p>

                <p class=css::copyright>
                    "© "{dom::current_year()}" Coppell Community Resource Hub. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
