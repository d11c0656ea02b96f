//! Home page: a card per tool.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::router::RouteLink;
use crate::config::APP_TAGLINE;
use crate::routes::TOOLS;

stylance::import_crate_style!(css, "src/components/tools/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class=css::home>
            <p class=css::intro>{APP_TAGLINE}</p>
            <ul class=css::grid>
                {TOOLS
                    .iter()
                    .map(|tool| view! {
                        <li>
                            <RouteLink to=tool.name class=css::card>
                                <span class=css::cardIcon><Icon icon=tool.icon /></span>
                                <span class=css::cardTitle>{tool.title}</span>
                                <span class=css::cardDescription>{tool.description}</span>
                            </RouteLink>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
