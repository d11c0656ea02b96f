//! Header bar component.
//!
//! Displays the application name as a home link and the title of the active
//! tool, if any.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::{RouteLink, use_navigator};
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::routes;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar shown above every page.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `webtools · tagline` and `Location: Tool Title` |
/// | Mobile (< 768px) | `webtools` and the tool title only |
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigator();
    let tool_title = Signal::derive(move || nav.path().with(|p| routes::title_for_path(p)));

    view! {
        <header class=css::bar>
            <RouteLink to="home" class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::HOME /></span>
                <span class=css::brandName>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </RouteLink>

            <Show when=move || tool_title.get().is_some()>
                <span class=css::location>
                    <span class=css::locationLabel>"Location:"</span>
                    <span class=css::locationIcon><Icon icon=ic::LOCATION /></span>
                    <span class=css::value>{move || tool_title.get().unwrap_or_default()}</span>
                </span>
            </Show>
        </header>
    }
}
