//! Root application module.
//!
//! Mounts the router under a last-resort error boundary. Page load failures
//! are handled closer to the page by the router itself.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <Crashed errors=errors /> }>
            <AppRouter />
        </ErrorBoundary>
    }
}

/// Full-screen fallback for errors that escape the router.
#[component]
fn Crashed(errors: ArcRwSignal<Errors>) -> impl IntoView {
    tracing::error!("unhandled error reached the app boundary");

    let reload = move |_| {
        if let Some(window) = crate::utils::dom::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::crash role="alert">
            <div class=css::panel>
                <h1 class=css::title>{format!("{APP_NAME} stopped working")}</h1>
                <p class=css::hint>"Reloading usually clears this up. Your inputs are not saved."</p>
                <ul class=css::errors>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect::<Vec<_>>()
                    }
                </ul>
                <button class=css::reload on:click=reload>"Reload"</button>
            </div>
        </div>
    }
}
