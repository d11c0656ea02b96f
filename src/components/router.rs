//! Application router component.
//!
//! Handles URL-based routing with the History API. Paths are matched exactly
//! against the route table in [`crate::routes`].
//!
//! # Architecture
//!
//! - **URL path is the source of truth**: the current route is derived from
//!   `location.pathname` with the configured base stripped
//! - **Layout never re-renders on navigation**: the header stays mounted and
//!   only the page area swaps
//! - **Pages load on first activation**: the route table caches each page
//!   after its first successful load
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_event_listener, use_window};
use webtools_core::RouteError;

use crate::components::header::Header;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::routes;
use crate::utils::dom;
use crate::utils::url::{strip_base, with_base};

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Navigation Context
// ============================================================================

/// Handle for changing the active route.
///
/// Provided as context by [`AppRouter`]; obtain it with [`use_navigator`].
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
}

impl Navigator {
    fn from_location() -> Self {
        Self {
            path: RwSignal::new(strip_base(&dom::pathname())),
        }
    }

    /// Current route path, without the base prefix.
    pub fn path(&self) -> Signal<String> {
        self.path.into()
    }

    /// Navigate to the route registered under `name`.
    pub fn navigate(&self, name: &str) {
        match routes::table().url_for(name) {
            Ok(path) => self.go(path),
            Err(err) => tracing::error!(%err, "navigation failed"),
        }
    }

    /// Push a history entry for `path` and activate it.
    pub fn go(&self, path: &str) {
        if self.path.with_untracked(|current| current == path) {
            return;
        }
        tracing::info!(path, "navigate");
        dom::push_url(&with_base(path));
        self.path.set(path.to_string());
    }

    fn sync_from_location(&self) {
        let path = strip_base(&dom::pathname());
        tracing::debug!(%path, "history popstate");
        self.path.set(path);
    }
}

/// The [`Navigator`] provided by the enclosing [`AppRouter`].
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Resolves the current path, loads its page through the route table and
/// renders it below the header. Unknown paths render [`NotFound`]; load
/// failures surface through the local error boundary.
#[component]
pub fn AppRouter() -> impl IntoView {
    let nav = Navigator::from_location();
    provide_context(nav);

    // Back/forward buttons
    let _ = use_event_listener(use_window(), ev::popstate, move |_| {
        nav.sync_from_location();
    });

    // Keep document.title in step with the active tool
    Effect::new(move |_| {
        let title = match routes::title_for_path(&nav.path.get()) {
            Some(tool) => format!("{tool} · {APP_NAME}"),
            None => APP_NAME.to_string(),
        };
        dom::set_title(&title);
    });

    // Each result is tagged with the path it was requested for so a load that
    // finishes after the user has moved on is never shown.
    let page = LocalResource::new(move || {
        let path = nav.path.get();
        async move {
            let result = routes::table().load(&path).await;
            if let Err(RouteError::NotMatched { .. }) = &result {
                tracing::warn!(%path, "no route matches path");
            }
            (path, result)
        }
    });

    let content = move || -> Result<AnyView, RouteError> {
        let current = nav.path.get();
        match page.get() {
            Some((path, Ok(render))) if path == current => Ok(render()),
            Some((path, Err(RouteError::NotMatched { .. }))) if path == current => {
                Ok(view! { <NotFound path=path /> }.into_any())
            }
            Some((path, Err(err))) if path == current => Err(err),
            _ => Ok(view! { <Loading /> }.into_any()),
        }
    };

    view! {
        <div class=css::layout>
            <Header />
            <main class=css::main>
                <ErrorBoundary fallback=|errors| view! { <LoadFailed errors=errors /> }>
                    {content}
                </ErrorBoundary>
            </main>
        </div>
    }
}

// ============================================================================
// Links
// ============================================================================

/// Anchor that navigates to a named route without reloading.
///
/// Modified clicks (new tab, new window) fall through to the browser.
#[component]
pub fn RouteLink(
    /// Route name to link to.
    to: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let href = match routes::table().url_for(to) {
        Ok(path) => with_base(path),
        Err(err) => {
            tracing::error!(%err, "link to unknown route");
            with_base("/")
        }
    };

    let on_click = move |e: ev::MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        nav.navigate(to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

// ============================================================================
// Placeholder Views
// ============================================================================

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <span class=css::spinner></span>
            "Loading..."
        </div>
    }
}

/// Shown for paths that match no route.
#[component]
fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class=css::notice>
            <h1 class=css::noticeTitle>"Page not found"</h1>
            <p class=css::noticeText>
                "Nothing lives at "<code>{path}</code>"."
            </p>
            <RouteLink to="home" class=css::noticeLink>
                <Icon icon=ic::HOME />
                <span>"Back to all tools"</span>
            </RouteLink>
        </section>
    }
}

/// Shown when a page failed to load.
#[component]
fn LoadFailed(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <section class=css::notice>
            <h1 class=css::noticeTitleError>"This tool failed to load"</h1>
            <ul class=css::errorList>
                {move || errors.get()
                    .into_iter()
                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                    .collect::<Vec<_>>()
                }
            </ul>
            <RouteLink to="home" class=css::noticeLink>
                <Icon icon=ic::HOME />
                <span>"Back to all tools"</span>
            </RouteLink>
        </section>
    }
}
