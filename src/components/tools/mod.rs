//! Tool pages.
//!
//! One module per page, plus the shared building blocks below:
//! - [`ToolPage`] - Page frame with the tool's title and description
//! - [`CopyButton`] - Copies a value and briefly confirms
//! - [`parse_number`] / [`parse_whole`] - Form field parsing

mod color;
mod date;
mod gamepad;
mod home;
mod interest;
mod json;
mod keyboard;
mod microphone;
mod regex;
mod text;
mod timezone;
mod units;

pub use color::ColorConverter;
pub use date::DateCalculator;
pub use gamepad::GamepadTester;
pub use home::Home;
pub use interest::InterestCalculator;
pub use json::JsonFormatter;
pub use keyboard::KeyboardTester;
pub use microphone::MicrophoneTester;
pub use regex::RegexTester;
pub use text::TextTools;
pub use timezone::TimezoneConverter;
pub use units::UnitConverter;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::routes;
use crate::utils::dom::copy_to_clipboard;

stylance::import_crate_style!(css, "src/components/tools/tools.module.css");

// =============================================================================
// Form Fields
// =============================================================================

/// Invalid content in a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },

    #[error("{field}: '{input}' is not a whole number")]
    NotWhole { field: &'static str, input: String },
}

/// Parse a decimal field. Accepts `,` as a thousands separator.
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    trimmed
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::NotANumber {
            field,
            input: trimmed.to_string(),
        })
}

/// Parse a non-negative integer field.
pub fn parse_whole(field: &'static str, input: &str) -> Result<u32, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty { field });
    }
    trimmed.parse::<u32>().map_err(|_| FieldError::NotWhole {
        field,
        input: trimmed.to_string(),
    })
}

// =============================================================================
// Shared Components
// =============================================================================

/// Page frame for a tool: heading, description, then the tool itself.
#[component]
pub fn ToolPage(
    /// Route name of the tool, used to look up its card.
    name: &'static str,
    children: Children,
) -> impl IntoView {
    let card = routes::card(name);
    let title = card.map(|c| c.title).unwrap_or(name);
    let description = card.map(|c| c.description).unwrap_or_default();

    view! {
        <article class=css::page>
            <header class=css::pageHeader>
                {card.map(|c| view! { <span class=css::pageIcon><Icon icon=c.icon /></span> })}
                <div>
                    <h1 class=css::pageTitle>{title}</h1>
                    <p class=css::pageDescription>{description}</p>
                </div>
            </header>
            {children()}
        </article>
    }
}

/// Button that copies `value` to the clipboard.
#[component]
pub fn CopyButton(#[prop(into)] value: Signal<String>) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        let text = value.get_untracked();
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    copied.set(false);
                }
                Err(err) => tracing::warn!(%err, "clipboard write failed"),
            }
        });
    };

    view! {
        <button class=css::iconButton on:click=on_click title="Copy to clipboard">
            <Icon icon=ic::COPY />
            <span class=css::iconButtonLabel>
                {move || if copied.get() { "Copied" } else { "Copy" }}
            </span>
        </button>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active { css::chipActive } else { css::chip }
}

fn segment_class(active: bool) -> &'static str {
    if active { css::segmentActive } else { css::segment }
}

/// Inline error line under a form.
#[component]
pub fn ErrorLine(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <p class=css::error role="alert">{m}</p> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_separators() {
        assert_eq!(parse_number("amount", " 1,234.5 "), Ok(1234.5));
        assert_eq!(parse_number("amount", "-3"), Ok(-3.0));
        assert_eq!(parse_number("amount", "1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_number_errors() {
        assert_eq!(
            parse_number("amount", "  "),
            Err(FieldError::Empty { field: "amount" })
        );
        assert!(matches!(
            parse_number("amount", "abc"),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_number("amount", "inf"),
            Err(FieldError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("years", "10"), Ok(10));
        assert!(matches!(
            parse_whole("years", "2.5"),
            Err(FieldError::NotWhole { .. })
        ));
        assert_eq!(
            parse_whole("years", "-1").unwrap_err().to_string(),
            "years: '-1' is not a whole number"
        );
    }
}
