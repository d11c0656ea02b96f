//! Route declarations.
//!
//! The route table is built once, on first navigation, from the static list
//! below and never changes afterwards. Each loader defers constructing its
//! page until the route is first activated.

use std::sync::LazyLock;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use icondata::Icon;
use leptos::prelude::*;
use webtools_core::{LoadError, Route, RouteTable};

use crate::components::icons as ic;
use crate::components::tools::{
    ColorConverter, DateCalculator, GamepadTester, Home, InterestCalculator, JsonFormatter,
    KeyboardTester, MicrophoneTester, RegexTester, TextTools, TimezoneConverter, UnitConverter,
};

/// A loaded page implementation: renders the page's root view.
pub type PageView = fn() -> AnyView;

/// Builds a deferred loader for a page component.
macro_rules! page {
    ($component:ident) => {{
        fn render() -> AnyView {
            view! { <$component /> }.into_any()
        }
        fn load() -> LocalBoxFuture<'static, Result<PageView, LoadError>> {
            async { Ok(render as PageView) }.boxed_local()
        }
        load
    }};
}

static ROUTES: LazyLock<RouteTable<PageView>> = LazyLock::new(|| {
    RouteTable::new([
        Route::new("/", "home", page!(Home)),
        Route::new("/gamepad", "gamepad", page!(GamepadTester)),
        Route::new("/keyboard", "keyboard", page!(KeyboardTester)),
        Route::new("/microphone", "microphone", page!(MicrophoneTester)),
        Route::new("/interest-calculator", "interest", page!(InterestCalculator)),
        Route::new("/unit-converter", "converter", page!(UnitConverter)),
        Route::new("/color-converter", "color", page!(ColorConverter)),
        Route::new("/text-tools", "text", page!(TextTools)),
        Route::new("/json-formatter", "json", page!(JsonFormatter)),
        Route::new("/timezone-converter", "timezone", page!(TimezoneConverter)),
        Route::new("/date-calculator", "date", page!(DateCalculator)),
        Route::new("/regex-tester", "regex", page!(RegexTester)),
    ])
    .expect("route paths and names must be unique")
});

/// The application's route table.
pub fn table() -> &'static RouteTable<PageView> {
    &ROUTES
}

// =============================================================================
// Tool Cards
// =============================================================================

/// Presentation metadata for a tool route, shown on the home page.
#[derive(Debug, Clone, Copy)]
pub struct ToolCard {
    /// Route name, resolved with `url_for` when linking.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const TOOLS: &[ToolCard] = &[
    ToolCard {
        name: "gamepad",
        title: "Gamepad Tester",
        description: "Check buttons, triggers and stick drift of connected controllers.",
        icon: ic::GAMEPAD,
    },
    ToolCard {
        name: "keyboard",
        title: "Keyboard Tester",
        description: "See which keys register, including modifiers and repeats.",
        icon: ic::KEYBOARD,
    },
    ToolCard {
        name: "microphone",
        title: "Microphone Tester",
        description: "Grant microphone access and watch the input level live.",
        icon: ic::MICROPHONE,
    },
    ToolCard {
        name: "interest",
        title: "Interest Calculator",
        description: "Simple and compound interest with monthly contributions.",
        icon: ic::INTEREST,
    },
    ToolCard {
        name: "converter",
        title: "Unit Converter",
        description: "Length, mass, temperature, volume, area, speed, time and data.",
        icon: ic::CONVERTER,
    },
    ToolCard {
        name: "color",
        title: "Color Converter",
        description: "Convert between HEX, RGB, HSL, HSV and CMYK and check contrast.",
        icon: ic::PALETTE,
    },
    ToolCard {
        name: "text",
        title: "Text Tools",
        description: "Count words and characters, change case, clean up lines.",
        icon: ic::TEXT,
    },
    ToolCard {
        name: "json",
        title: "JSON Formatter",
        description: "Validate, pretty-print, minify and sort JSON documents.",
        icon: ic::JSON,
    },
    ToolCard {
        name: "timezone",
        title: "Timezone Converter",
        description: "Translate a moment between timezones, daylight saving included.",
        icon: ic::GLOBE,
    },
    ToolCard {
        name: "date",
        title: "Date Calculator",
        description: "Days between dates, business days and calendar arithmetic.",
        icon: ic::CALENDAR,
    },
    ToolCard {
        name: "regex",
        title: "Regex Tester",
        description: "Try patterns against text with groups, flags and replacement.",
        icon: ic::REGEX,
    },
];

/// Card for the tool route named `name`.
pub fn card(name: &str) -> Option<&'static ToolCard> {
    TOOLS.iter().find(|c| c.name == name)
}

/// Title for the page at `path`, if it is a tool.
pub fn title_for_path(path: &str) -> Option<&'static str> {
    let route = table().resolve(path).ok()?;
    card(route.name()).map(|c| c.title)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use futures::executor::block_on;
    use webtools_core::RouteError;

    use super::*;

    #[test]
    fn test_table_has_every_route() {
        assert_eq!(table().len(), 12);
        let paths: HashSet<_> = table().iter().map(Route::path).collect();
        assert_eq!(paths.len(), 12);
    }

    #[test]
    fn test_every_card_names_a_route() {
        for card in TOOLS {
            assert!(table().url_for(card.name).is_ok(), "{}", card.name);
        }
    }

    #[test]
    fn test_every_tool_route_has_a_card() {
        for route in table().iter().filter(|r| r.name() != "home") {
            assert!(card(route.name()).is_some(), "{}", route.name());
        }
    }

    #[test]
    fn test_resolve_examples() {
        assert_eq!(table().resolve("/").unwrap().name(), "home");
        assert_eq!(table().resolve("/regex-tester").unwrap().name(), "regex");
        assert!(matches!(
            table().resolve("/does-not-exist"),
            Err(RouteError::NotMatched { .. })
        ));
        assert!(matches!(
            table().url_for("nonexistent-name"),
            Err(RouteError::NameNotFound { .. })
        ));
    }

    #[test]
    fn test_json_formatter_loads_once() {
        block_on(async {
            assert!(table().load("/json-formatter").await.is_ok());
            assert!(table().load("/json-formatter").await.is_ok());
        });
        let route = table().resolve("/json-formatter").unwrap();
        assert_eq!(route.name(), "json");
        assert_eq!(route.load_count(), 1);
    }

    #[test]
    fn test_title_for_path() {
        assert_eq!(title_for_path("/text-tools"), Some("Text Tools"));
        assert_eq!(title_for_path("/"), None);
        assert_eq!(title_for_path("/nope"), None);
    }
}
