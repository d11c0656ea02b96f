//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeftRight as Converter, LuBraces as Json, LuCalendar as Calendar,
        LuClipboard as Copy, LuGamepad2 as Gamepad, LuGlobe as Globe, LuHouse as Home,
        LuKeyboard as Keyboard, LuMapPin as Location, LuMic as Microphone, LuPalette as Palette,
        LuPiggyBank as Interest, LuRegex as Regex, LuRotateCcw as Reset, LuType as Text,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsArrowLeftRight as Converter, BsBraces as Json,
        BsCalendar as Calendar, BsClipboard as Copy, BsController as Gamepad, BsGeoAltFill as Location,
        BsGlobe as Globe, BsHouseFill as Home, BsKeyboard as Keyboard, BsMic as Microphone,
        BsPalette as Palette, BsPiggyBank as Interest, BsRegex as Regex, BsType as Text,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(LOCATION, Location);
themed_icon!(COPY, Copy);
themed_icon!(RESET, Reset);
themed_icon!(GAMEPAD, Gamepad);
themed_icon!(KEYBOARD, Keyboard);
themed_icon!(MICROPHONE, Microphone);
themed_icon!(INTEREST, Interest);
themed_icon!(CONVERTER, Converter);
themed_icon!(PALETTE, Palette);
themed_icon!(TEXT, Text);
themed_icon!(JSON, Json);
themed_icon!(GLOBE, Globe);
themed_icon!(CALENDAR, Calendar);
themed_icon!(REGEX, Regex);
