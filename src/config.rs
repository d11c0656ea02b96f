//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and the document title.
pub const APP_NAME: &str = "webtools";

/// Tagline displayed on the home page.
pub const APP_TAGLINE: &str = "Small utilities that run entirely in your browser";

// =============================================================================
// Routing
// =============================================================================

/// Path prefix the application is served under. Must start and end with `/`.
pub const BASE_URL: &str = "/";

// =============================================================================
// Logging
// =============================================================================

/// `tracing` filter directive applied at startup.
pub const LOG_LEVEL: &str = "info,webtools_core=debug";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a copy button shows its confirmation, in milliseconds.
pub const COPY_FEEDBACK_MS: u32 = 1500;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Device Testers
// =============================================================================

pub mod gamepad {
    /// Interval between `navigator.getGamepads()` polls.
    pub const POLL_INTERVAL_MS: u64 = 50;
    /// Initial stick deadzone.
    pub const DEFAULT_DEADZONE: f64 = 0.1;
}

pub mod keyboard {
    /// Key events kept in the on-screen log.
    pub const HISTORY_LIMIT: usize = 30;
}

pub mod microphone {
    /// Analyser frame size; also the number of samples per meter update.
    pub const FFT_SIZE: u32 = 2048;
    /// Interval between meter updates.
    pub const METER_INTERVAL_MS: u64 = 50;
    /// How far the held peak falls per meter update.
    pub const PEAK_DECAY_DB: f64 = 1.5;
}

// =============================================================================
// Converters
// =============================================================================

/// Fraction digits shown for converted values.
pub const RESULT_DECIMALS: usize = 6;

/// Zones shown in the timezone converter before the user picks any.
pub const DEFAULT_TARGET_ZONES: &[&str] = &["UTC", "Europe/London", "America/New_York", "Asia/Tokyo"];
