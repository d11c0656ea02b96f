//! Error types for the application.
//!
//! One enum per domain:
//!
//! - [`RouteError`] / [`LoadError`] - Route lookup and deferred page loading
//! - [`InterestError`] - Interest calculator input validation
//! - [`UnitError`] - Unit conversion
//! - [`ColorError`] - Color parsing
//! - [`JsonError`] - JSON parsing and formatting
//! - [`TimezoneError`] - Timezone lookup and local time resolution
//! - [`DateError`] - Date parsing and arithmetic
//! - [`RegexError`] - Pattern compilation and flag parsing

use thiserror::Error;

// =============================================================================
// Routing
// =============================================================================

/// Failure of a route's deferred loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The page implementation could not be produced.
    #[error("page unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Route table errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route is declared for the requested path.
    #[error("no route matches '{path}'")]
    NotMatched { path: String },
    /// No route carries the requested symbolic name.
    #[error("route not found: '{name}'")]
    NameNotFound { name: String },
    /// Two routes declare the same path.
    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },
    /// Two routes declare the same name.
    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },
    /// The route matched but its page failed to load.
    #[error("failed to load page '{name}'")]
    Load {
        name: String,
        #[source]
        source: LoadError,
    },
}

// =============================================================================
// Tools
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterestError {
    #[error("principal must not be negative")]
    NegativePrincipal,
    #[error("interest rate must not be negative")]
    NegativeRate,
    #[error("monthly contribution must not be negative")]
    NegativeContribution,
    #[error("term must be at least one year")]
    ZeroTerm,
    #[error("term must not exceed {max} years")]
    TermTooLong { max: u32 },
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("cannot convert {from} to {to}")]
    CategoryMismatch { from: String, to: String },
    #[error("temperature is below absolute zero")]
    BelowAbsoluteZero,
    #[error("value is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color is empty")]
    Empty,
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("invalid color component '{0}'")]
    InvalidComponent(String),
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: &'static str, found: usize },
    #[error("unrecognized color format")]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    #[error("input is empty")]
    Empty,
    #[error("line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("failed to serialize: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    #[error("unknown timezone '{0}'")]
    UnknownZone(String),
    #[error("invalid date and time '{0}'")]
    InvalidDateTime(String),
    #[error("{time} does not exist in {zone} (skipped by a clock change)")]
    NonexistentLocalTime { time: String, zone: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("resulting date is out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("unknown flag '{0}'")]
    UnknownFlag(char),
    #[error("{0}")]
    Compile(String),
}
