//! Utility modules for browser access and URL handling.
//!
//! Provides:
//! - [`dom`] - Window, history, clipboard and locale access
//! - [`url`] - Base URL handling for history-mode routing

pub mod dom;
pub mod url;
