//! UI components built with Leptos.
//!
//! - [`router`] - History-mode routing and page loading (main entry point)
//! - [`header`] - Top bar with home link and current tool title
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`tools`] - Home page and one page per tool

pub mod header;
pub mod icons;
pub mod router;
pub mod tools;

pub use router::AppRouter;
