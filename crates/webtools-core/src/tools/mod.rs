//! Computation behind the tool pages.
//!
//! Device testers keep their state models here; the browser plumbing lives
//! in the application crate.

pub mod audio;
pub mod color;
pub mod date;
pub mod gamepad;
pub mod interest;
pub mod json;
pub mod keyboard;
pub mod regex;
pub mod text;
pub mod timezone;
pub mod units;
