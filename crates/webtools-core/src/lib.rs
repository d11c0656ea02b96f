//! Core logic for the webtools application.
//!
//! Everything here is target independent and unit tested natively:
//! - [`router`] - The route table mapping URL paths to deferred page loaders
//! - [`tools`] - The computation behind each tool page
//! - [`error`] - Error types for routing and every tool
//! - [`format`] - Number formatting shared by the tool pages

pub mod error;
pub mod format;
pub mod router;
pub mod tools;

pub use error::{LoadError, RouteError};
pub use router::{Loader, Route, RouteTable};
