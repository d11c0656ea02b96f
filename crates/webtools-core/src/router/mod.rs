//! Route table for path-based navigation.
//!
//! - [`Route`] - A path, a symbolic name and a deferred page loader
//! - [`RouteTable`] - The immutable, validated set of routes
//!
//! Matching is exact: no parameters, no wildcards. Page implementations are
//! opaque to this module; the table only hands back whatever the loader
//! produced.

mod route;
mod table;

pub use route::{Loader, Route};
pub use table::RouteTable;
