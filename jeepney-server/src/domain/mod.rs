//! Domain types for the route query service.
//!
//! This module contains the core domain model types that represent
//! validated geographic route data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod point;
mod route;

pub use error::DomainError;
pub use point::{InvalidPoint, Point};
pub use route::{Route, RouteSet};
