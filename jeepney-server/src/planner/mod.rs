//! Route-graph construction and trip search.
//!
//! This module implements the core query algorithms: nearest-point
//! location, the proximity graph over routes, breadth-first trip search,
//! and the candidate/relevance filters. Everything here is a synchronous
//! pure function over an immutable dataset snapshot.

mod candidates;
mod config;
mod graph;
mod nearest;
mod path;
mod relevance;

pub use candidates::{CandidateMode, filter_candidates};
pub use config::PlannerConfig;
pub use graph::RouteGraph;
pub use nearest::{NearestMatch, PlannerError, locate_nearest, nearest_on_route};
pub use path::find_path;
pub use relevance::{RouteRelevance, filter_relevant};
