//! Web layer for the route query service.
//!
//! Provides HTTP endpoints over the planner and the dataset store.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
