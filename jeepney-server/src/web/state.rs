//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::RouteStore;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the current route dataset snapshot
    pub routes: RouteStore,

    /// Planner distance parameters
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteStore, config: PlannerConfig) -> Self {
        Self {
            routes,
            config: Arc::new(config),
        }
    }
}
