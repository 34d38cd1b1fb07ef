//! Multi-hop trip search.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::domain::{Point, Route, RouteSet};

use super::config::PlannerConfig;
use super::graph::RouteGraph;
use super::nearest::{PlannerError, locate_nearest};

/// Find an ordered sequence of routes connecting `origin` to
/// `destination`.
///
/// Both endpoints resolve to their nearest routes; if those are the same
/// route, the trip is that single route. Otherwise a breadth-first search
/// over the proximity graph finds a connection with the minimum number of
/// hops (route changes), not minimum geographic distance. A route name is
/// marked visited when dequeued, and the first path to reach the
/// destination's route wins.
///
/// An empty result means no connecting sequence is known; that is a
/// normal outcome, not an error.
pub fn find_path<'a>(
    origin: Point,
    destination: Point,
    routes: &'a RouteSet,
    config: &PlannerConfig,
) -> Result<Vec<&'a Route>, PlannerError> {
    let start = locate_nearest(origin, routes)?;
    let end = locate_nearest(destination, routes)?;

    if start.route.name() == end.route.name() {
        return Ok(vec![start.route]);
    }

    let graph = RouteGraph::build(routes, config.proximity_threshold_km);

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&'a Route, Vec<&'a Route>)> = VecDeque::new();
    queue.push_back((start.route, vec![start.route]));

    while let Some((current, path)) = queue.pop_front() {
        if current.name() == end.route.name() {
            debug!(hops = path.len(), "trip found");
            return Ok(path);
        }

        if !visited.insert(current.name()) {
            continue;
        }

        for neighbor in graph.neighbors(current.name()) {
            if visited.contains(neighbor) {
                continue;
            }
            // Neighbor names originate from this dataset; for duplicate
            // names the first match is the node the graph was built from.
            let Some(next) = routes.get(neighbor) else {
                continue;
            };
            let mut next_path = path.clone();
            next_path.push(next);
            queue.push_back((next, next_path));
        }
    }

    debug!(
        start = start.route.name(),
        end = end.route.name(),
        "no connecting trip"
    );
    Ok(Vec::new())
}
