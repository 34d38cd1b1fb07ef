//! Adaptive-radius relevance filtering.

use tracing::debug;

use crate::domain::{Point, Route};

use super::config::PlannerConfig;
use super::nearest::nearest_on_route;

/// A candidate route together with its closest approach to the
/// destination.
#[derive(Debug, Clone)]
pub struct RouteRelevance<'a> {
    /// The candidate route.
    pub route: &'a Route,

    /// Coordinate of the route closest to the destination.
    pub closest: Point,

    /// Distance from that coordinate to the destination, in km.
    pub distance_km: f64,
}

/// Routes whose closest approach to `destination` lies within an
/// adaptively widening radius.
///
/// The radius starts at `initial_radius_km` and grows by
/// `radius_increment_km` until at least one candidate is within it; the
/// matching set is then sorted ascending by distance and returned
/// immediately. The last probe uses exactly `radius_ceiling_km`, so the
/// result is empty precisely when every candidate's closest approach
/// exceeds the ceiling.
pub fn filter_relevant<'a>(
    destination: Point,
    candidates: &[&'a Route],
    config: &PlannerConfig,
) -> Vec<RouteRelevance<'a>> {
    // Closest approaches do not change as the radius widens; compute them
    // once.
    let approaches: Vec<RouteRelevance<'a>> = candidates
        .iter()
        .map(|&route| {
            let (closest, distance_km) = nearest_on_route(destination, route);
            RouteRelevance {
                route,
                closest,
                distance_km,
            }
        })
        .collect();

    let mut radius_km = config.initial_radius_km;
    loop {
        let mut matched: Vec<RouteRelevance<'a>> = approaches
            .iter()
            .filter(|r| r.distance_km <= radius_km)
            .cloned()
            .collect();

        if !matched.is_empty() {
            matched.sort_by(|x, y| x.distance_km.total_cmp(&y.distance_km));
            return matched;
        }

        if radius_km >= config.radius_ceiling_km {
            debug!(
                ceiling_km = config.radius_ceiling_km,
                candidates = candidates.len(),
                "no route within relevance ceiling"
            );
            return Vec::new();
        }

        // A non-positive increment would never terminate; jump straight
        // to the ceiling instead.
        radius_km = if config.radius_increment_km > 0.0 {
            (radius_km + config.radius_increment_km).min(config.radius_ceiling_km)
        } else {
            config.radius_ceiling_km
        };
        debug!(radius_km, "widening relevance radius");
    }
}
