//! Nearest-point search over the route dataset.

use crate::domain::{Point, Route, RouteSet};
use crate::geo::haversine_km;

/// Error from planner operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlannerError {
    /// The dataset has no routes to search
    #[error("no routes to search: dataset is empty")]
    EmptyDataset,
}

/// The route and coordinate closest to a query point.
#[derive(Debug, Clone)]
pub struct NearestMatch<'a> {
    /// Route owning the closest coordinate.
    pub route: &'a Route,

    /// The closest coordinate itself.
    pub coordinate: Point,

    /// Distance from the query point to that coordinate, in km.
    pub distance_km: f64,
}

/// Find the route and coordinate minimising distance to `point`.
///
/// Ties are not re-ranked: the comparison is strict, so the first minimal
/// coordinate in (route order, then coordinate order within the route)
/// wins.
pub fn locate_nearest<'a>(
    point: Point,
    routes: &'a RouteSet,
) -> Result<NearestMatch<'a>, PlannerError> {
    let mut best: Option<NearestMatch<'a>> = None;

    for route in routes.iter() {
        let (coordinate, distance_km) = nearest_on_route(point, route);
        if best.as_ref().is_none_or(|b| distance_km < b.distance_km) {
            best = Some(NearestMatch {
                route,
                coordinate,
                distance_km,
            });
        }
    }

    best.ok_or(PlannerError::EmptyDataset)
}

/// Closest coordinate of a single route to `point`, with its distance
/// in km.
///
/// Same first-minimum-wins tie-break as [`locate_nearest`], restricted to
/// one route.
pub fn nearest_on_route(point: Point, route: &Route) -> (Point, f64) {
    // Routes hold at least one coordinate by construction.
    let mut best_point = route.coordinates()[0];
    let mut best_distance = haversine_km(point, best_point);

    for &coordinate in &route.coordinates()[1..] {
        let distance = haversine_km(point, coordinate);
        if distance < best_distance {
            best_point = coordinate;
            best_distance = distance;
        }
    }

    (best_point, best_distance)
}
