//! Cheap pre-filters for trip candidate routes.
//!
//! Both strategies are pure filters over the dataset given the trip
//! endpoints, used to narrow the route set before distance-heavy work.

use serde::Deserialize;

use crate::domain::{Point, Route, RouteSet};

/// Strategy for narrowing the dataset to trip candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateMode {
    /// Axis-aligned rectangle spanning the two endpoints, inclusive.
    #[default]
    BoundingBox,

    /// Longitude band spanning the endpoints plus a latitude-only
    /// travel-direction test. Looser than the bounding box, fewer false
    /// negatives.
    Directional,
}

/// Routes plausibly relevant to a trip between `a` and `b`.
///
/// A route qualifies as soon as one of its coordinates passes the test,
/// so each route appears at most once. Order is dataset order.
pub fn filter_candidates<'a>(
    mode: CandidateMode,
    a: Point,
    b: Point,
    routes: &'a RouteSet,
) -> Vec<&'a Route> {
    match mode {
        CandidateMode::BoundingBox => by_bounding_box(a, b, routes),
        CandidateMode::Directional => by_direction(a, b, routes),
    }
}

fn by_bounding_box<'a>(a: Point, b: Point, routes: &'a RouteSet) -> Vec<&'a Route> {
    let (lat_min, lat_max) = min_max(a.latitude(), b.latitude());
    let (lon_min, lon_max) = min_max(a.longitude(), b.longitude());

    routes
        .iter()
        .filter(|route| {
            route.coordinates().iter().any(|c| {
                (lat_min..=lat_max).contains(&c.latitude())
                    && (lon_min..=lon_max).contains(&c.longitude())
            })
        })
        .collect()
}

fn by_direction<'a>(a: Point, b: Point, routes: &'a RouteSet) -> Vec<&'a Route> {
    // Travel direction comes from latitude alone; equal latitudes count
    // as northbound.
    let northbound = b.latitude() >= a.latitude();
    let (lon_min, lon_max) = min_max(a.longitude(), b.longitude());

    routes
        .iter()
        .filter(|route| {
            route.coordinates().iter().any(|c| {
                let in_band = (lon_min..=lon_max).contains(&c.longitude());
                let onward = if northbound {
                    c.latitude() >= a.latitude()
                } else {
                    c.latitude() <= a.latitude()
                };
                in_band && onward
            })
        })
        .collect()
}

fn min_max(x: f64, y: f64) -> (f64, f64) {
    if x <= y { (x, y) } else { (y, x) }
}
