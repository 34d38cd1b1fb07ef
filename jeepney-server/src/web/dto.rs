//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Route};
use crate::planner::{CandidateMode, NearestMatch, RouteRelevance};

/// A coordinate in requests and responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinateDto {
    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,
}

impl From<Point> for CoordinateDto {
    fn from(point: Point) -> Self {
        Self {
            lat: point.latitude(),
            lon: point.longitude(),
        }
    }
}

/// A route with its full coordinate sequence.
#[derive(Debug, Serialize)]
pub struct RouteDetail {
    /// Route name
    pub name: String,

    /// Coordinates in travel order
    pub coordinates: Vec<CoordinateDto>,
}

impl RouteDetail {
    /// Build from a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            name: route.name().to_string(),
            coordinates: route
                .coordinates()
                .iter()
                .copied()
                .map(CoordinateDto::from)
                .collect(),
        }
    }
}

/// Response listing every route in the dataset.
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    /// All routes, in dataset order
    pub routes: Vec<RouteDetail>,
}

/// Query for the nearest route to a point.
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    /// Query point latitude
    pub lat: f64,

    /// Query point longitude
    pub lon: f64,
}

/// Response for a nearest-route query.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    /// Name of the nearest route
    pub route: String,

    /// The route coordinate closest to the query point
    pub coordinate: CoordinateDto,

    /// Distance from the query point to that coordinate, in km
    pub distance_km: f64,
}

impl NearestResponse {
    /// Build from a locator match.
    pub fn from_match(found: &NearestMatch<'_>) -> Self {
        Self {
            route: found.route.name().to_string(),
            coordinate: found.coordinate.into(),
            distance_km: found.distance_km,
        }
    }
}

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Trip origin
    pub from: CoordinateDto,

    /// Trip destination
    pub to: CoordinateDto,
}

/// Response with the planned trip.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Routes to ride, in order; empty when no connection is known
    pub routes: Vec<RouteDetail>,

    /// Number of route segments in the trip
    pub hops: usize,
}

/// Query for relevance-filtered routes around a destination.
#[derive(Debug, Deserialize)]
pub struct RelevantQuery {
    /// Destination latitude
    pub lat: f64,

    /// Destination longitude
    pub lon: f64,

    /// Trip origin latitude (enables candidate pre-filtering)
    pub from_lat: Option<f64>,

    /// Trip origin longitude
    pub from_lon: Option<f64>,

    /// Candidate filter strategy
    #[serde(default)]
    pub mode: CandidateMode,
}

/// One relevance-ranked route.
#[derive(Debug, Serialize)]
pub struct RelevantRoute {
    /// Route name
    pub name: String,

    /// Full coordinate sequence of the route
    pub coordinates: Vec<CoordinateDto>,

    /// Closest approach to the destination, in km
    pub distance_km: f64,
}

impl RelevantRoute {
    /// Build from a relevance result.
    pub fn from_relevance(relevance: &RouteRelevance<'_>) -> Self {
        Self {
            name: relevance.route.name().to_string(),
            coordinates: relevance
                .route
                .coordinates()
                .iter()
                .copied()
                .map(CoordinateDto::from)
                .collect(),
            distance_km: relevance.distance_km,
        }
    }
}

/// Response for a relevance query, ascending by distance.
#[derive(Debug, Serialize)]
pub struct RelevantResponse {
    /// Matching routes, closest first
    pub matches: Vec<RelevantRoute>,
}

/// Response for a dataset reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Number of routes in the reloaded dataset
    pub routes: usize,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
