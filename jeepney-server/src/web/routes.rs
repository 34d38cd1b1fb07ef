//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::domain::{DomainError, Point, Route};
use crate::planner::{self, PlannerError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(list_routes))
        .route("/route/:name", get(get_route))
        .route("/nearest", get(nearest_route))
        .route("/trip/plan", post(plan_trip))
        .route("/routes/relevant", get(relevant_routes))
        .route("/dataset/reload", post(reload_dataset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every route in the dataset.
async fn list_routes(State(state): State<AppState>) -> Json<RouteListResponse> {
    let snapshot = state.routes.snapshot().await;
    Json(RouteListResponse {
        routes: snapshot.iter().map(RouteDetail::from_route).collect(),
    })
}

/// Fetch one route by name.
async fn get_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RouteDetail>, AppError> {
    let snapshot = state.routes.snapshot().await;
    let route = snapshot.lookup(&name)?;
    Ok(Json(RouteDetail::from_route(route)))
}

/// Find the route and coordinate nearest a point.
async fn nearest_route(
    State(state): State<AppState>,
    Query(req): Query<NearestQuery>,
) -> Result<Json<NearestResponse>, AppError> {
    let point = parse_point(req.lat, req.lon)?;
    let snapshot = state.routes.snapshot().await;

    let found = planner::locate_nearest(point, &snapshot)?;
    Ok(Json(NearestResponse::from_match(&found)))
}

/// Plan a trip from an origin to a destination.
///
/// An empty route list in the response means no connecting trip is known;
/// that is a successful answer, not an error.
async fn plan_trip(
    State(state): State<AppState>,
    Json(req): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    let origin = parse_point(req.from.lat, req.from.lon)?;
    let destination = parse_point(req.to.lat, req.to.lon)?;
    let snapshot = state.routes.snapshot().await;

    let trip = planner::find_path(origin, destination, &snapshot, &state.config)?;
    Ok(Json(PlanTripResponse {
        hops: trip.len(),
        routes: trip.iter().map(|r| RouteDetail::from_route(r)).collect(),
    }))
}

/// Relevance-filtered routes around a destination.
///
/// When the trip origin is supplied, the dataset is first narrowed by the
/// requested candidate filter; otherwise every route is a candidate.
async fn relevant_routes(
    State(state): State<AppState>,
    Query(req): Query<RelevantQuery>,
) -> Result<Json<RelevantResponse>, AppError> {
    let destination = parse_point(req.lat, req.lon)?;
    let snapshot = state.routes.snapshot().await;

    let candidates: Vec<&Route> = match (req.from_lat, req.from_lon) {
        (Some(lat), Some(lon)) => {
            let origin = parse_point(lat, lon)?;
            planner::filter_candidates(req.mode, origin, destination, &snapshot)
        }
        _ => snapshot.iter().collect(),
    };

    let matches = planner::filter_relevant(destination, &candidates, &state.config);
    Ok(Json(RelevantResponse {
        matches: matches.iter().map(RelevantRoute::from_relevance).collect(),
    }))
}

/// Reload the route dataset from its source.
async fn reload_dataset(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let routes = state.routes.reload().await.map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;
    Ok(Json(ReloadResponse { routes }))
}

/// Validate raw query coordinates into a domain point.
fn parse_point(lat: f64, lon: f64) -> Result<Point, AppError> {
    Point::new(lat, lon).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RouteNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
