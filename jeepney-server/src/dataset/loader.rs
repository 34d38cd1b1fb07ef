//! Dataset loading and validation.
//!
//! Converts the wire document into validated domain routes. A malformed
//! coordinate or an empty route fails the whole load, naming the
//! offending route: datasets are small and a typo should be loud.

use std::path::Path;

use crate::domain::{Point, Route, RouteSet};

use super::dto::{RouteDocument, RouteDto};
use super::error::DatasetError;

/// Load and validate a dataset from a JSON file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RouteSet, DatasetError> {
    let body = std::fs::read_to_string(path)?;
    parse_document(&body)
}

/// Parse and validate a dataset document.
pub fn parse_document(body: &str) -> Result<RouteSet, DatasetError> {
    let document: RouteDocument = serde_json::from_str(body)?;
    build_route_set(document)
}

/// Convert the wire document into a validated snapshot.
pub fn build_route_set(document: RouteDocument) -> Result<RouteSet, DatasetError> {
    let mut routes = Vec::with_capacity(document.routes.len());
    for dto in document.routes {
        routes.push(convert_route(dto)?);
    }
    Ok(RouteSet::new(routes))
}

fn convert_route(dto: RouteDto) -> Result<Route, DatasetError> {
    let mut coordinates = Vec::with_capacity(dto.coordinates.len());
    for [lat, lng] in dto.coordinates {
        let point = Point::new(lat, lng).map_err(|e| DatasetError::InvalidRoute {
            name: dto.name.clone(),
            reason: e.to_string(),
        })?;
        coordinates.push(point);
    }

    Route::new(dto.name.clone(), coordinates).map_err(|e| DatasetError::InvalidRoute {
        name: dto.name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "jeepneyRoute": [
            {
                "name": "R2 - Carmen",
                "coordinates": [[8.4746, 124.6468], [8.4795, 124.6490]]
            },
            {
                "name": "RB - Bulua",
                "coordinates": [[8.4835, 124.6450]]
            }
        ]
    }"#;

    #[test]
    fn parse_valid_document() {
        let set = parse_document(SAMPLE).unwrap();
        assert_eq!(set.len(), 2);

        let r2 = set.get("R2 - Carmen").unwrap();
        assert_eq!(r2.coordinates().len(), 2);
        assert_eq!(r2.coordinates()[0].latitude(), 8.4746);
        assert_eq!(r2.coordinates()[0].longitude(), 124.6468);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_document("not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn out_of_range_coordinate_names_the_route() {
        let body = r#"{
            "jeepneyRoute": [
                { "name": "bad", "coordinates": [[95.0, 124.6]] }
            ]
        }"#;

        let err = parse_document(body).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidRoute { ref name, .. } if name == "bad"
        ));
    }

    #[test]
    fn empty_coordinate_list_names_the_route() {
        let body = r#"{
            "jeepneyRoute": [
                { "name": "hollow", "coordinates": [] }
            ]
        }"#;

        let err = parse_document(body).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidRoute { ref name, .. } if name == "hollow"
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let set = load_from_path(file.path()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_path("/nonexistent/routes.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
