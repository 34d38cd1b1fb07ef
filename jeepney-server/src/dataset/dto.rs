//! Wire format of the route dataset document.

use serde::{Deserialize, Serialize};

/// Top-level dataset document: a single `jeepneyRoute` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(rename = "jeepneyRoute")]
    pub routes: Vec<RouteDto>,
}

/// One route entry: a name and its `[lat, lng]` coordinate pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub name: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_dataset_document() {
        let body = r#"{
            "jeepneyRoute": [
                {
                    "name": "R2 - Carmen",
                    "coordinates": [[8.4746, 124.6468], [8.4795, 124.6490]]
                }
            ]
        }"#;

        let document: RouteDocument = serde_json::from_str(body).unwrap();
        assert_eq!(document.routes.len(), 1);
        assert_eq!(document.routes[0].name, "R2 - Carmen");
        assert_eq!(document.routes[0].coordinates[0], [8.4746, 124.6468]);
    }

    #[test]
    fn missing_route_array_is_rejected() {
        let body = r#"{ "routes": [] }"#;
        assert!(serde_json::from_str::<RouteDocument>(body).is_err());
    }
}
