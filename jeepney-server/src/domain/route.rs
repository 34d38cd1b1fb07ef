//! Route and dataset snapshot types.

use super::error::DomainError;
use super::point::Point;

/// A named jeepney route: an ordered sequence of coordinates.
///
/// Routes are immutable once built and always hold at least one
/// coordinate. Identity is the name.
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    coordinates: Vec<Point>,
}

impl Route {
    /// Construct a route, rejecting an empty coordinate sequence.
    pub fn new(name: impl Into<String>, coordinates: Vec<Point>) -> Result<Self, DomainError> {
        let name = name.into();
        if coordinates.is_empty() {
            return Err(DomainError::EmptyRoute(name));
        }
        Ok(Self { name, coordinates })
    }

    /// The route's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The route's coordinates, in travel order.
    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }
}

/// An immutable snapshot of the route dataset.
///
/// Preserves dataset order. Duplicate names are not rejected; name lookups
/// return the first match in dataset order.
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Create a snapshot from routes in dataset order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// First route with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == name)
    }

    /// First route with the given name, or `RouteNotFound`.
    pub fn lookup(&self, name: &str) -> Result<&Route, DomainError> {
        self.get(name)
            .ok_or_else(|| DomainError::RouteNotFound(name.to_string()))
    }

    /// Iterate routes in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Number of routes in the snapshot.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if the snapshot holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn construct_route() {
        let route = Route::new("R2", vec![pt(8.47, 124.64), pt(8.48, 124.65)]).unwrap();
        assert_eq!(route.name(), "R2");
        assert_eq!(route.coordinates().len(), 2);
    }

    #[test]
    fn reject_empty_route() {
        let err = Route::new("R2", vec![]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyRoute(name) if name == "R2"));
    }

    #[test]
    fn single_coordinate_route_allowed() {
        assert!(Route::new("stub", vec![pt(0.0, 0.0)]).is_ok());
    }

    #[test]
    fn lookup_by_name() {
        let set = RouteSet::new(vec![
            Route::new("R1", vec![pt(0.0, 0.0)]).unwrap(),
            Route::new("R2", vec![pt(1.0, 1.0)]).unwrap(),
        ]);

        assert_eq!(set.lookup("R2").unwrap().name(), "R2");
        assert!(matches!(
            set.lookup("R3"),
            Err(DomainError::RouteNotFound(name)) if name == "R3"
        ));
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        let set = RouteSet::new(vec![
            Route::new("R1", vec![pt(0.0, 0.0)]).unwrap(),
            Route::new("R1", vec![pt(5.0, 5.0)]).unwrap(),
        ]);

        let found = set.get("R1").unwrap();
        assert_eq!(found.coordinates()[0].latitude(), 0.0);
    }

    #[test]
    fn len_and_iteration_order() {
        let set = RouteSet::new(vec![
            Route::new("B", vec![pt(0.0, 0.0)]).unwrap(),
            Route::new("A", vec![pt(1.0, 1.0)]).unwrap(),
        ]);

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());

        let names: Vec<&str> = set.iter().map(Route::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn empty_set() {
        let set = RouteSet::default();
        assert!(set.is_empty());
        assert!(set.get("R1").is_none());
    }
}
