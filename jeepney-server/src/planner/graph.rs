//! Proximity graph over routes.
//!
//! Two routes are adjacent when any coordinate pair between them lies
//! within the proximity threshold. Construction compares every coordinate
//! pair of every route pair, O(R^2 * C^2) in the worst case: fine for a
//! municipal dataset (tens of routes, hundreds of points each), and not
//! intended for anything larger.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::domain::{Route, RouteSet};
use crate::geo::haversine_km;

/// Adjacency between routes whose paths pass within a threshold of each
/// other.
///
/// Edges are symmetric by construction: both directions are recorded as
/// soon as one close coordinate pair is found. Neighbor sets iterate in
/// name order, so traversals over this graph are deterministic.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<String, BTreeSet<String>>,
}

impl RouteGraph {
    /// Build the graph for every route in the dataset.
    pub fn build(routes: &RouteSet, threshold_km: f64) -> Self {
        let mut adjacency: HashMap<String, BTreeSet<String>> = routes
            .iter()
            .map(|r| (r.name().to_string(), BTreeSet::new()))
            .collect();

        let all: Vec<&Route> = routes.iter().collect();
        for (i, r1) in all.iter().enumerate() {
            for r2 in &all[i + 1..] {
                if r1.name() == r2.name() {
                    // Duplicate names collapse to a single node
                    continue;
                }
                if within_threshold(r1, r2, threshold_km) {
                    trace!(a = r1.name(), b = r2.name(), "routes adjacent");
                    adjacency
                        .entry(r1.name().to_string())
                        .or_default()
                        .insert(r2.name().to_string());
                    adjacency
                        .entry(r2.name().to_string())
                        .or_default()
                        .insert(r1.name().to_string());
                }
            }
        }

        let graph = Self { adjacency };
        debug!(
            routes = graph.route_count(),
            edges = graph.edge_count(),
            threshold_km,
            "proximity graph built"
        );
        graph
    }

    /// Names of routes adjacent to `name`, in name order.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// True if the two routes share an edge.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(b))
    }

    /// Number of route nodes in the graph.
    pub fn route_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

/// True if any coordinate pair between the two routes is within
/// `threshold_km`. Stops scanning at the first hit.
fn within_threshold(a: &Route, b: &Route, threshold_km: f64) -> bool {
    a.coordinates().iter().any(|&c1| {
        b.coordinates()
            .iter()
            .any(|&c2| haversine_km(c1, c2) <= threshold_km)
    })
}
