//! Name-level access to a built route graph.
//!
//! [`FlightNetwork`] owns the immutable graph and the location table behind it
//! and answers queries by location name. Results come back as [`Route`]s, which
//! render the way the command line tool prints them.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

use crate::algorithm::{PathFinder, PathResult, SearchStats};
use crate::config::{BuildConfig, FinderKind};
use crate::geo::Coordinate;
use crate::graph::{DirectedGraph, Graph, GraphBuilder, LocationIndex};
use crate::{Dijkstra, Error, PathCarryingDijkstra, Result};

/// Weighted route graph as stored by the network
pub type RouteGraph = DirectedGraph<OrderedFloat<f64>>;

/// Serialized form of a route network
///
/// ```json
/// { "locations": { "Rome": [41.9028, 12.4964], "Vienna": [48.2082, 16.3738] },
///   "edges": [["Rome", "Vienna"]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub locations: BTreeMap<String, Coordinate>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl NetworkData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("Read network file {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A shortest route between two named locations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Total great-circle distance, `f64::INFINITY` when there is no route
    #[serde(serialize_with = "serialize_distance")]
    pub distance_km: f64,
    /// Location names from origin to destination inclusive, empty when there is no route
    pub path: Vec<String>,
    #[serde(skip)]
    pub stats: SearchStats,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path: {}", self.path.join(" -> "))?;
        write!(f, "Distance: {:.2} km", self.distance_km)
    }
}

fn serialize_distance<S: Serializer>(distance: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if distance.is_finite() {
        serializer.serialize_some(distance)
    } else {
        serializer.serialize_none()
    }
}

/// Locations and directed routes, weighted by great-circle distance
#[derive(Debug, Clone)]
pub struct FlightNetwork {
    graph: RouteGraph,
    locations: LocationIndex,
    skipped_edges: usize,
}

impl FlightNetwork {
    /// Builds a network from named coordinates and directed name pairs
    pub fn build<N, L, S, T, E>(locations: L, edges: E, config: BuildConfig) -> Result<Self>
    where
        N: Into<String>,
        L: IntoIterator<Item = (N, Coordinate)>,
        S: AsRef<str>,
        T: AsRef<str>,
        E: IntoIterator<Item = (S, T)>,
    {
        let built = GraphBuilder::new(config).build(locations, edges)?;
        info!(
            "Route network ready: {} locations, {} routes",
            built.locations.len(),
            built.graph.edge_count()
        );
        if built.skipped_edges > 0 {
            info!("{} routes skipped for lack of coordinates", built.skipped_edges);
        }

        Ok(FlightNetwork {
            graph: built.graph,
            locations: built.locations,
            skipped_edges: built.skipped_edges,
        })
    }

    pub fn from_data(data: &NetworkData, config: BuildConfig) -> Result<Self> {
        Self::build(
            data.locations.iter().map(|(name, c)| (name.as_str(), *c)),
            data.edges.iter().map(|(s, d)| (s.as_str(), d.as_str())),
            config,
        )
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.id(name).is_some()
    }

    fn vertex(&self, name: &str) -> Result<usize> {
        self.locations
            .id(name)
            .ok_or_else(|| Error::UnknownLocation(name.to_string()))
    }

    /// Direct routes out of `name` with their distances, in insertion order
    pub fn departures(&self, name: &str) -> Result<Vec<(&str, f64)>> {
        let from = self.vertex(name)?;
        Ok(self
            .graph
            .outgoing_edges(from)
            .filter_map(|(to, weight)| self.locations.name(to).map(|n| (n, weight.0)))
            .collect())
    }

    /// Shortest route with the default search
    pub fn find_route(&self, from: &str, to: &str) -> Result<Route> {
        self.find_route_with(&Dijkstra::new(), from, to)
    }

    /// Shortest route with the search selected by `kind`
    pub fn find_route_using(&self, kind: FinderKind, from: &str, to: &str) -> Result<Route> {
        match kind {
            FinderKind::Dijkstra => self.find_route_with(&Dijkstra::new(), from, to),
            FinderKind::PathCarrying => self.find_route_with(&PathCarryingDijkstra::new(), from, to),
        }
    }

    /// Shortest route with a caller-supplied search
    ///
    /// Unknown names are errors; a destination that cannot be reached is not.
    pub fn find_route_with<F>(&self, finder: &F, from: &str, to: &str) -> Result<Route>
    where
        F: PathFinder<OrderedFloat<f64>, RouteGraph>,
    {
        let source = self.vertex(from)?;
        let target = self.vertex(to)?;
        let result = finder.find_path(&self.graph, source, target)?;
        debug!(
            "{}: {} -> {} finalized {} locations",
            finder.name(),
            from,
            to,
            result.stats.finalized
        );
        self.to_route(result)
    }

    /// Runs many queries in parallel over the shared graph; results keep the input order
    pub fn find_routes<S, T>(&self, kind: FinderKind, queries: &[(S, T)]) -> Vec<Result<Route>>
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|(from, to)| self.find_route_using(kind, from.as_ref(), to.as_ref()))
            .collect()
    }

    fn to_route(&self, result: PathResult<OrderedFloat<f64>>) -> Result<Route> {
        let path = result
            .path
            .iter()
            .map(|&id| {
                self.locations
                    .name(id)
                    .map(str::to_string)
                    .ok_or(Error::VertexNotFound(id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Route {
            distance_km: result.cost.0,
            path,
            stats: result.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownLocationPolicy;
    use crate::dataset;

    #[test]
    fn test_singapore_to_vienna() {
        let network = FlightNetwork::from_data(&dataset::asia_europe(), BuildConfig::default()).unwrap();
        let route = network.find_route("Singapore", "Vienna").unwrap();

        assert_eq!(
            route.path,
            vec!["Singapore", "Dubai", "Doha", "Istanbul", "Athens", "Rome", "Vienna"]
        );
        assert!((route.distance_km - 11311.47).abs() < 0.01, "got {}", route.distance_km);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let network = FlightNetwork::from_data(&dataset::asia_europe(), BuildConfig::default()).unwrap();
        let err = network.find_route("Singapore", "Atlantis").unwrap_err();
        assert!(matches!(err, Error::UnknownLocation(ref n) if n == "Atlantis"));
        assert!(network.departures("Atlantis").is_err());
    }

    #[test]
    fn test_departures() {
        let network = FlightNetwork::from_data(&dataset::asia_europe(), BuildConfig::default()).unwrap();
        let targets: Vec<&str> = network.departures("Dubai").unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(targets, vec!["Singapore", "Bangkok", "Doha"]);
        assert!(network.departures("Vienna").unwrap().is_empty());
    }

    #[test]
    fn test_route_display_and_json() {
        let network = FlightNetwork::from_data(&dataset::asia_europe(), BuildConfig::default()).unwrap();

        let route = network.find_route("Rome", "Vienna").unwrap();
        let text = route.to_string();
        assert!(text.starts_with("Path: Rome -> Vienna\nDistance: "));
        assert!(text.ends_with(" km"));

        let none = network.find_route("Vienna", "Rome").unwrap();
        assert_eq!(none.to_string(), "Path: \nDistance: inf km");
        let json = serde_json::to_value(&none).unwrap();
        assert_eq!(json, serde_json::json!({ "distance_km": null, "path": [] }));
    }

    #[test]
    fn test_network_json_document() {
        let json = r#"{
            "locations": { "Rome": [41.9028, 12.4964], "Vienna": [48.2082, 16.3738] },
            "edges": [["Rome", "Vienna"], ["Vienna", "Oslo"]]
        }"#;
        let data = NetworkData::from_json_str(json).unwrap();
        assert_eq!(data.locations.len(), 2);

        let network = FlightNetwork::from_data(&data, BuildConfig::default()).unwrap();
        assert_eq!(network.route_count(), 1);
        assert_eq!(network.skipped_edges(), 1);

        let strict = BuildConfig::default().with_policy(UnknownLocationPolicy::Reject);
        assert!(matches!(
            FlightNetwork::from_data(&data, strict),
            Err(Error::UnknownLocation(ref n)) if n == "Oslo"
        ));

        let written = data.to_json_string().unwrap();
        assert!(written.contains("\"Vienna\""));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(NetworkData::from_json_str("{\"edges\": []}"), Err(Error::Json(_))));
        assert!(matches!(
            NetworkData::from_path("/nonexistent/network.json"),
            Err(Error::Io(_))
        ));
    }
}
