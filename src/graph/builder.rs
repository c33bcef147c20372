use log::debug;
use ordered_float::OrderedFloat;

use crate::config::{BuildConfig, UnknownLocationPolicy};
use crate::geo::Coordinate;
use crate::graph::directed::DirectedGraph;
use crate::graph::locations::LocationIndex;
use crate::graph::Graph;
use crate::{Error, Result};

/// A route graph together with the location table its vertex ids refer to
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: DirectedGraph<OrderedFloat<f64>>,
    pub locations: LocationIndex,
    /// Edges dropped because an endpoint had no coordinate
    pub skipped_edges: usize,
}

/// Turns named coordinates and directed name pairs into a great-circle weighted graph
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    config: BuildConfig,
}

impl GraphBuilder {
    pub fn new(config: BuildConfig) -> Self {
        GraphBuilder { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds the graph
    ///
    /// Every location becomes a vertex. Each edge whose endpoints both have a
    /// coordinate is weighted with their haversine distance in kilometers and
    /// appended to the source's adjacency list in input order. Edges with an
    /// unknown endpoint follow the configured [`UnknownLocationPolicy`].
    pub fn build<N, L, S, T, E>(&self, locations: L, edges: E) -> Result<BuiltGraph>
    where
        N: Into<String>,
        L: IntoIterator<Item = (N, Coordinate)>,
        S: AsRef<str>,
        T: AsRef<str>,
        E: IntoIterator<Item = (S, T)>,
    {
        let mut index = LocationIndex::new();
        for (name, coordinate) in locations {
            let name = name.into();
            coordinate.validate(&name)?;
            index.insert(name, coordinate);
        }

        let mut graph = DirectedGraph::with_vertices(index.len());
        let mut skipped_edges = 0;

        for (src, dst) in edges {
            let (src, dst) = (src.as_ref(), dst.as_ref());
            let endpoints = (index.id(src), index.id(dst));
            let (from, to) = match endpoints {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    let missing = if endpoints.0.is_none() { src } else { dst };
                    if self.config.unknown_location_policy == UnknownLocationPolicy::Reject {
                        return Err(Error::UnknownLocation(missing.to_string()));
                    }
                    debug!("Skipping route {} -> {}: no coordinate for {}", src, dst, missing);
                    skipped_edges += 1;
                    continue;
                }
            };

            let weight = match (index.coordinate(from), index.coordinate(to)) {
                (Some(a), Some(b)) => a.distance_to(&b, self.config.earth_radius_km),
                _ => return Err(Error::VertexNotFound(from)),
            };
            graph.push_edge(from, to, OrderedFloat(weight))?;
        }

        debug!(
            "Built route graph: {} locations, {} routes, {} skipped",
            index.len(),
            graph.edge_count(),
            skipped_edges
        );

        Ok(BuiltGraph {
            graph,
            locations: index,
            skipped_edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine_km;

    fn cities() -> Vec<(&'static str, Coordinate)> {
        vec![
            ("Athens", Coordinate::new(37.9838, 23.7275)),
            ("Rome", Coordinate::new(41.9028, 12.4964)),
            ("Vienna", Coordinate::new(48.2082, 16.3738)),
        ]
    }

    #[test]
    fn test_weights_are_haversine_distances() {
        let built = GraphBuilder::default()
            .build(cities(), vec![("Athens", "Rome"), ("Rome", "Vienna")])
            .unwrap();

        let athens = built.locations.id("Athens").unwrap();
        let rome = built.locations.id("Rome").unwrap();
        let expected = haversine_km(&cities()[0].1, &cities()[1].1);

        assert_eq!(built.graph.get_edge_weight(athens, rome), Some(OrderedFloat(expected)));
        assert_eq!(built.graph.edge_count(), 2);
        assert_eq!(built.skipped_edges, 0);
    }

    #[test]
    fn test_skip_policy_drops_unknown_endpoints() {
        let built = GraphBuilder::default()
            .build(
                cities(),
                vec![("Athens", "Cairo"), ("Tehran", "Rome"), ("Rome", "Vienna")],
            )
            .unwrap();

        assert_eq!(built.graph.edge_count(), 1);
        assert_eq!(built.skipped_edges, 2);
        assert_eq!(built.locations.id("Cairo"), None);
    }

    #[test]
    fn test_reject_policy_names_missing_location() {
        let builder = GraphBuilder::new(BuildConfig::default().with_policy(UnknownLocationPolicy::Reject));
        let err = builder
            .build(cities(), vec![("Rome", "Vienna"), ("Tehran", "Rome")])
            .unwrap_err();

        assert!(matches!(err, Error::UnknownLocation(ref name) if name == "Tehran"));
    }

    #[test]
    fn test_invalid_coordinate_fails_build() {
        let err = GraphBuilder::default()
            .build(vec![("Atlantis", Coordinate::new(123.0, 0.0))], Vec::<(&str, &str)>::new())
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_custom_radius_scales_weights() {
        let builder = GraphBuilder::new(BuildConfig::default().with_earth_radius_km(1.0));
        let built = builder.build(cities(), vec![("Rome", "Vienna")]).unwrap();
        let (_, weight) = built.graph.outgoing_edges(1).next().unwrap();

        let unit = cities()[1].1.distance_to(&cities()[2].1, 1.0);
        assert_eq!(weight, OrderedFloat(unit));
        assert!(weight.0 < 1.0);
    }
}
