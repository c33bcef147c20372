use crate::geo::Coordinate;
use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Named locations and directed routes between them, ready for `GraphBuilder::build`
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub locations: Vec<(String, Coordinate)>,
    pub routes: Vec<(String, String)>,
}

/// Generates a random route network with `n` locations scattered over the globe
///
/// Each location gets `routes_per_location` outgoing routes to distinct random
/// destinations. The same seed always yields the same table.
pub fn generate_route_network(n: usize, routes_per_location: usize, seed: u64) -> RouteTable {
    let mut rng = StdRng::seed_from_u64(seed);

    let locations: Vec<(String, Coordinate)> = (0..n)
        .map(|i| {
            let latitude = rng.gen_range(-60.0..70.0);
            let longitude = rng.gen_range(-180.0..180.0);
            (format!("City-{}", i), Coordinate::new(latitude, longitude))
        })
        .collect();

    let mut routes = Vec::with_capacity(n * routes_per_location);
    if n > 1 {
        let fan_out = routes_per_location.min(n - 1);
        for src in 0..n {
            let mut targets = HashSet::new();
            while targets.len() < fan_out {
                let dst = rng.gen_range(0..n);
                if dst != src && targets.insert(dst) {
                    routes.push((locations[src].0.clone(), locations[dst].0.clone()));
                }
            }
        }
    }

    RouteTable { locations, routes }
}

/// Generates a random directed graph with roughly `edge_factor * n` edges
/// Returns a directed graph with OrderedFloat<f64> weights in `1.0..100.0`
pub fn generate_random_graph(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    let mut edges = Vec::with_capacity(num_edges);
    if n > 1 {
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                edges.push((u, v, OrderedFloat(rng.gen_range(1.0..100.0))));
            }
        }
    }

    // Endpoints are drawn from 0..n and weights are positive
    DirectedGraph::from_edges(n, edges).unwrap_or_else(|_| DirectedGraph::with_vertices(n))
}
