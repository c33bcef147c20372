use std::time::{Duration, Instant};
use flight_paths::algorithm::PathFinder;
use flight_paths::graph::generators::generate_route_network;
use flight_paths::network::RouteGraph;
use flight_paths::{BuildConfig, Dijkstra, FlightNetwork, PathCarryingDijkstra};
use ordered_float::OrderedFloat;

// Function to benchmark a search over a batch of queries
fn benchmark_finder<F>(name: &str, finder: &F, network: &FlightNetwork, queries: &[(usize, usize)]) -> Duration
where
    F: PathFinder<OrderedFloat<f64>, RouteGraph>,
{
    let start = Instant::now();
    let mut reached = 0;
    let mut stale = 0;
    for &(source, target) in queries {
        let result = finder.find_path(network.graph(), source, target).unwrap();
        if result.is_reachable() {
            reached += 1;
        }
        stale += result.stats.stale;
    }
    let duration = start.elapsed();

    println!("  - {}: {}/{} reached, {} stale pops in {:?}", name, reached, queries.len(), stale, duration);
    duration
}

fn main() {
    env_logger::init();

    let network_sizes = vec![100, 1_000, 5_000, 20_000];
    let routes_per_location = 4;
    let queries_per_size = 50;

    for n in network_sizes {
        println!("\n=== Route network with {} locations ===", n);
        let table = generate_route_network(n, routes_per_location, n as u64);
        let network = FlightNetwork::build(table.locations, table.routes, BuildConfig::default()).unwrap();
        println!("Built {} routes", network.route_count());

        let queries: Vec<(usize, usize)> = (0..queries_per_size)
            .map(|i| ((i * 7919) % n, (i * 104729 + 1) % n))
            .collect();

        let dijkstra_time = benchmark_finder("Dijkstra", &Dijkstra::new(), &network, &queries);
        let carrying_time = benchmark_finder("PathCarryingDijkstra", &PathCarryingDijkstra::new(), &network, &queries);

        let ratio = carrying_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);
        println!("Path-carrying / predecessor-map time ratio: {:.2}x", ratio);
    }
}
