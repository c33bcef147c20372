use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flight_paths::graph::generators::generate_route_network;
use flight_paths::{BuildConfig, FinderKind, FlightNetwork};

fn route_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_search");

    for n in [100usize, 1_000, 10_000] {
        let table = generate_route_network(n, 4, 42);
        let network = FlightNetwork::build(table.locations, table.routes, BuildConfig::default()).unwrap();
        let from = "City-0".to_string();
        let to = format!("City-{}", n - 1);

        for kind in [FinderKind::Dijkstra, FinderKind::PathCarrying] {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &n, |b, _| {
                b.iter(|| network.find_route_using(kind, black_box(&from), black_box(&to)).unwrap())
            });
        }
    }

    group.finish();
}

fn graph_build(c: &mut Criterion) {
    let table = generate_route_network(5_000, 4, 7);
    c.bench_function("build_5000_locations", |b| {
        b.iter(|| {
            FlightNetwork::build(
                table.locations.iter().map(|(n, c)| (n.as_str(), *c)),
                table.routes.iter().map(|(s, d)| (s.as_str(), d.as_str())),
                BuildConfig::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, route_search, graph_build);
criterion_main!(benches);
