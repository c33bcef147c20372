use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use flight_paths::dataset::Dataset;
use flight_paths::{BuildConfig, FinderKind, FlightNetwork, NetworkData, UnknownLocationPolicy, EARTH_RADIUS_KM};

/// Shortest flight route between two cities, by great-circle distance.
#[derive(Parser, Debug)]
#[command(name = "flight_route")]
#[command(version)]
struct Args {
    /// Origin city
    #[arg(long, default_value = "Singapore")]
    from: String,

    /// Destination city
    #[arg(long, default_value = "Vienna")]
    to: String,

    /// JSON network file; overrides --dataset
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Bundled route table: world or asia-europe
    #[arg(short, long, default_value = "asia-europe")]
    dataset: Dataset,

    /// Search algorithm: dijkstra or path-carrying
    #[arg(short, long, default_value = "dijkstra")]
    algorithm: FinderKind,

    /// Fail on routes naming a city without coordinates instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Radius of the sphere distances are measured on
    #[arg(long, default_value_t = EARTH_RADIUS_KM)]
    earth_radius_km: f64,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let data = match &args.network {
        Some(path) => NetworkData::from_path(path)
            .with_context(|| format!("loading network from {}", path.display()))?,
        None => {
            info!("Using bundled {} route table", args.dataset);
            args.dataset.load()
        }
    };

    let policy = if args.strict {
        UnknownLocationPolicy::Reject
    } else {
        UnknownLocationPolicy::Skip
    };
    let config = BuildConfig::default()
        .with_policy(policy)
        .with_earth_radius_km(args.earth_radius_km);

    let network = FlightNetwork::from_data(&data, config).context("building route network")?;
    let route = network
        .find_route_using(args.algorithm, &args.from, &args.to)
        .with_context(|| format!("searching {} -> {}", args.from, args.to))?;

    if !route.is_reachable() {
        warn!("No route from {} to {}", args.from, args.to);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{}", route);
    }

    Ok(())
}
