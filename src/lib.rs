//! Flight Paths - shortest routes over a directed flight-route graph
//!
//! Locations carry geographic coordinates and every directed route is weighted
//! with the great-circle (haversine) distance between its endpoints, in kilometers.
//! Routes are found with Dijkstra's algorithm; an unreachable destination is a
//! normal outcome reported with an infinite cost and an empty path.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod geo;
pub mod graph;
pub mod network;

pub use algorithm::{
    dijkstra::Dijkstra, path_carrying::PathCarryingDijkstra, PathFinder, PathResult, SearchStats,
};
pub use config::{BuildConfig, FinderKind, UnknownLocationPolicy};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use network::{FlightNetwork, NetworkData, Route};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(usize),

    #[error("Invalid coordinate for {name}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid network document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
