use std::fmt;
use std::str::FromStr;

use crate::geo::EARTH_RADIUS_KM;

/// What the graph builder does with an edge naming a location it has no coordinate for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownLocationPolicy {
    /// Drop the edge and keep building
    #[default]
    Skip,
    /// Fail the build with `Error::UnknownLocation`
    Reject,
}

/// Configuration for turning locations and routes into a weighted graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    pub unknown_location_policy: UnknownLocationPolicy,
    /// Radius of the sphere edge weights are measured on
    pub earth_radius_km: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            unknown_location_policy: UnknownLocationPolicy::Skip,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl BuildConfig {
    pub fn with_policy(mut self, policy: UnknownLocationPolicy) -> Self {
        self.unknown_location_policy = policy;
        self
    }

    pub fn with_earth_radius_km(mut self, radius: f64) -> Self {
        self.earth_radius_km = radius;
        self
    }
}

/// Which shortest path search to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderKind {
    /// Dijkstra with a predecessor map
    #[default]
    Dijkstra,
    /// Dijkstra carrying the path-so-far in each queue entry
    PathCarrying,
}

impl FinderKind {
    pub fn name(&self) -> &'static str {
        match self {
            FinderKind::Dijkstra => "dijkstra",
            FinderKind::PathCarrying => "path-carrying",
        }
    }
}

impl fmt::Display for FinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FinderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(FinderKind::Dijkstra),
            "path-carrying" => Ok(FinderKind::PathCarrying),
            other => Err(format!("Unknown algorithm: {}", other)),
        }
    }
}
