use std::collections::HashMap;

use crate::geo::Coordinate;

/// Maps location names to dense vertex ids and back
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    names: Vec<String>,
    coordinates: Vec<Coordinate>,
    by_name: HashMap<String, usize>,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location and returns its vertex id
    ///
    /// Registering a name twice keeps the first id and replaces the coordinate.
    pub fn insert(&mut self, name: impl Into<String>, coordinate: Coordinate) -> usize {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            self.coordinates[id] = coordinate;
            return id;
        }

        let id = self.names.len();
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.coordinates.push(coordinate);
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn coordinate(&self, id: usize) -> Option<Coordinate> {
        self.coordinates.get(id).copied()
    }

    /// Iterates `(id, name, coordinate)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, Coordinate)> + '_ {
        self.names
            .iter()
            .zip(self.coordinates.iter())
            .enumerate()
            .map(|(id, (name, coordinate))| (id, name.as_str(), *coordinate))
    }
}
