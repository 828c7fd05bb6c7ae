//! Location directory.

use std::collections::HashMap;

use bakehouse_core::LocationId;

use crate::models::Location;

/// Lookup of supply-chain locations by ID.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    locations: HashMap<LocationId, Location>,
}

impl LocationDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a location. Returns the previous record, if any.
    pub fn insert(&mut self, location: Location) -> Option<Location> {
        self.locations.insert(location.id.clone(), location)
    }

    /// Look up a location.
    #[must_use]
    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Display name for a location, or "Unknown Location".
    #[must_use]
    pub fn name_of(&self, id: &LocationId) -> &str {
        self.get(id).map_or("Unknown Location", |l| l.name.as_str())
    }

    /// Locations that can receive ingredient orders, sorted by ID.
    #[must_use]
    pub fn destinations(&self) -> Vec<&Location> {
        let mut all: Vec<&Location> = self
            .locations
            .values()
            .filter(|l| l.kind.accepts_ingredient_orders())
            .collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}

impl FromIterator<Location> for LocationDirectory {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut directory = Self::new();
        for location in iter {
            directory.insert(location);
        }
        directory
    }
}
