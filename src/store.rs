use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use crate::models::location::Location;

/// Latest known location of every vehicle, keyed by `vehicle_id`.
///
/// Readers share the lock, an upsert takes it exclusively. Neither operation
/// awaits while holding it.
#[derive(Debug, Default)]
pub struct LocationStore {
    locations: RwLock<HashMap<String, Location>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was stored for `location.vehicle_id`.
    pub fn upsert(&self, location: Location) {
        // A panicking writer cannot leave a half-inserted entry behind, so a poisoned map is still whole.
        let mut locations = self.locations.write().unwrap_or_else(PoisonError::into_inner);
        locations.insert(location.vehicle_id.clone(), location);
    }

    /// Point-in-time copy of all stored locations, in no particular order.
    pub fn snapshot(&self) -> Vec<Location> {
        let locations = self.locations.read().unwrap_or_else(PoisonError::into_inner);
        locations.values().cloned().collect()
    }
}
