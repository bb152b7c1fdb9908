//! Central owner of all `Ride` instances for a run.
//!
//! Drivers and riders hold opaque [`RideId`]s and resolve them through the
//! registry, so the rides have a single owner that outlives every party
//! referencing them.

use crate::rides::{Ride, RideId};

/// Rides owned by the run, kept in insertion order.
#[derive(Debug, Default)]
pub struct RideRegistry {
    rides: Vec<Ride>,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ride and return its id. Insertion order is preserved; id
    /// uniqueness is the caller's responsibility.
    pub fn insert(&mut self, ride: Ride) -> RideId {
        let id = ride.id();
        self.rides.push(ride);
        id
    }

    pub fn get(&self, id: RideId) -> Option<&Ride> {
        self.rides.iter().find(|r| r.id() == id)
    }

    /// Iterate rides in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Sum of fares over all rides, at full f64 precision.
    pub fn total_revenue(&self) -> f64 {
        self.rides.iter().map(Ride::fare).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_registry() -> RideRegistry {
        let mut registry = RideRegistry::new();
        registry.insert(Ride::standard(RideId(3001), "Downtown", "Airport", 15.5));
        registry.insert(Ride::premium(
            RideId(3002),
            "Hotel",
            "Conference Center",
            8.3,
            true,
        ));
        registry.insert(Ride::shared(RideId(3003), "University", "Mall", 6.7, 3));
        registry.insert(Ride::standard(RideId(3004), "Home", "Office", 12.0));
        registry.insert(Ride::premium(
            RideId(3005),
            "Restaurant",
            "Theater",
            4.5,
            false,
        ));
        registry
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let registry = seed_registry();
        let ids: Vec<u32> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec![3001, 3002, 3003, 3004, 3005]);
    }

    #[test]
    fn get_resolves_ids() {
        let registry = seed_registry();
        assert_eq!(registry.get(RideId(3003)).unwrap().ride_type(), "Shared");
        assert!(registry.get(RideId(9999)).is_none());
    }

    #[test]
    fn total_revenue_sums_all_fares() {
        let registry = seed_registry();
        assert_eq!(registry.len(), 5);
        assert!((registry.total_revenue() - 149.985).abs() < 1e-9);
    }

    #[test]
    fn empty_registry_has_zero_revenue() {
        let registry = RideRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.total_revenue(), 0.0);
    }
}
