//! Driver and rider bookkeeping.
//!
//! Both parties keep an append-only list of ride ids and resolve them against
//! the [`RideRegistry`](crate::registry::RideRegistry) when reporting totals.
//! The lists accept duplicates; the same ride appended twice counts twice.

use crate::registry::RideRegistry;
use crate::rides::{Ride, RideId};

/// A party who serves rides and accumulates earnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: u32,
    name: String,
    rating: f64,
    assigned: Vec<RideId>,
}

impl Driver {
    /// `rating` is expected in `[0, 5]`; the core does not validate beyond a
    /// debug assertion, per the collaborator precondition.
    pub fn new(id: u32, name: impl Into<String>, rating: f64) -> Self {
        debug_assert!((0.0..=5.0).contains(&rating), "rating must be in [0, 5]");
        Self {
            id,
            name: name.into(),
            rating,
            assigned: Vec::new(),
        }
    }

    /// Append a ride to this driver's list. Append-only: nothing is ever
    /// removed, and no uniqueness check is made.
    pub fn assign_ride(&mut self, ride: RideId) {
        self.assigned.push(ride);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn ride_count(&self) -> usize {
        self.assigned.len()
    }

    /// Assigned ride ids in assignment order.
    pub fn assigned_rides(&self) -> &[RideId] {
        &self.assigned
    }

    /// Sum of fares over the assigned list, resolved through the registry.
    pub fn total_earnings(&self, registry: &RideRegistry) -> f64 {
        self.assigned
            .iter()
            .filter_map(|id| registry.get(*id))
            .map(Ride::fare)
            .sum()
    }
}

/// A party who requests rides and accumulates spend.
#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    id: u32,
    name: String,
    requested: Vec<RideId>,
}

impl Rider {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requested: Vec::new(),
        }
    }

    /// Append a ride to this rider's history. Append-only, duplicates allowed.
    pub fn request_ride(&mut self, ride: RideId) {
        self.requested.push(ride);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ride_count(&self) -> usize {
        self.requested.len()
    }

    /// Requested ride ids in request order.
    pub fn requested_rides(&self) -> &[RideId] {
        &self.requested
    }

    /// Sum of fares over the requested list, resolved through the registry.
    pub fn total_spent(&self, registry: &RideRegistry) -> f64 {
        self.requested
            .iter()
            .filter_map(|id| registry.get(*id))
            .map(Ride::fare)
            .sum()
    }
}
