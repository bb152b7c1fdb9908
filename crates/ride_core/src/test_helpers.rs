//! Test helpers for common fixture setup.
//!
//! Provides the canonical seed rides and a pre-built demo scenario so test
//! files don't repeat the wiring.

use crate::registry::RideRegistry;
use crate::rides::{Ride, RideId};
use crate::scenario::{Scenario, ScenarioParams};

/// The five seed rides used across tests: two standard, two premium (one
/// luxury), one shared.
pub fn seed_rides() -> Vec<Ride> {
    vec![
        Ride::standard(RideId(3001), "Downtown", "Airport", 15.5),
        Ride::premium(RideId(3002), "Hotel", "Conference Center", 8.3, true),
        Ride::shared(RideId(3003), "University", "Mall", 6.7, 3),
        Ride::standard(RideId(3004), "Home", "Office", 12.0),
        Ride::premium(RideId(3005), "Restaurant", "Theater", 4.5, false),
    ]
}

/// A registry populated with [`seed_rides`] in order.
pub fn seed_registry() -> RideRegistry {
    let mut registry = RideRegistry::new();
    for ride in seed_rides() {
        registry.insert(ride);
    }
    registry
}

/// The fully wired default demonstration scenario.
///
/// # Panics
///
/// Panics if the default params fail to build (should never happen).
pub fn demo_scenario() -> Scenario {
    Scenario::build(ScenarioParams::default()).expect("default scenario should build")
}
