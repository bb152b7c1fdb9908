//! Demonstration scenario: declare rides, riders, drivers and their
//! associations, then build the populated registry and party lists.
//!
//! Parameters are serde-deserializable so a fixture can also be loaded from
//! JSON; `ScenarioParams::default()` is the canonical five-ride demo run.

mod build;
mod params;

pub use build::{Scenario, ScenarioError};
pub use params::{DriverSpec, RideSpec, RiderSpec, ScenarioParams};
