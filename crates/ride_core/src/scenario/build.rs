use std::fmt;

use crate::agents::{Driver, Rider};
use crate::registry::RideRegistry;
use crate::rides::{Ride, RideId};

use super::params::ScenarioParams;

/// Errors encountered while wiring a scenario together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioError {
    UnknownRider(u32),
    UnknownDriver(u32),
    UnknownRide(u32),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::UnknownRider(id) => write!(f, "unknown rider id {id}"),
            ScenarioError::UnknownDriver(id) => write!(f, "unknown driver id {id}"),
            ScenarioError::UnknownRide(id) => write!(f, "unknown ride id {id}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// A built run: the populated ride registry, the parties with their ride
/// lists filled in, and the ordered request/assignment events for the
/// presenter to replay.
#[derive(Debug)]
pub struct Scenario {
    pub registry: RideRegistry,
    pub riders: Vec<Rider>,
    pub drivers: Vec<Driver>,
    /// `(index into riders, ride)` in program order.
    pub requests: Vec<(usize, RideId)>,
    /// `(index into drivers, ride)` in program order.
    pub assignments: Vec<(usize, RideId)>,
}

impl Scenario {
    /// Build the registry and parties from the params and apply every
    /// request and assignment in program order.
    pub fn build(params: ScenarioParams) -> Result<Self, ScenarioError> {
        let mut registry = RideRegistry::new();
        for spec in params.rides {
            registry.insert(Ride::from_parts(
                RideId(spec.id),
                spec.pickup,
                spec.dropoff,
                spec.distance_miles,
                spec.class,
            ));
        }

        let mut riders: Vec<Rider> = params
            .riders
            .into_iter()
            .map(|r| Rider::new(r.id, r.name))
            .collect();
        let mut drivers: Vec<Driver> = params
            .drivers
            .into_iter()
            .map(|d| Driver::new(d.id, d.name, d.rating))
            .collect();

        let mut requests = Vec::with_capacity(params.requests.len());
        for (rider_id, ride_id) in params.requests {
            let idx = riders
                .iter()
                .position(|r| r.id() == rider_id)
                .ok_or(ScenarioError::UnknownRider(rider_id))?;
            let ride = RideId(ride_id);
            if registry.get(ride).is_none() {
                return Err(ScenarioError::UnknownRide(ride_id));
            }
            riders[idx].request_ride(ride);
            requests.push((idx, ride));
        }

        let mut assignments = Vec::with_capacity(params.assignments.len());
        for (driver_id, ride_id) in params.assignments {
            let idx = drivers
                .iter()
                .position(|d| d.id() == driver_id)
                .ok_or(ScenarioError::UnknownDriver(driver_id))?;
            let ride = RideId(ride_id);
            if registry.get(ride).is_none() {
                return Err(ScenarioError::UnknownRide(ride_id));
            }
            drivers[idx].assign_ride(ride);
            assignments.push((idx, ride));
        }

        Ok(Self {
            registry,
            riders,
            drivers,
            requests,
            assignments,
        })
    }
}
