//! Ride variants and their attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pricing;

/// Identifier of a ride, unique within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RideId(pub u32);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of pricing variants.
///
/// Each variant selects a fare rule and may carry extra attributes that the
/// report surfaces (the shared passenger count does not affect the fare).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RideClass {
    Standard,
    Premium { luxury_vehicle: bool },
    Shared { passengers: u32 },
}

/// A single trip request with pickup, dropoff, distance and pricing variant.
///
/// Rides are immutable after construction; `fare` and `ride_type` are pure
/// functions of ride state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    id: RideId,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
    class: RideClass,
}

impl Ride {
    fn new(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        class: RideClass,
    ) -> Self {
        debug_assert!(distance_miles >= 0.0, "ride distance must be non-negative");
        if let RideClass::Shared { passengers } = class {
            debug_assert!(passengers >= 1, "shared ride needs at least one passenger");
        }
        Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
            class,
        }
    }

    pub fn standard(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self::new(id, pickup, dropoff, distance_miles, RideClass::Standard)
    }

    pub fn premium(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        luxury_vehicle: bool,
    ) -> Self {
        Self::new(
            id,
            pickup,
            dropoff,
            distance_miles,
            RideClass::Premium { luxury_vehicle },
        )
    }

    pub fn shared(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        passengers: u32,
    ) -> Self {
        Self::new(
            id,
            pickup,
            dropoff,
            distance_miles,
            RideClass::Shared { passengers },
        )
    }

    /// Build a ride from its parts, e.g. when deserializing a scenario.
    pub fn from_parts(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        class: RideClass,
    ) -> Self {
        Self::new(id, pickup, dropoff, distance_miles, class)
    }

    /// Compute the fare for this ride according to its variant rule.
    ///
    /// Deterministic and side-effect free; full f64 precision, rounding
    /// happens only at display time.
    pub fn fare(&self) -> f64 {
        match self.class {
            RideClass::Standard => pricing::standard_fare(self.distance_miles),
            RideClass::Premium { luxury_vehicle } => {
                pricing::premium_fare(self.distance_miles, luxury_vehicle)
            }
            RideClass::Shared { .. } => pricing::shared_fare(self.distance_miles),
        }
    }

    /// The variant name, exactly `"Standard"`, `"Premium"` or `"Shared"`.
    pub fn ride_type(&self) -> &'static str {
        match self.class {
            RideClass::Standard => "Standard",
            RideClass::Premium { .. } => "Premium",
            RideClass::Shared { .. } => "Shared",
        }
    }

    /// The per-mile rate the variant meters at, before fees and discounts.
    pub fn rate_per_mile(&self) -> f64 {
        match self.class {
            RideClass::Standard => pricing::STANDARD_RATE_PER_MILE,
            RideClass::Premium { .. } => pricing::PREMIUM_RATE_PER_MILE,
            RideClass::Shared { .. } => pricing::SHARED_RATE_PER_MILE,
        }
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn class(&self) -> RideClass {
        self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ride_type_matches_variant() {
        let standard = Ride::standard(RideId(3001), "Downtown", "Airport", 15.5);
        let premium = Ride::premium(RideId(3002), "Hotel", "Conference Center", 8.3, true);
        let shared = Ride::shared(RideId(3003), "University", "Mall", 6.7, 3);

        assert_eq!(standard.ride_type(), "Standard");
        assert_eq!(premium.ride_type(), "Premium");
        assert_eq!(shared.ride_type(), "Shared");
    }

    #[test]
    fn fare_dispatches_to_variant_rule() {
        let standard = Ride::standard(RideId(3001), "Downtown", "Airport", 15.5);
        let premium = Ride::premium(RideId(3002), "Hotel", "Conference Center", 8.3, true);
        let shared = Ride::shared(RideId(3003), "University", "Mall", 6.7, 3);

        assert!((standard.fare() - 40.25).abs() < 1e-9);
        assert!((premium.fare() - 48.2).abs() < 1e-9);
        assert!((shared.fare() - 7.035).abs() < 1e-9);
    }

    #[test]
    fn shared_fare_is_independent_of_passenger_count() {
        let two = Ride::shared(RideId(1), "A", "B", 6.7, 2);
        let five = Ride::shared(RideId(2), "A", "B", 6.7, 5);
        assert_eq!(two.fare().to_bits(), five.fare().to_bits());
    }

    #[test]
    fn repeated_fare_calls_are_bit_identical() {
        let ride = Ride::premium(RideId(3002), "Hotel", "Conference Center", 8.3, true);
        assert_eq!(ride.fare().to_bits(), ride.fare().to_bits());
        assert_eq!(ride.ride_type(), ride.ride_type());
    }

    #[test]
    fn rate_per_mile_reflects_variant() {
        let standard = Ride::standard(RideId(1), "A", "B", 1.0);
        let premium = Ride::premium(RideId(2), "A", "B", 1.0, false);
        let shared = Ride::shared(RideId(3), "A", "B", 1.0, 2);

        assert_eq!(standard.rate_per_mile(), 2.5);
        assert_eq!(premium.rate_per_mile(), 4.0);
        assert_eq!(shared.rate_per_mile(), 1.5);
    }

    #[test]
    fn zero_distance_ride_still_charges_fixed_fees() {
        let standard = Ride::standard(RideId(1), "A", "A", 0.0);
        assert!((standard.fare() - 1.5).abs() < 1e-9);
    }
}
