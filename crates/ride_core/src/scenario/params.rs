use serde::{Deserialize, Serialize};

use crate::rides::RideClass;

/// A rider taking part in the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderSpec {
    pub id: u32,
    pub name: String,
}

/// A driver taking part in the run. Rating is expected in `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSpec {
    pub id: u32,
    pub name: String,
    pub rating: f64,
}

/// A ride to create, including its pricing variant and variant extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSpec {
    pub id: u32,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub class: RideClass,
}

/// Full description of a demonstration run.
///
/// `requests` pairs `(rider_id, ride_id)` and `assignments` pairs
/// `(driver_id, ride_id)`, both in program order; the presenter replays them
/// in that order when announcing. A ride may appear in at most one rider's
/// and one driver's pairs (collaborator precondition, not enforced here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub riders: Vec<RiderSpec>,
    pub drivers: Vec<DriverSpec>,
    pub rides: Vec<RideSpec>,
    pub requests: Vec<(u32, u32)>,
    pub assignments: Vec<(u32, u32)>,
}

impl ScenarioParams {
    /// Parse a scenario from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ScenarioParams {
    /// The canonical demonstration fixture: two riders, two drivers, five
    /// rides covering all three variants.
    fn default() -> Self {
        Self {
            riders: vec![
                RiderSpec {
                    id: 1001,
                    name: "Alice Johnson".to_string(),
                },
                RiderSpec {
                    id: 1002,
                    name: "Bob Smith".to_string(),
                },
            ],
            drivers: vec![
                DriverSpec {
                    id: 2001,
                    name: "John Doe".to_string(),
                    rating: 4.8,
                },
                DriverSpec {
                    id: 2002,
                    name: "Jane Williams".to_string(),
                    rating: 4.9,
                },
            ],
            rides: vec![
                RideSpec {
                    id: 3001,
                    pickup: "Downtown".to_string(),
                    dropoff: "Airport".to_string(),
                    distance_miles: 15.5,
                    class: RideClass::Standard,
                },
                RideSpec {
                    id: 3002,
                    pickup: "Hotel".to_string(),
                    dropoff: "Conference Center".to_string(),
                    distance_miles: 8.3,
                    class: RideClass::Premium {
                        luxury_vehicle: true,
                    },
                },
                RideSpec {
                    id: 3003,
                    pickup: "University".to_string(),
                    dropoff: "Mall".to_string(),
                    distance_miles: 6.7,
                    class: RideClass::Shared { passengers: 3 },
                },
                RideSpec {
                    id: 3004,
                    pickup: "Home".to_string(),
                    dropoff: "Office".to_string(),
                    distance_miles: 12.0,
                    class: RideClass::Standard,
                },
                RideSpec {
                    id: 3005,
                    pickup: "Restaurant".to_string(),
                    dropoff: "Theater".to_string(),
                    distance_miles: 4.5,
                    class: RideClass::Premium {
                        luxury_vehicle: false,
                    },
                },
            ],
            requests: vec![
                (1001, 3001),
                (1001, 3002),
                (1002, 3003),
                (1002, 3004),
                (1001, 3005),
            ],
            assignments: vec![
                (2001, 3001),
                (2001, 3003),
                (2002, 3002),
                (2002, 3004),
                (2002, 3005),
            ],
        }
    }
}
