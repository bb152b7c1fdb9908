//! Run summary extraction from a built scenario.

use ride_core::scenario::Scenario;

/// Per-party totals: a driver's earnings or a rider's spend.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartyTotal {
    pub id: u32,
    pub name: String,
    /// Number of rides in the party's list (duplicates counted).
    pub rides: usize,
    /// Monetary total at full f64 precision; rounding is a display concern.
    pub amount: f64,
}

/// Aggregated figures from a single demonstration run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    pub total_rides: usize,
    pub total_drivers: usize,
    pub total_riders: usize,
    /// Sum of fares over every ride in the registry.
    pub total_revenue: f64,
    pub driver_earnings: Vec<PartyTotal>,
    pub rider_spend: Vec<PartyTotal>,
}

impl RunSummary {
    /// Extract the summary from a built scenario.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let driver_earnings = scenario
            .drivers
            .iter()
            .map(|d| PartyTotal {
                id: d.id(),
                name: d.name().to_string(),
                rides: d.ride_count(),
                amount: d.total_earnings(&scenario.registry),
            })
            .collect();
        let rider_spend = scenario
            .riders
            .iter()
            .map(|r| PartyTotal {
                id: r.id(),
                name: r.name().to_string(),
                rides: r.ride_count(),
                amount: r.total_spent(&scenario.registry),
            })
            .collect();

        Self {
            total_rides: scenario.registry.len(),
            total_drivers: scenario.drivers.len(),
            total_riders: scenario.riders.len(),
            total_revenue: scenario.registry.total_revenue(),
            driver_earnings,
            rider_spend,
        }
    }
}
