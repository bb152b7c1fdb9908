//! Textual report rendering.
//!
//! Every line the demonstration prints is produced here as a `String`, so
//! tests can assert exact text independently of the fare computation. The
//! binary writes [`render_full_report`] to stdout unchanged.

use ride_core::agents::{Driver, Rider};
use ride_core::pricing::{format_usd, SHARED_DISCOUNT_PERCENT};
use ride_core::registry::RideRegistry;
use ride_core::rides::{Ride, RideClass, RideId};
use ride_core::scenario::Scenario;

/// Width of the `=` banner lines.
const BANNER_WIDTH: usize = 40;

fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// A three-line banner: rule, centered title, rule.
pub fn banner(title: &str) -> String {
    let centered = format!("{title:^BANNER_WIDTH$}");
    format!(
        "{}\n{}\n{}",
        banner_rule(),
        centered.trim_end(),
        banner_rule()
    )
}

/// `<Rider name> requested a <RideType> ride from <pickup> to <dropoff>`
pub fn request_line(rider: &Rider, ride: &Ride) -> String {
    format!(
        "{} requested a {} ride from {} to {}",
        rider.name(),
        ride.ride_type(),
        ride.pickup(),
        ride.dropoff()
    )
}

/// `Ride #<id> assigned to <Driver name>`
pub fn assignment_line(ride: RideId, driver: &Driver) -> String {
    format!("Ride #{} assigned to {}", ride, driver.name())
}

fn variant_header(ride: &Ride) -> &'static str {
    match ride.class() {
        RideClass::Standard => "--- STANDARD RIDE ---",
        RideClass::Premium { .. } => "--- PREMIUM RIDE ---",
        RideClass::Shared { .. } => "--- SHARED RIDE ---",
    }
}

/// The per-ride detail block: variant header, id, locations, distance and
/// fare, plus the variant extras (luxury flag, passenger count and discount).
pub fn ride_details(ride: &Ride) -> String {
    let mut lines = vec![
        variant_header(ride).to_string(),
        format!("Ride ID: {}", ride.id()),
        format!("Pickup: {}", ride.pickup()),
        format!("Dropoff: {}", ride.dropoff()),
        format!("Distance: {} miles", ride.distance_miles()),
        format!("Fare: {}", format_usd(ride.fare())),
    ];
    match ride.class() {
        RideClass::Standard => {}
        RideClass::Premium { luxury_vehicle } => {
            let answer = if luxury_vehicle { "Yes" } else { "No" };
            lines.push(format!("Luxury Vehicle: {answer}"));
        }
        RideClass::Shared { passengers } => {
            lines.push(format!("Number of Passengers: {passengers}"));
            lines.push(format!("Discount Applied: {SHARED_DISCOUNT_PERCENT}%"));
        }
    }
    lines.join("\n")
}

/// `Ride #<id> (<type>): $<fare>`
pub fn fare_line(ride: &Ride) -> String {
    format!(
        "Ride #{} ({}): {}",
        ride.id(),
        ride.ride_type(),
        format_usd(ride.fare())
    )
}

/// One fare line per ride in registry order, then the revenue total.
pub fn fare_breakdown(registry: &RideRegistry) -> String {
    let mut lines: Vec<String> = registry.iter().map(fare_line).collect();
    lines.push(String::new());
    lines.push(format!(
        "Total System Revenue: {}",
        format_usd(registry.total_revenue())
    ));
    lines.join("\n")
}

fn party_ride_line(ride: &Ride) -> String {
    format!(
        "  - Ride #{} ({}): {}",
        ride.id(),
        ride.ride_type(),
        format_usd(ride.fare())
    )
}

/// The driver information block: id, name, rating, ride count, per-ride
/// summaries and total earnings. The ride section is omitted when the driver
/// has no rides.
pub fn driver_info(driver: &Driver, registry: &RideRegistry) -> String {
    let mut lines = vec![
        format!("{:=^BANNER_WIDTH$}", " DRIVER INFORMATION "),
        format!("Driver ID: {}", driver.id()),
        format!("Name: {}", driver.name()),
        format!("Rating: {} stars", driver.rating()),
        format!("Total Rides Completed: {}", driver.ride_count()),
    ];
    if !driver.assigned_rides().is_empty() {
        lines.push(String::new());
        lines.push("Completed Rides:".to_string());
        for id in driver.assigned_rides() {
            if let Some(ride) = registry.get(*id) {
                lines.push(party_ride_line(ride));
            }
        }
        lines.push(format!(
            "Total Earnings: {}",
            format_usd(driver.total_earnings(registry))
        ));
    }
    lines.push(banner_rule());
    lines.join("\n")
}

/// The rider information block, symmetric to [`driver_info`].
pub fn rider_info(rider: &Rider, registry: &RideRegistry) -> String {
    let mut lines = vec![
        format!("{:=^BANNER_WIDTH$}", " RIDER INFORMATION "),
        format!("Rider ID: {}", rider.id()),
        format!("Name: {}", rider.name()),
        format!("Total Rides Requested: {}", rider.ride_count()),
    ];
    if !rider.requested_rides().is_empty() {
        lines.push(String::new());
        lines.push("Ride History:".to_string());
        for id in rider.requested_rides() {
            if let Some(ride) = registry.get(*id) {
                lines.push(party_ride_line(ride));
            }
        }
        lines.push(format!(
            "Total Amount Spent: {}",
            format_usd(rider.total_spent(registry))
        ));
    }
    lines.push(banner_rule());
    lines.join("\n")
}

/// Render the complete run output in program order: opening banner, request
/// and assignment announcements, the all-rides pass, the fare-calculation
/// pass, the per-driver and per-rider blocks, and the closing banner.
pub fn render_full_report(scenario: &Scenario) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(banner("RIDE SHARING SYSTEM"));

    for (rider_idx, ride_id) in &scenario.requests {
        let rider = &scenario.riders[*rider_idx];
        if let Some(ride) = scenario.registry.get(*ride_id) {
            sections.push(request_line(rider, ride));
        }
    }

    for (driver_idx, ride_id) in &scenario.assignments {
        let driver = &scenario.drivers[*driver_idx];
        sections.push(assignment_line(*ride_id, driver));
    }

    sections.push(banner("ALL RIDES DETAILS"));
    for ride in scenario.registry.iter() {
        sections.push(ride_details(ride));
    }

    sections.push(banner("FARE CALCULATION"));
    sections.push(fare_breakdown(&scenario.registry));

    for driver in &scenario.drivers {
        sections.push(driver_info(driver, &scenario.registry));
    }
    for rider in &scenario.riders {
        sections.push(rider_info(rider, &scenario.registry));
    }

    sections.push(banner("SYSTEM DEMONSTRATION COMPLETED"));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_core::test_helpers::{demo_scenario, seed_registry};

    #[test]
    fn banner_centers_the_title() {
        let b = banner("FARE CALCULATION");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(40));
        assert_eq!(lines[1], "            FARE CALCULATION");
        assert_eq!(lines[2], "=".repeat(40));
    }

    #[test]
    fn request_line_matches_expected_format() {
        let scenario = demo_scenario();
        let alice = &scenario.riders[0];
        let ride = scenario.registry.get(RideId(3001)).unwrap();
        assert_eq!(
            request_line(alice, ride),
            "Alice Johnson requested a Standard ride from Downtown to Airport"
        );
    }

    #[test]
    fn assignment_line_matches_expected_format() {
        let scenario = demo_scenario();
        let john = &scenario.drivers[0];
        assert_eq!(
            assignment_line(RideId(3001), john),
            "Ride #3001 assigned to John Doe"
        );
    }

    #[test]
    fn premium_details_include_luxury_flag() {
        let registry = seed_registry();
        let ride = registry.get(RideId(3002)).unwrap();
        assert_eq!(
            ride_details(ride),
            "--- PREMIUM RIDE ---\n\
             Ride ID: 3002\n\
             Pickup: Hotel\n\
             Dropoff: Conference Center\n\
             Distance: 8.3 miles\n\
             Fare: $48.20\n\
             Luxury Vehicle: Yes"
        );
    }

    #[test]
    fn shared_details_include_passengers_and_discount() {
        let registry = seed_registry();
        let ride = registry.get(RideId(3003)).unwrap();
        assert_eq!(
            ride_details(ride),
            "--- SHARED RIDE ---\n\
             Ride ID: 3003\n\
             Pickup: University\n\
             Dropoff: Mall\n\
             Distance: 6.7 miles\n\
             Fare: $7.04\n\
             Number of Passengers: 3\n\
             Discount Applied: 30%"
        );
    }

    #[test]
    fn standard_details_render_whole_mile_distances_bare() {
        let registry = seed_registry();
        let ride = registry.get(RideId(3004)).unwrap();
        let details = ride_details(ride);
        assert!(details.contains("Distance: 12 miles"));
        assert!(details.ends_with("Fare: $31.50"));
    }

    #[test]
    fn fare_breakdown_totals_system_revenue() {
        let registry = seed_registry();
        let breakdown = fare_breakdown(&registry);
        assert!(breakdown.contains("Ride #3001 (Standard): $40.25"));
        assert!(breakdown.contains("Ride #3002 (Premium): $48.20"));
        assert!(breakdown.contains("Ride #3003 (Shared): $7.04"));
        assert!(breakdown.contains("Ride #3004 (Standard): $31.50"));
        assert!(breakdown.contains("Ride #3005 (Premium): $23.00"));
        assert!(breakdown.ends_with("Total System Revenue: $149.99"));
    }

    #[test]
    fn driver_block_lists_rides_and_earnings() {
        let scenario = demo_scenario();
        let block = driver_info(&scenario.drivers[0], &scenario.registry);
        assert!(block.starts_with("========== DRIVER INFORMATION =========="));
        assert!(block.contains("Driver ID: 2001"));
        assert!(block.contains("Name: John Doe"));
        assert!(block.contains("Rating: 4.8 stars"));
        assert!(block.contains("Total Rides Completed: 2"));
        assert!(block.contains("  - Ride #3001 (Standard): $40.25"));
        assert!(block.contains("  - Ride #3003 (Shared): $7.04"));
        assert!(block.contains("Total Earnings: $47.29"));
        assert!(block.ends_with(&"=".repeat(40)));
    }

    #[test]
    fn rider_block_lists_rides_and_spend() {
        let scenario = demo_scenario();
        let block = rider_info(&scenario.riders[0], &scenario.registry);
        assert!(block.contains("Rider ID: 1001"));
        assert!(block.contains("Total Rides Requested: 3"));
        assert!(block.contains("  - Ride #3002 (Premium): $48.20"));
        assert!(block.contains("Total Amount Spent: $111.45"));
    }

    #[test]
    fn idle_party_block_omits_ride_history() {
        let registry = seed_registry();
        let driver = ride_core::agents::Driver::new(2099, "Idle Driver", 5.0);
        let block = driver_info(&driver, &registry);
        assert!(block.contains("Total Rides Completed: 0"));
        assert!(!block.contains("Completed Rides:"));
        assert!(!block.contains("Total Earnings:"));
    }

    #[test]
    fn full_report_sections_appear_in_program_order() {
        let scenario = demo_scenario();
        let report = render_full_report(&scenario);

        assert!(report.starts_with(&banner("RIDE SHARING SYSTEM")));
        assert!(report.ends_with(&format!("{}\n", banner("SYSTEM DEMONSTRATION COMPLETED"))));

        let ordered = [
            "Alice Johnson requested a Standard ride from Downtown to Airport",
            "Alice Johnson requested a Premium ride from Hotel to Conference Center",
            "Bob Smith requested a Shared ride from University to Mall",
            "Bob Smith requested a Standard ride from Home to Office",
            "Alice Johnson requested a Premium ride from Restaurant to Theater",
            "Ride #3001 assigned to John Doe",
            "Ride #3003 assigned to John Doe",
            "Ride #3002 assigned to Jane Williams",
            "Ride #3004 assigned to Jane Williams",
            "Ride #3005 assigned to Jane Williams",
            "--- STANDARD RIDE ---",
            "--- PREMIUM RIDE ---",
            "--- SHARED RIDE ---",
            "Total System Revenue: $149.99",
            "Driver ID: 2001",
            "Driver ID: 2002",
            "Rider ID: 1001",
            "Rider ID: 1002",
        ];
        let mut cursor = 0;
        for needle in ordered {
            let at = report[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            cursor += at + needle.len();
        }

        assert_eq!(report.matches("--- STANDARD RIDE ---").count(), 2);
        assert_eq!(report.matches("--- PREMIUM RIDE ---").count(), 2);
        assert_eq!(report.matches("--- SHARED RIDE ---").count(), 1);
    }
}
