//! Fare rules for the three ride variants and the money display rounding.

/// Per-mile rate for standard rides, in currency units (e.g., dollars).
pub const STANDARD_RATE_PER_MILE: f64 = 2.5;

/// Flat booking fee added to every standard ride.
pub const STANDARD_BOOKING_FEE: f64 = 1.5;

/// Per-mile rate for premium rides.
pub const PREMIUM_RATE_PER_MILE: f64 = 4.0;

/// Surcharge applied to every premium ride.
pub const PREMIUM_SURCHARGE: f64 = 5.0;

/// Extra charge when a premium ride is served by a luxury vehicle.
pub const LUXURY_VEHICLE_BONUS: f64 = 10.0;

/// Per-mile rate for shared rides, before the sharing discount.
pub const SHARED_RATE_PER_MILE: f64 = 1.5;

/// Multiplier applied to the metered shared fare (30% discount).
pub const SHARED_DISCOUNT_MULTIPLIER: f64 = 0.70;

/// Sharing discount as a whole percentage, for display.
pub const SHARED_DISCOUNT_PERCENT: u32 = 30;

/// Calculate the fare for a standard ride.
///
/// Formula: `fare = distance * STANDARD_RATE_PER_MILE + STANDARD_BOOKING_FEE`
pub fn standard_fare(distance_miles: f64) -> f64 {
    distance_miles * STANDARD_RATE_PER_MILE + STANDARD_BOOKING_FEE
}

/// Calculate the fare for a premium ride.
///
/// Formula: `fare = distance * PREMIUM_RATE_PER_MILE + PREMIUM_SURCHARGE`,
/// plus `LUXURY_VEHICLE_BONUS` when the ride uses a luxury vehicle.
pub fn premium_fare(distance_miles: f64, luxury_vehicle: bool) -> f64 {
    let bonus = if luxury_vehicle {
        LUXURY_VEHICLE_BONUS
    } else {
        0.0
    };
    distance_miles * PREMIUM_RATE_PER_MILE + PREMIUM_SURCHARGE + bonus
}

/// Calculate the fare for a shared ride.
///
/// Formula: `fare = distance * SHARED_RATE_PER_MILE * SHARED_DISCOUNT_MULTIPLIER`
///
/// The passenger count is reported but does not affect the fare.
pub fn shared_fare(distance_miles: f64) -> f64 {
    distance_miles * SHARED_RATE_PER_MILE * SHARED_DISCOUNT_MULTIPLIER
}

/// Round a monetary amount to whole cents, half away from zero.
///
/// The amount is rounded to tenths of a cent first so that amounts whose
/// decimal value sits exactly on a half cent (e.g. `7.035`, stored as a
/// slightly smaller f64) still round up to `7.04`.
pub fn round_to_cents(amount: f64) -> f64 {
    let tenths_of_cent = (amount * 1000.0).round();
    (tenths_of_cent / 10.0).round() / 100.0
}

/// Format a monetary amount as `$<value>` with exactly two fractional digits,
/// using the rounding rule of [`round_to_cents`].
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", round_to_cents(amount))
}
