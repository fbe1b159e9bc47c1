//! Allometric carbon estimation for a single tree.
//!
//! Uses the simplified diameter-squared-height biomass equation and the IPCC
//! default carbon fraction of dry biomass. The functions here are total over
//! all real inputs: zero or negative dimensions produce zero or negative
//! mass, never an error. Range checks, if any, belong to the caller.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Coefficient of the `b * dbh^2 * h` biomass equation (kg per cm^2 * m).
pub const BIOMASS_COEFFICIENT: f64 = 0.1;

/// IPCC default carbon fraction of dry biomass.
pub const CARBON_FRACTION: f64 = 0.47;

/// Number of decimal places used for persisted and reported masses.
pub const REPORT_DECIMALS: usize = 2;

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimated dry biomass in kilograms, unrounded.
pub fn estimate_biomass(dbh_cm: f64, height_m: f64) -> f64 {
    BIOMASS_COEFFICIENT * dbh_cm.powi(2) * height_m
}

/// Carbon mass contained in `biomass_kg` of dry biomass, unrounded.
pub fn carbon_from_biomass(biomass_kg: f64) -> f64 {
    biomass_kg * CARBON_FRACTION
}

/// Estimated carbon mass in kilograms for one tree, unrounded.
///
/// Callers that aggregate many trees must sum these full-precision values
/// and round only the final total (see [`round_kg`]).
pub fn estimate_carbon(dbh_cm: f64, height_m: f64) -> f64 {
    carbon_from_biomass(estimate_biomass(dbh_cm, height_m))
}

/// Round a mass to [`REPORT_DECIMALS`] places.
///
/// Rounds the exact binary value, so `2.675` (stored just below the tie)
/// becomes `2.67`, and exact ties such as `0.125` go to the even digit
/// (`0.12`). Finite inputs of any magnitude stay finite. Non-finite inputs
/// are returned unchanged and serialise as JSON `null`.
pub fn round_kg(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded: f64 = format!("{value:.prec$}", prec = REPORT_DECIMALS)
        .parse()
        .unwrap_or(value);
    // Normalise -0.0 so degenerate inputs serialise as 0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The carbon value stored on a measurement at creation time.
pub fn stored_carbon_kg(dbh_cm: f64, height_m: f64) -> f64 {
    round_kg(estimate_carbon(dbh_cm, height_m))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
