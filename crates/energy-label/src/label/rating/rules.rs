use crate::catalog::VehicleRecord;

/// Score substituted for any dimension whose input is missing, keeping the
/// overall average defined over exactly three dimensions.
pub(crate) const NEUTRAL_SCORE: f64 = 50.0;

/// CO2 value substituted when the cell is missing in direct banding mode,
/// forcing the bottom band.
pub(crate) const MISSING_CO2: f64 = 999.0;

pub(crate) fn co2_score(record: &VehicleRecord) -> f64 {
    match record.co2_gkm {
        Some(co2) => (100.0 - co2 / 2.0).clamp(0.0, 100.0),
        None => NEUTRAL_SCORE,
    }
}

/// Range dimension, in priority order: combined MPG, then electric range,
/// then the neutral midpoint. Raw MPG is clamped to [0, 100], not rescaled,
/// so values above 100 MPG saturate.
pub(crate) fn range_score(record: &VehicleRecord) -> f64 {
    if let Some(mpg) = record.combined_mpg {
        return mpg.clamp(0.0, 100.0);
    }
    if let Some(miles) = record.electric_range_miles {
        return (miles / 4.0).clamp(0.0, 100.0);
    }
    NEUTRAL_SCORE
}

pub(crate) fn cost_score(record: &VehicleRecord) -> f64 {
    match record.total_cost_of_ownership {
        Some(tco) => (100.0 - tco / 1000.0).clamp(0.0, 100.0),
        None => NEUTRAL_SCORE,
    }
}
