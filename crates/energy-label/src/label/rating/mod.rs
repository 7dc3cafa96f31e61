mod bands;
mod rules;

pub use bands::{
    BandLegendEntry, Co2BandScale, Co2BandStep, Co2BandTable, CompositeBandStep,
    CompositeBandTable, EfficiencyBand,
};

use crate::catalog::VehicleRecord;
use serde::{Deserialize, Serialize};

/// Which rating policy to apply. The two produce different results from the
/// same record and are kept as distinct, selectable modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingMode {
    /// Legacy grading straight off the CO2 figure.
    DirectCo2,
    /// Weighted average of CO2, range, and cost dimensions.
    #[default]
    Composite,
}

/// Stateless engine applying the configured band tables to a record.
pub struct RatingEngine {
    co2_bands: Co2BandTable,
    composite_bands: CompositeBandTable,
}

impl RatingEngine {
    pub fn new(co2_bands: Co2BandTable) -> Self {
        Self {
            co2_bands,
            composite_bands: CompositeBandTable::standard(),
        }
    }

    pub fn with_tables(co2_bands: Co2BandTable, composite_bands: CompositeBandTable) -> Self {
        Self {
            co2_bands,
            composite_bands,
        }
    }

    /// Grade a record straight off its CO2 output. A missing or unparseable
    /// figure counts as 999 g/km and lands in the bottom band.
    pub fn rate_co2(&self, record: &VehicleRecord) -> Co2BandRating {
        let co2 = record.co2_gkm.unwrap_or(rules::MISSING_CO2);
        let step = self.co2_bands.classify(co2);
        Co2BandRating {
            band: step.band,
            band_label: step.band.label(),
            colour: step.colour,
            gauge: step.gauge,
        }
    }

    /// Score all three dimensions, average them, and band the result. Missing
    /// inputs degrade to each dimension's neutral default, so the average is
    /// always over exactly three dimensions.
    pub fn assess(&self, record: &VehicleRecord) -> EfficiencyAssessment {
        let co2_score = rules::co2_score(record);
        let range_score = rules::range_score(record);
        let cost_score = rules::cost_score(record);
        let overall_score = (co2_score + range_score + cost_score) / 3.0;
        let step = self.composite_bands.classify(overall_score);

        EfficiencyAssessment {
            co2_score,
            range_score,
            cost_score,
            overall_score,
            band: step.band,
            band_label: step.band.label(),
            band_colour: step.colour,
        }
    }

    pub fn co2_bands(&self) -> &Co2BandTable {
        &self.co2_bands
    }
}

/// Direct-CO2 grading output for the legacy gauge display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2BandRating {
    pub band: EfficiencyBand,
    pub band_label: &'static str,
    pub colour: &'static str,
    pub gauge: u8,
}

/// Composite scoring output: one normalized score per dimension plus the
/// overall grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyAssessment {
    pub co2_score: f64,
    pub range_score: f64,
    pub cost_score: f64,
    pub overall_score: f64,
    pub band: EfficiencyBand,
    pub band_label: &'static str,
    pub band_colour: &'static str,
}
