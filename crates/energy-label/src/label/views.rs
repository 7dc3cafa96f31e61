use super::rating::{BandLegendEntry, Co2BandRating, EfficiencyAssessment, RatingEngine, RatingMode};
use super::tax::{TaxBracket, TaxLiability};
use crate::catalog::VehicleRecord;
use serde::Serialize;

/// The rating portion of a label card, tagged by the policy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RatingView {
    DirectCo2(Co2BandRating),
    Composite(EfficiencyAssessment),
}

/// Metric tiles of the label card. Values are preformatted display strings
/// with `N/A` standing in for anything the dataset left blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelMetrics {
    pub co2: String,
    /// Combined MPG when present, otherwise electric range, otherwise `N/A`.
    pub mpg_or_range: String,
    pub power: String,
    pub luggage: String,
    pub ncap: String,
    pub zero_to_sixty_two: String,
    pub net_basic_price: String,
}

/// A rendered energy label card for one resolved vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCard {
    /// Manufacturer and model range, e.g. "BMW 3 Series".
    pub title: String,
    pub subtitle: String,
    pub rating: RatingView,
    pub band_legend: Vec<BandLegendEntry>,
    pub metrics: LabelMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxLiability>,
}

impl LabelCard {
    pub fn build(
        record: &VehicleRecord,
        engine: &RatingEngine,
        mode: RatingMode,
        bracket: Option<TaxBracket>,
    ) -> Self {
        let rating = match mode {
            RatingMode::DirectCo2 => RatingView::DirectCo2(engine.rate_co2(record)),
            RatingMode::Composite => RatingView::Composite(engine.assess(record)),
        };

        let title = match (record.manufacturer.as_deref(), record.model_range.as_deref()) {
            (Some(make), Some(model)) => format!("{make} {model}"),
            (Some(make), None) => make.to_string(),
            (None, Some(model)) => model.to_string(),
            (None, None) => String::new(),
        };

        Self {
            title,
            subtitle: record.description.clone().unwrap_or_default(),
            rating,
            band_legend: engine.co2_bands().legend(),
            metrics: LabelMetrics::from_record(record),
            tax: bracket.map(|bracket| TaxLiability::for_record(record, bracket)),
        }
    }
}

impl LabelMetrics {
    fn from_record(record: &VehicleRecord) -> Self {
        Self {
            co2: record
                .co2_gkm
                .map(|co2| format!("{co2} g/km"))
                .unwrap_or_else(not_available),
            mpg_or_range: mpg_or_range(record),
            power: suffixed(&record.power_bhp, " bhp"),
            luggage: suffixed(&record.luggage_capacity, " L"),
            ncap: record.ncap_rating.clone().unwrap_or_else(not_available),
            zero_to_sixty_two: suffixed(&record.zero_to_sixty_two, " sec"),
            net_basic_price: record
                .net_basic_price
                .clone()
                .unwrap_or_else(not_available),
        }
    }
}

fn mpg_or_range(record: &VehicleRecord) -> String {
    if let Some(mpg) = record.combined_mpg {
        return format!("{mpg} mpg");
    }
    if let Some(miles) = record.electric_range_miles {
        return format!("{miles} mi (electric)");
    }
    not_available()
}

fn suffixed(value: &Option<String>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{value}{suffix}"),
        None => not_available(),
    }
}

fn not_available() -> String {
    "N/A".to_string()
}
