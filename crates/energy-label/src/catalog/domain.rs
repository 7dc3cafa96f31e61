use serde::{Deserialize, Serialize};

/// One row of the vehicle specification dataset. Identity cells can be blank
/// in raw exports, so all three are optional here; the selection resolver
/// never offers a blank value as a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub manufacturer: Option<String>,
    pub model_range: Option<String>,
    pub description: Option<String>,
    /// CO2 output in g/km.
    pub co2_gkm: Option<f64>,
    /// WLTP combined fuel economy in MPG.
    pub combined_mpg: Option<f64>,
    /// WLTP electric range in miles.
    pub electric_range_miles: Option<f64>,
    /// Aggregate total cost of ownership in currency units.
    pub total_cost_of_ownership: Option<f64>,
    /// P11D taxable value used as the benefit-in-kind base.
    pub p11d_value: Option<f64>,
    /// Benefit-in-kind percentage for the current tax year.
    pub bik_percent: Option<f64>,
    // Display-only cells, carried through exactly as the source formats them.
    pub net_basic_price: Option<String>,
    pub power_bhp: Option<String>,
    pub luggage_capacity: Option<String>,
    pub ncap_rating: Option<String>,
    pub zero_to_sixty_two: Option<String>,
    pub kwh_per_100km: Option<String>,
}

/// A fully specified user selection: manufacturer, model range, description.
/// Matching against the catalog is exact string equality on all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPath {
    pub manufacturer: String,
    pub model_range: String,
    pub description: String,
}

impl SelectionPath {
    pub fn new(
        manufacturer: impl Into<String>,
        model_range: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model_range: model_range.into(),
            description: description.into(),
        }
    }

    pub(crate) fn matches(&self, record: &VehicleRecord) -> bool {
        record.manufacturer.as_deref() == Some(self.manufacturer.as_str())
            && record.model_range.as_deref() == Some(self.model_range.as_str())
            && record.description.as_deref() == Some(self.description.as_str())
    }
}
