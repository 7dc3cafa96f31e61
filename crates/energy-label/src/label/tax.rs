use crate::catalog::VehicleRecord;
use serde::{Deserialize, Serialize};

/// UK marginal income tax brackets used for the benefit-in-kind calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBracket {
    Standard,
    Higher,
    Additional,
}

impl TaxBracket {
    pub const fn rate(self) -> f64 {
        match self {
            TaxBracket::Standard => 0.20,
            TaxBracket::Higher => 0.40,
            TaxBracket::Additional => 0.45,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TaxBracket::Standard => "Standard (20%)",
            TaxBracket::Higher => "Higher (40%)",
            TaxBracket::Additional => "Additional (45%)",
        }
    }
}

/// Annual and monthly company-car tax liability. Unlike the rating engine,
/// missing inputs here yield an explicit Unavailable marker rather than a
/// neutral default: a fabricated tax figure is worse than no figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaxLiability {
    Assessed {
        annual: f64,
        monthly: f64,
        bracket: TaxBracket,
        bracket_label: &'static str,
    },
    Unavailable,
}

impl TaxLiability {
    /// liability = taxable value x BiK percent x marginal rate.
    pub fn calculate(
        taxable_value: Option<f64>,
        bik_percent: Option<f64>,
        bracket: TaxBracket,
    ) -> Self {
        let (Some(taxable_value), Some(bik_percent)) = (taxable_value, bik_percent) else {
            return TaxLiability::Unavailable;
        };
        let annual = taxable_value * (bik_percent / 100.0) * bracket.rate();
        TaxLiability::Assessed {
            annual,
            monthly: annual / 12.0,
            bracket,
            bracket_label: bracket.label(),
        }
    }

    pub fn for_record(record: &VehicleRecord, bracket: TaxBracket) -> Self {
        Self::calculate(record.p11d_value, record.bik_percent, bracket)
    }
}
