use super::export::{record_csv, ExportError};
use super::rating::{RatingEngine, RatingMode};
use super::tax::TaxBracket;
use super::views::LabelCard;
use crate::catalog::{SelectionPath, VehicleCatalog};
use std::sync::Arc;

/// Facade composing the loaded catalog with the configured rating engine.
/// Every method is a pure query over the shared immutable table; a miss is a
/// `None`, never an error.
pub struct LabelService {
    catalog: Arc<VehicleCatalog>,
    engine: RatingEngine,
}

impl LabelService {
    pub fn new(catalog: Arc<VehicleCatalog>, engine: RatingEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn manufacturers(&self) -> Vec<String> {
        self.catalog.manufacturers()
    }

    pub fn model_ranges(&self, manufacturer: &str) -> Vec<String> {
        self.catalog.model_ranges(manufacturer)
    }

    pub fn descriptions(&self, manufacturer: &str, model_range: &str) -> Vec<String> {
        self.catalog.descriptions(manufacturer, model_range)
    }

    pub fn card(
        &self,
        path: &SelectionPath,
        mode: RatingMode,
        bracket: Option<TaxBracket>,
    ) -> Option<LabelCard> {
        self.catalog
            .resolve(path)
            .map(|record| LabelCard::build(record, &self.engine, mode, bracket))
    }

    pub fn export_csv(&self, path: &SelectionPath) -> Result<Option<String>, ExportError> {
        self.catalog
            .resolve(path)
            .map(record_csv)
            .transpose()
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }
}
