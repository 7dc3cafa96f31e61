mod domain;
mod normalizer;
mod parser;
pub mod schema;
mod selection;

pub use domain::{SelectionPath, VehicleRecord};

use schema::Field;
use std::io::Read;
use std::path::Path;

/// Errors raised while loading a vehicle specification export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read vehicle dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vehicle dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("vehicle dataset is missing the {0} column")]
    MissingIdentityColumn(&'static str),
}

/// Immutable, in-memory table of vehicle records in source order. Loaded once
/// per process; every query borrows from it.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    records: Vec<VehicleRecord>,
}

impl VehicleCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let parsed = parser::parse_dataset(reader)?;

        for (field, label) in [
            (Field::Manufacturer, "manufacturer"),
            (Field::ModelRange, "model range"),
            (Field::Description, "description"),
        ] {
            if !parsed.recognized_fields.contains(&field) {
                return Err(CatalogImportError::MissingIdentityColumn(label));
            }
        }

        Ok(Self {
            records: parsed.records,
        })
    }

    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
