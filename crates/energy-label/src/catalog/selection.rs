use super::domain::{SelectionPath, VehicleRecord};
use super::VehicleCatalog;
use std::collections::BTreeSet;

/// Cascading selection queries. Each level narrows by exact string equality
/// on the levels above it; blank cells are never offered as candidates. An
/// empty candidate list and a failed resolve are both ordinary, displayable
/// states.
impl VehicleCatalog {
    pub fn manufacturers(&self) -> Vec<String> {
        distinct_sorted(self.records().iter().filter_map(|r| r.manufacturer.as_deref()))
    }

    pub fn model_ranges(&self, manufacturer: &str) -> Vec<String> {
        distinct_sorted(
            self.records()
                .iter()
                .filter(|r| r.manufacturer.as_deref() == Some(manufacturer))
                .filter_map(|r| r.model_range.as_deref()),
        )
    }

    pub fn descriptions(&self, manufacturer: &str, model_range: &str) -> Vec<String> {
        distinct_sorted(
            self.records()
                .iter()
                .filter(|r| {
                    r.manufacturer.as_deref() == Some(manufacturer)
                        && r.model_range.as_deref() == Some(model_range)
                })
                .filter_map(|r| r.description.as_deref()),
        )
    }

    /// First record matching the full selection in source order, if any.
    pub fn resolve(&self, path: &SelectionPath) -> Option<&VehicleRecord> {
        self.records().iter().find(|record| path.matches(record))
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
