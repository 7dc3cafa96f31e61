use energy_label::catalog::VehicleCatalog;
use energy_label::error::AppError;
use energy_label::label::rating::{Co2BandScale, Co2BandTable, RatingEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(path: &Path) -> Result<Arc<VehicleCatalog>, AppError> {
    let catalog = VehicleCatalog::from_path(path)?;
    info!(records = catalog.len(), dataset = %path.display(), "vehicle catalog loaded");
    Ok(Arc::new(catalog))
}

pub(crate) fn rating_engine(scale: Co2BandScale) -> RatingEngine {
    RatingEngine::new(Co2BandTable::for_scale(scale))
}
