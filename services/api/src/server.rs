use crate::cli::ServeArgs;
use crate::infra::{load_catalog, rating_engine, AppState};
use crate::routes::with_label_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use energy_label::config::AppConfig;
use energy_label::error::AppError;
use energy_label::label::LabelService;
use energy_label::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(&config.catalog.dataset_path)?;
    let engine = rating_engine(config.catalog.co2_bands);
    let label_service = Arc::new(LabelService::new(catalog, engine));

    let app = with_label_routes(label_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "vehicle energy label service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
