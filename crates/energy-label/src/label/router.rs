use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::rating::RatingMode;
use super::service::LabelService;
use super::tax::TaxBracket;
use super::views::LabelCard;
use crate::catalog::SelectionPath;

/// Router builder exposing the cascading selection and label endpoints.
pub fn label_router(service: Arc<LabelService>) -> Router {
    Router::new()
        .route("/api/v1/catalog/manufacturers", get(manufacturers_handler))
        .route("/api/v1/catalog/models", get(models_handler))
        .route("/api/v1/catalog/descriptions", get(descriptions_handler))
        .route("/api/v1/label", post(label_handler))
        .route("/api/v1/label/export", post(export_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelQuery {
    manufacturer: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DescriptionQuery {
    manufacturer: String,
    model_range: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelRequest {
    manufacturer: String,
    model_range: String,
    description: String,
    #[serde(default)]
    mode: RatingMode,
    #[serde(default)]
    tax_bracket: Option<TaxBracket>,
}

impl LabelRequest {
    fn path(&self) -> SelectionPath {
        SelectionPath::new(
            self.manufacturer.clone(),
            self.model_range.clone(),
            self.description.clone(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportRequest {
    manufacturer: String,
    model_range: String,
    description: String,
}

/// A missing record is a displayable state for the caller's UI, so both arms
/// answer 200.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum LabelResponse {
    Ok { card: LabelCard },
    NotFound { selection: SelectionPath },
}

pub(crate) async fn manufacturers_handler(
    State(service): State<Arc<LabelService>>,
) -> Response {
    let payload = json!({ "manufacturers": service.manufacturers() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn models_handler(
    State(service): State<Arc<LabelService>>,
    Query(query): Query<ModelQuery>,
) -> Response {
    let payload = json!({ "model_ranges": service.model_ranges(&query.manufacturer) });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn descriptions_handler(
    State(service): State<Arc<LabelService>>,
    Query(query): Query<DescriptionQuery>,
) -> Response {
    let payload = json!({
        "descriptions": service.descriptions(&query.manufacturer, &query.model_range),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn label_handler(
    State(service): State<Arc<LabelService>>,
    axum::Json(request): axum::Json<LabelRequest>,
) -> Response {
    let path = request.path();
    let body = match service.card(&path, request.mode, request.tax_bracket) {
        Some(card) => LabelResponse::Ok { card },
        None => LabelResponse::NotFound { selection: path },
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn export_handler(
    State(service): State<Arc<LabelService>>,
    axum::Json(request): axum::Json<ExportRequest>,
) -> Response {
    let path = SelectionPath::new(
        request.manufacturer,
        request.model_range,
        request.description,
    );
    match service.export_csv(&path) {
        Ok(Some(csv)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"vehicle_energy_label.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Ok(None) => {
            let payload = json!({ "error": "no vehicle matches the selection" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
