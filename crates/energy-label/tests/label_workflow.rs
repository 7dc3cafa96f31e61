//! Integration specifications for the label card workflow and HTTP router.
//!
//! Scenarios drive the public service facade and the axum router end to end
//! so rating policy selection, tax withholding, and export behavior are
//! validated without reaching into private modules.

mod common {
    use std::io::Cursor;
    use std::sync::Arc;

    use energy_label::catalog::VehicleCatalog;
    use energy_label::label::rating::{Co2BandTable, RatingEngine};
    use energy_label::label::LabelService;

    pub(super) const DATASET: &str = "\
Manufacturer,Model Range,Description,CO2 g/KM,WLTP MPG (Comb),WLTP Electric Range (miles),Power (bhp),NCAP Rating,Net Basic Price,TCO,P11D Basic,BIK% Year 1
BMW,3 Series,320i M Sport,148,44.1,,184,5 stars,\"£36,450\",34000,37425,30
BMW,3 Series,330e M Sport,32,217.3,,292,5 stars,\"£45,000\",38000,45500,8
Tesla,Model 3,Long Range AWD,0,,390,434,5 stars,\"£49,990\",30000,49990,2
Vauxhall,Astra,Design 1.2,124,51.4,,110,4 stars,\"£26,795\",28000,27420,N/A
";

    pub(super) fn catalog() -> Arc<VehicleCatalog> {
        Arc::new(VehicleCatalog::from_reader(Cursor::new(DATASET)).expect("dataset loads"))
    }

    pub(super) fn build_service() -> Arc<LabelService> {
        Arc::new(LabelService::new(
            catalog(),
            RatingEngine::new(Co2BandTable::six_band()),
        ))
    }

    pub(super) fn build_five_band_service() -> Arc<LabelService> {
        Arc::new(LabelService::new(
            catalog(),
            RatingEngine::new(Co2BandTable::five_band()),
        ))
    }
}

mod cards {
    use super::common::*;
    use energy_label::catalog::SelectionPath;
    use energy_label::label::rating::{EfficiencyBand, RatingMode};
    use energy_label::label::tax::{TaxBracket, TaxLiability};
    use energy_label::label::views::RatingView;

    #[test]
    fn composite_card_scores_all_three_dimensions() {
        let service = build_service();
        let card = service
            .card(
                &SelectionPath::new("Tesla", "Model 3", "Long Range AWD"),
                RatingMode::Composite,
                None,
            )
            .expect("card resolves");

        assert_eq!(card.title, "Tesla Model 3");
        match card.rating {
            RatingView::Composite(assessment) => {
                assert_eq!(assessment.co2_score, 100.0);
                assert_eq!(assessment.range_score, 97.5);
                assert_eq!(assessment.cost_score, 70.0);
                assert!((assessment.overall_score - 89.1667).abs() < 0.001);
                assert_eq!(assessment.band, EfficiencyBand::A);
            }
            RatingView::DirectCo2(_) => panic!("expected composite rating"),
        }
        assert_eq!(card.metrics.mpg_or_range, "390 mi (electric)");
    }

    #[test]
    fn direct_mode_grades_off_co2_alone() {
        let service = build_service();
        let card = service
            .card(
                &SelectionPath::new("BMW", "3 Series", "320i M Sport"),
                RatingMode::DirectCo2,
                None,
            )
            .expect("card resolves");

        match card.rating {
            RatingView::DirectCo2(rating) => {
                assert_eq!(rating.band, EfficiencyBand::D);
                assert_eq!(rating.gauge, 40);
                assert_eq!(rating.colour, "orange");
            }
            RatingView::Composite(_) => panic!("expected direct co2 rating"),
        }
    }

    #[test]
    fn mpg_above_100_saturates_the_range_dimension() {
        let service = build_service();
        let card = service
            .card(
                &SelectionPath::new("BMW", "3 Series", "330e M Sport"),
                RatingMode::Composite,
                None,
            )
            .expect("card resolves");

        match card.rating {
            RatingView::Composite(assessment) => {
                assert_eq!(assessment.range_score, 100.0);
                assert_eq!(assessment.co2_score, 84.0);
                assert_eq!(assessment.cost_score, 62.0);
                assert_eq!(assessment.band, EfficiencyBand::A);
            }
            RatingView::DirectCo2(_) => panic!("expected composite rating"),
        }
    }

    #[test]
    fn band_legend_follows_the_configured_scale() {
        let six = build_service()
            .card(
                &SelectionPath::new("Vauxhall", "Astra", "Design 1.2"),
                RatingMode::DirectCo2,
                None,
            )
            .expect("card resolves");
        assert_eq!(six.band_legend.len(), 6);

        let five = build_five_band_service()
            .card(
                &SelectionPath::new("Vauxhall", "Astra", "Design 1.2"),
                RatingMode::DirectCo2,
                None,
            )
            .expect("card resolves");
        assert_eq!(five.band_legend.len(), 5);
    }

    #[test]
    fn tax_is_attached_when_a_bracket_is_chosen() {
        let service = build_service();
        let card = service
            .card(
                &SelectionPath::new("BMW", "3 Series", "320i M Sport"),
                RatingMode::Composite,
                Some(TaxBracket::Standard),
            )
            .expect("card resolves");

        match card.tax {
            Some(TaxLiability::Assessed {
                annual, monthly, ..
            }) => {
                assert!((annual - 2245.5).abs() < 1e-9);
                assert!((monthly - 187.125).abs() < 1e-9);
            }
            other => panic!("expected assessed liability, got {other:?}"),
        }
    }

    #[test]
    fn tax_is_withheld_when_bik_percent_is_unparseable() {
        let service = build_service();
        let card = service
            .card(
                &SelectionPath::new("Vauxhall", "Astra", "Design 1.2"),
                RatingMode::Composite,
                Some(TaxBracket::Higher),
            )
            .expect("card resolves");

        assert_eq!(card.tax, Some(TaxLiability::Unavailable));
    }

    #[test]
    fn unresolved_selection_yields_no_card() {
        let service = build_service();
        assert!(service
            .card(
                &SelectionPath::new("BMW", "3 Series", "M340i xDrive"),
                RatingMode::Composite,
                None,
            )
            .is_none());
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use energy_label::label::label_router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn manufacturers_endpoint_lists_the_cascade_roots() {
        let router = label_router(build_service());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/catalog/manufacturers")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            payload.get("manufacturers"),
            Some(&json!(["BMW", "Tesla", "Vauxhall"]))
        );
    }

    #[tokio::test]
    async fn models_endpoint_filters_by_manufacturer() {
        let router = label_router(build_service());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/catalog/models?manufacturer=BMW")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("model_ranges"), Some(&json!(["3 Series"])));
    }

    #[tokio::test]
    async fn label_endpoint_returns_a_card_with_tax() {
        let router = label_router(build_service());
        let request_body = json!({
            "manufacturer": "Tesla",
            "model_range": "Model 3",
            "description": "Long Range AWD",
            "mode": "direct_co2",
            "tax_bracket": "higher",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/label")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("status"), Some(&json!("ok")));

        let card = payload.get("card").expect("card present");
        assert_eq!(
            card.pointer("/rating/mode"),
            Some(&json!("direct_co2"))
        );
        assert_eq!(card.pointer("/rating/band"), Some(&json!("A")));
        assert_eq!(card.pointer("/rating/gauge"), Some(&json!(100)));
        let annual = card
            .pointer("/tax/annual")
            .and_then(Value::as_f64)
            .expect("annual liability");
        assert!((annual - 399.92).abs() < 1e-9);
    }

    #[tokio::test]
    async fn label_endpoint_reports_not_found_as_a_displayable_state() {
        let router = label_router(build_service());
        let request_body = json!({
            "manufacturer": "BMW",
            "model_range": "3 Series",
            "description": "M340i xDrive",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/label")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("status"), Some(&json!("not_found")));
        assert_eq!(
            payload.pointer("/selection/description"),
            Some(&json!("M340i xDrive"))
        );
    }

    #[tokio::test]
    async fn export_endpoint_streams_a_csv_attachment() {
        let router = label_router(build_service());
        let request_body = json!({
            "manufacturer": "BMW",
            "model_range": "3 Series",
            "description": "320i M Sport",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/label/export")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/csv")
        );

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let text = String::from_utf8(body.to_vec()).expect("utf-8 csv");
        assert!(text.starts_with("Manufacturer,Model Range,Description"));
        assert!(text.contains("BMW,3 Series,320i M Sport,148"));
    }

    #[tokio::test]
    async fn export_endpoint_404s_on_an_unmatched_selection() {
        let router = label_router(build_service());
        let request_body = json!({
            "manufacturer": "BMW",
            "model_range": "3 Series",
            "description": "M340i xDrive",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/label/export")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
