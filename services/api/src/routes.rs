use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use turnover_loss::config::{CalculatorConfig, InputBounds};
use turnover_loss::error::AppError;
use turnover_loss::i18n::Language;
use turnover_loss::revenue::report::views::RevenueLossSummary;
use turnover_loss::revenue::{RevenueLossInputs, RevenueLossReport, RevenueLossResult};

#[derive(Debug, Deserialize)]
pub(crate) struct RevenueLossRequest {
    pub(crate) inputs: RevenueLossInputs,
    #[serde(default)]
    pub(crate) language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RevenueLossResponse {
    pub(crate) result: RevenueLossResult,
    pub(crate) summary: RevenueLossSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) outside_control_ranges: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CalculatorDefaultsResponse {
    pub(crate) language: Language,
    pub(crate) currency_symbol: String,
    pub(crate) bounds: InputBounds,
    pub(crate) default_inputs: RevenueLossInputs,
}

/// Router builder exposing the calculator endpoints.
pub(crate) fn calculator_router(config: Arc<CalculatorConfig>) -> Router {
    Router::new()
        .route("/api/v1/revenue-loss", post(revenue_loss_endpoint))
        .route("/api/v1/revenue-loss/defaults", get(defaults_endpoint))
        .with_state(config)
}

pub(crate) fn with_service_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn defaults_endpoint(
    State(config): State<Arc<CalculatorConfig>>,
) -> Json<CalculatorDefaultsResponse> {
    Json(CalculatorDefaultsResponse {
        language: config.language,
        currency_symbol: config.currency_symbol.clone(),
        bounds: config.bounds.clone(),
        default_inputs: config.bounds.default_inputs(),
    })
}

pub(crate) async fn revenue_loss_endpoint(
    State(config): State<Arc<CalculatorConfig>>,
    payload: Result<Json<RevenueLossRequest>, JsonRejection>,
) -> Result<Json<RevenueLossResponse>, AppError> {
    let Json(RevenueLossRequest { inputs, language }) = payload?;
    let lang = language.unwrap_or(config.language);

    let result = inputs.compute()?;
    let summary = RevenueLossReport::new(&inputs, &result).summary(lang);
    let outside_control_ranges = config.bounds.out_of_range(&inputs);
    if !outside_control_ranges.is_empty() {
        debug!(?outside_control_ranges, "inputs outside control ranges");
    }

    Ok(Json(RevenueLossResponse {
        result,
        summary,
        outside_control_ranges,
    }))
}
