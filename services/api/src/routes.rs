use crate::infra::{apply_weight_overrides, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use datanext::catalog::{
    Assessment, CatalogStatsSummary, ClassificationEngine, CriteriaScores, CriteriaSet, Criterion,
    CriterionId, MigrationSummary, ReclassificationOutcome, Report, SourceType, WeightImbalance,
};
use datanext::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub(crate) struct CriteriaResponse {
    pub(crate) criteria: Vec<Criterion>,
    pub(crate) total_weight: u32,
    pub(crate) weight_imbalance: Option<WeightImbalance>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) source_type: SourceType,
    pub(crate) criteria_scores: CriteriaScores,
    #[serde(default)]
    pub(crate) weights: BTreeMap<CriterionId, u8>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    #[serde(flatten)]
    pub(crate) assessment: Assessment,
    pub(crate) ignored_weights: Vec<CriterionId>,
    pub(crate) weight_imbalance: Option<WeightImbalance>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogReportRequest {
    #[serde(default)]
    pub(crate) weights: BTreeMap<CriterionId, u8>,
    #[serde(default)]
    pub(crate) include_reports: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogReportResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) stats: CatalogStatsSummary,
    pub(crate) migration_summary: MigrationSummary,
    pub(crate) reclassification: ReclassificationOutcome,
    pub(crate) ignored_weights: Vec<CriterionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reports: Option<Vec<Report>>,
}

pub(crate) fn catalog_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/criteria", get(criteria_endpoint))
        .route("/api/v1/classify", post(classify_endpoint))
        .route("/api/v1/catalog/report", post(catalog_report_endpoint))
        .layer(Extension(state))
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

pub(crate) async fn criteria_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<CriteriaResponse> {
    let criteria = state.catalog.criteria();
    Json(CriteriaResponse {
        criteria: criteria.iter().cloned().collect(),
        total_weight: criteria.total_weight(),
        weight_imbalance: criteria.weight_imbalance(),
    })
}

pub(crate) async fn classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let ClassifyRequest {
        source_type,
        criteria_scores,
        weights,
    } = payload;

    let (criteria, ignored_weights) = apply_weight_overrides(&CriteriaSet::standard(), weights);
    let assessment = ClassificationEngine::new(&criteria).assess(source_type, &criteria_scores)?;

    Ok(Json(ClassifyResponse {
        assessment,
        ignored_weights,
        weight_imbalance: criteria.weight_imbalance(),
    }))
}

pub(crate) async fn catalog_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CatalogReportRequest>,
) -> Json<CatalogReportResponse> {
    let CatalogReportRequest {
        weights,
        include_reports,
    } = payload;

    let (criteria, ignored_weights) = apply_weight_overrides(state.catalog.criteria(), weights);
    let (catalog, reclassification) = state.catalog.reclassified(&criteria);
    let stats = catalog.stats();
    let reports = if include_reports {
        Some(catalog.reports().to_vec())
    } else {
        None
    };

    Json(CatalogReportResponse {
        generated_on: catalog.generated_on(),
        stats: stats.summary(),
        migration_summary: stats.migration_summary(criteria.len()),
        reclassification,
        ignored_weights,
        reports,
    })
}
