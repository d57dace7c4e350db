use crate::{AppState, error::AppError};
use analytics::{DashboardReport, SummaryMetrics, filter};
use axum::{
    Json,
    extract::{Query, State},
};
use core_types::{FilterSelection, Unit};
use dataset::DimensionCatalog;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/dashboard`: the unit page plus the user's multi-select
/// filter state. An omitted filter means "no constraint".
#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    pub unit: Unit,
    #[serde(default)]
    pub filter: FilterSelection,
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    unit: String,
}

/// # GET /api/dimensions
/// The distinct values of each filterable dimension, for populating the
/// filter controls.
pub async fn get_dimensions(State(state): State<Arc<AppState>>) -> Json<DimensionCatalog> {
    Json(state.dataset.dimensions())
}

/// # GET /api/summary?unit=value
/// The five overview metrics for the whole (unfiltered) dataset.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SummaryMetrics>, AppError> {
    let unit: Unit = params.unit.parse()?;
    let summary = state.engine.summary(state.dataset.records(), unit);
    Ok(Json(summary))
}

/// # POST /api/dashboard
/// Filters the dataset with the request's selection and derives the full
/// dashboard report for the requested unit. Each request recomputes from the
/// immutable dataset; nothing is cached or shared mutably between requests.
pub async fn post_dashboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DashboardRequest>,
) -> Json<DashboardReport> {
    let subset = filter(state.dataset.records(), &request.filter);
    let report = state.engine.dashboard(&subset, request.unit);
    Json(report)
}
