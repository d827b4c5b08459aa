//! Dashboard routes
//!
//! `GET /api/dashboard/:symbol` runs the whole pipeline for one symbol:
//! catalog lookup, quote snapshot, daily history, then the presentation
//! tables. Steps run one after another and any failure ends the request.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use dashboard_core::{DashboardError, QuoteSnapshot, TickerRecord};
use presentation::{
    build_glossary, glossary_table, group_fields, prepare_series_for_charts, recent_rows, ChartRow,
    ChartSeries, GlossaryEntry, GlossaryRow, GroupedFields, RECENT_ROWS,
};
use quote_extractor::{extract_fields, extract_profile, CompanyProfile};
use serde::{Deserialize, Serialize};
use ticker_catalog::symbol_from_label;

use crate::{ApiResponse, AppError, AppState};

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardPayload {
    pub symbol: String,
    /// Catalog row, when the symbol is listed
    pub listing: Option<TickerRecord>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub profile: CompanyProfile,
    pub summary: GroupedFields,
    pub glossary: Vec<GlossaryRow>,
    pub snapshot: QuoteSnapshot,
    pub chart: ChartSeries,
    pub recent: Vec<ChartRow>,
    pub elapsed_ms: u64,
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/:symbol", get(get_dashboard))
        .route("/api/glossary", get(get_glossary))
}

fn parse_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, DashboardError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DashboardError::InvalidData(format!("{} must be YYYY-MM-DD, got {}", name, v))),
        None => Ok(None),
    }
}

async fn get_dashboard(
    State(state): State<AppState>,
    Path(selection): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardPayload>>, AppError> {
    let started = Instant::now();

    let symbol = symbol_from_label(&selection).to_uppercase();
    if symbol.is_empty() {
        return Err(DashboardError::InvalidData("empty symbol".to_string()).into());
    }
    let start = parse_date("start", query.start.as_deref())?.unwrap_or(state.default_start);
    let end = parse_date("end", query.end.as_deref())?.unwrap_or_else(|| Utc::now().date_naive());

    let catalog = state.catalog.load().await?;
    let listing = catalog.find(&symbol).cloned();
    if listing.is_none() {
        tracing::debug!("{} is not in the ticker catalog", symbol);
    }

    let snapshot = state.quotes.fetch_snapshot(&symbol).await?;
    let series = state.quotes.fetch_history(&symbol, start, end).await?;

    let fields = extract_fields(&snapshot);
    let profile = extract_profile(&snapshot);
    let glossary = glossary_table(&fields, &profile);
    let summary = group_fields(&fields);
    let chart = prepare_series_for_charts(&series);
    let recent = recent_rows(&series, RECENT_ROWS);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        "Dashboard for {} ({} to {}): {} bars in {}ms",
        symbol,
        start,
        end,
        chart.len(),
        elapsed_ms
    );

    Ok(Json(ApiResponse::success(DashboardPayload {
        symbol,
        listing,
        start,
        end,
        profile,
        summary,
        glossary,
        snapshot,
        chart,
        recent,
        elapsed_ms,
    })))
}

async fn get_glossary() -> Json<ApiResponse<&'static [GlossaryEntry]>> {
    Json(ApiResponse::success(build_glossary()))
}
