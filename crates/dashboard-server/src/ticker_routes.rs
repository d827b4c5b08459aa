//! Ticker catalog routes
//!
//! Listing, sector and picker-label views over the cached ticker list.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use dashboard_core::TickerRecord;
use serde::{Deserialize, Serialize};

use crate::{ApiResponse, AppError, AppState};

#[derive(Deserialize)]
pub struct TickerQuery {
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Serialize)]
pub struct TickerListing {
    pub count: usize,
    pub sectors: Vec<String>,
    pub tickers: Vec<TickerRecord>,
}

#[derive(Serialize)]
pub struct RefreshResult {
    pub count: usize,
}

pub fn ticker_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tickers", get(list_tickers))
        .route("/api/tickers/sectors", get(list_sectors))
        .route("/api/tickers/labels", get(list_labels))
        .route("/api/tickers/refresh", post(refresh_tickers))
}

async fn list_tickers(
    State(state): State<AppState>,
    Query(query): Query<TickerQuery>,
) -> Result<Json<ApiResponse<TickerListing>>, AppError> {
    let catalog = state.catalog.load().await?;

    let tickers: Vec<TickerRecord> = match query.sector.as_deref().map(str::trim) {
        Some(sector) if !sector.is_empty() => catalog.in_sector(sector).into_iter().cloned().collect(),
        _ => catalog.records().to_vec(),
    };

    Ok(Json(ApiResponse::success(TickerListing {
        count: tickers.len(),
        sectors: catalog.sectors().into_iter().map(String::from).collect(),
        tickers,
    })))
}

async fn list_sectors(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let catalog = state.catalog.load().await?;
    let sectors = catalog.sectors().into_iter().map(String::from).collect();
    Ok(Json(ApiResponse::success(sectors)))
}

async fn list_labels(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let catalog = state.catalog.load().await?;
    Ok(Json(ApiResponse::success(catalog.selector_labels())))
}

async fn refresh_tickers(State(state): State<AppState>) -> Result<Json<ApiResponse<RefreshResult>>, AppError> {
    let catalog = state.catalog.refresh().await?;
    tracing::info!("Ticker catalog refreshed: {} symbols", catalog.len());
    Ok(Json(ApiResponse::success(RefreshResult { count: catalog.len() })))
}

#[cfg(test)]
mod tests {
    use crate::build_router;
    use crate::testing::{get_json, request_json, test_app, test_state};
    use axum::http::{Method, StatusCode};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_list_all_tickers() {
        let (status, body) = get_json(test_app(), "/api/tickers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(body["data"]["tickers"][0]["symbol"], "AAPL");
        assert_eq!(body["data"]["sectors"], serde_json::json!(["Technology", "Energy"]));
    }

    #[tokio::test]
    async fn test_filter_by_sector() {
        let (status, body) = get_json(test_app(), "/api/tickers?sector=Technology").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["tickers"][1]["symbol"], "MSFT");
    }

    #[tokio::test]
    async fn test_labels() {
        let (_, body) = get_json(test_app(), "/api/tickers/labels").await;
        assert_eq!(body["data"][0], "AAPL | Apple Inc.");
    }

    #[tokio::test]
    async fn test_catalog_failure_is_bad_gateway() {
        let (state, _) = test_state(true);
        let (status, body) = get_json(build_router(state), "/api/tickers/sectors").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn test_catalog_loaded_once_until_refresh() {
        let (state, source) = test_state(false);
        let app = build_router(state);

        get_json(app.clone(), "/api/tickers").await;
        get_json(app.clone(), "/api/tickers/labels").await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        let (status, body) = request_json(app, Method::POST, "/api/tickers/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }
}
