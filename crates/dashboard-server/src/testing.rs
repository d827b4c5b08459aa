//! In-memory sources and request helpers for route tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{Days, NaiveDate};
use dashboard_core::{
    DashboardError, HistoricalBar, HistoricalSeries, MarketDataProvider, QuoteSnapshot,
    TickerListSource, TickerRecord,
};
use quote_extractor::QuoteService;
use serde_json::{json, Value};
use ticker_catalog::CatalogCache;
use tower::ServiceExt;

use crate::{build_router, default_start_date, AppState};

pub struct FakeTickerSource {
    pub fail: bool,
    pub fetches: AtomicUsize,
}

#[async_trait]
impl TickerListSource for FakeTickerSource {
    async fn fetch(&self) -> Result<Vec<TickerRecord>, DashboardError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DashboardError::CatalogFetch("HTTP 503".to_string()));
        }
        Ok(vec![
            record("AAPL", "Apple Inc.", "Technology"),
            record("XOM", "Exxon Mobil Corporation", "Energy"),
            record("MSFT", "Microsoft Corporation", "Technology"),
        ])
    }
}

fn record(symbol: &str, name: &str, sector: &str) -> TickerRecord {
    TickerRecord {
        symbol: symbol.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        market_cap: None,
        industry: None,
        country: None,
    }
}

/// Knows only AAPL. History is one bar per day across the window.
pub struct FakeProvider;

#[async_trait]
impl MarketDataProvider for FakeProvider {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, DashboardError> {
        if symbol != "AAPL" {
            return Err(DashboardError::SymbolNotFound(symbol.to_string()));
        }
        let snapshot = json!({
            "longName": "Apple Inc.",
            "sector": "Technology",
            "regularMarketPrice": 150.004,
            "beta": null,
            "profitMargins": 0.1523,
            "regularMarketVolume": 51234567,
        });
        serde_json::from_value(snapshot).map_err(|e| DashboardError::InvalidData(e.to_string()))
    }

    async fn history(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, DashboardError> {
        let mut bars = Vec::new();
        let mut date = start;
        while date <= end {
            let open = 100.0 + bars.len() as f64;
            bars.push(HistoricalBar {
                date,
                open,
                high: open + 2.0,
                low: open - 2.0,
                close: if bars.len() % 2 == 0 { open + 1.0 } else { open - 1.0 },
                volume: 1_000,
            });
            date = match date.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(bars)
    }
}

pub fn test_state(catalog_fails: bool) -> (AppState, Arc<FakeTickerSource>) {
    let source = Arc::new(FakeTickerSource {
        fail: catalog_fails,
        fetches: AtomicUsize::new(0),
    });
    let state = AppState {
        catalog: Arc::new(CatalogCache::new(source.clone())),
        quotes: QuoteService::new(Arc::new(FakeProvider)),
        default_start: default_start_date(),
    };
    (state, source)
}

pub fn test_app() -> Router {
    build_router(test_state(false).0)
}

pub async fn request_json(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    request_json(app, Method::GET, uri).await
}
