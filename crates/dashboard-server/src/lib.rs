//! JSON backend for the stock dashboard.
//!
//! Wires the ticker catalog, the market-data provider and the presentation
//! layer into an axum router. Every dashboard request runs its fetches in
//! sequence; the ticker catalog is the only state shared across requests.

mod config;
mod dashboard_routes;
mod ticker_routes;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use dashboard_core::DashboardError;
use quote_extractor::QuoteService;
use serde::Serialize;
use ticker_catalog::{CatalogCache, HttpTickerSource};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use yahoo_client::YahooFinanceClient;

pub use config::{default_start_date, ServerConfig};
pub use dashboard_routes::DashboardPayload;

const DEFAULT_LOG_FILTER: &str = "dashboard_server=info,ticker_catalog=info,yahoo_client=warn";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogCache>,
    pub quotes: QuoteService,
    pub default_start: NaiveDate,
}

/// Envelope for every JSON response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Handler error. Pipeline errors keep their kind for the status code.
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<DashboardError>() {
            Some(DashboardError::SymbolNotFound(_)) => StatusCode::NOT_FOUND,
            Some(DashboardError::CatalogFetch(_)) | Some(DashboardError::ApiError(_)) => {
                StatusCode::BAD_GATEWAY
            }
            Some(DashboardError::InvalidData(_)) => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        } else {
            tracing::debug!("Request rejected: {}", self.0);
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(ticker_routes::ticker_routes())
        .merge(dashboard_routes::dashboard_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// State backed by the live ticker list and Yahoo Finance
pub fn build_state(config: &ServerConfig) -> AppState {
    let source = HttpTickerSource::new(config.ticker_list_url.clone());
    let provider = YahooFinanceClient::with_base_url(config.yahoo_base_url.clone());

    AppState {
        catalog: Arc::new(CatalogCache::new(Arc::new(source))),
        quotes: QuoteService::new(Arc::new(provider)),
        default_start: config.default_start,
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        "Ticker list: {}, market data: {}, default start: {}",
        config.ticker_list_url,
        config.yahoo_base_url,
        config.default_start
    );

    let app = build_router(build_state(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
