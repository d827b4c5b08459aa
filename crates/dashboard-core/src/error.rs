use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Ticker catalog unavailable: {0}")]
    CatalogFetch(String),

    #[error("No market data for symbol: {0}")]
    SymbolNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
