use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{DashboardError, HistoricalSeries, QuoteSnapshot, TickerRecord};

/// Source of the tradable-symbol list
#[async_trait]
pub trait TickerListSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TickerRecord>, DashboardError>;
}

/// Market-data provider: one symbol-keyed snapshot query and one daily history query
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current descriptive/quote fields for `symbol`.
    /// Unknown symbols fail with `DashboardError::SymbolNotFound`.
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, DashboardError>;

    /// Daily bars for `symbol` in the inclusive window `[start, end]`.
    async fn history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, DashboardError>;
}
