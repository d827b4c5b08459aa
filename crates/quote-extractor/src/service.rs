use chrono::NaiveDate;
use dashboard_core::{DashboardError, HistoricalSeries, MarketDataProvider, QuoteSnapshot};
use std::sync::Arc;

/// Per-request reads from the market-data provider. Nothing is cached here:
/// snapshots and bars may be live data and are re-fetched on every call.
#[derive(Clone)]
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Provider snapshot for `symbol`, passed through as-is.
    /// Unknown symbols propagate as `DashboardError::SymbolNotFound`.
    pub async fn fetch_snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, DashboardError> {
        match self.provider.snapshot(symbol).await {
            Ok(snapshot) => {
                tracing::debug!("Snapshot for {}: {} fields", symbol, snapshot.len());
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!("Snapshot fetch failed for {}: {}", symbol, e);
                Err(e)
            }
        }
    }

    /// Daily bars for `[start, end]`. `start > end` is passed to the provider unchanged.
    pub async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, DashboardError> {
        let series = self.provider.history(symbol, start, end).await?;
        tracing::debug!("History for {} ({} to {}): {} bars", symbol, start, end, series.len());
        Ok(series)
    }
}
