use dashboard_core::{DashboardError, TickerListSource};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::TickerCatalog;

/// Process-lifetime memo of the ticker list.
///
/// The list comes from a fixed URL with no parameters, so one download serves
/// every request until `refresh` or `invalidate` is called. Failed loads are
/// not cached.
pub struct CatalogCache {
    source: Arc<dyn TickerListSource>,
    cached: Mutex<Option<Arc<TickerCatalog>>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn TickerListSource>) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    /// Cached catalog, downloading it on first use.
    /// The lock is held across the download so concurrent callers share one fetch.
    pub async fn load(&self) -> Result<Arc<TickerCatalog>, DashboardError> {
        let mut cached = self.cached.lock().await;
        if let Some(catalog) = cached.as_ref() {
            tracing::debug!("Ticker catalog served from cache ({} tickers)", catalog.len());
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(TickerCatalog::new(self.source.fetch().await?));
        tracing::info!("Loaded ticker catalog: {} tickers", catalog.len());
        *cached = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Re-download and replace the cached catalog.
    /// On failure the previously cached catalog stays in place.
    pub async fn refresh(&self) -> Result<Arc<TickerCatalog>, DashboardError> {
        let mut cached = self.cached.lock().await;
        let catalog = Arc::new(TickerCatalog::new(self.source.fetch().await?));
        tracing::info!("Refreshed ticker catalog: {} tickers", catalog.len());
        *cached = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the cached catalog; the next `load` downloads again.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    pub async fn is_loaded(&self) -> bool {
        self.cached.lock().await.is_some()
    }
}
