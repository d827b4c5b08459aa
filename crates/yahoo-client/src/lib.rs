use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use dashboard_core::{
    DashboardError, HistoricalBar, HistoricalSeries, MarketDataProvider, QuoteSnapshot,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// quoteSummary modules merged into a snapshot, in precedence order
const SNAPSHOT_MODULES: &[&str] = &[
    "price",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
    "assetProfile",
];

#[derive(Clone)]
pub struct YahooFinanceClient {
    base_url: String,
    client: Client,
}

impl YahooFinanceClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn send_request(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, DashboardError> {
        builder
            .send()
            .await
            .map_err(|e| DashboardError::ApiError(e.to_string()))
    }

    /// Get the quote summary for a symbol, flattened into one snapshot map
    pub async fn get_quote_summary(&self, symbol: &str) -> Result<QuoteSnapshot, DashboardError> {
        let url = format!("{}/v10/finance/quoteSummary/{}", self.base_url, symbol);
        let modules = SNAPSHOT_MODULES.join(",");

        tracing::debug!("Fetching quote summary for {}", symbol);
        let response = self
            .send_request(self.client.get(&url).query(&[("modules", modules.as_str())]))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DashboardError::SymbolNotFound(symbol.to_string()));
        }

        if !response.status().is_success() {
            return Err(DashboardError::ApiError(format!(
                "quoteSummary HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: QuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| DashboardError::ApiError(e.to_string()))?;

        if let Some(err) = body.quote_summary.error {
            return Err(err.into_error(symbol));
        }

        let result = body
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DashboardError::SymbolNotFound(symbol.to_string()))?;

        Ok(flatten_modules(&result))
    }

    /// Get daily bars for the inclusive window `[start, end]`.
    /// An inverted window yields no bars; Yahoo rejects it outright, so no request is made.
    pub async fn get_daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, DashboardError> {
        if start > end {
            tracing::debug!("Empty history window for {}: {} > {}", symbol, start, end);
            return Ok(Vec::new());
        }

        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        // period2 is exclusive upstream
        let period2 = end
            .succ_opt()
            .unwrap_or(end)
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();

        tracing::debug!("Fetching daily history for {} ({} to {})", symbol, start, end);
        let response = self
            .send_request(self.client.get(&url).query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ]))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DashboardError::SymbolNotFound(symbol.to_string()));
        }

        if !response.status().is_success() {
            return Err(DashboardError::ApiError(format!(
                "chart HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| DashboardError::ApiError(e.to_string()))?;

        if let Some(err) = body.chart.error {
            return Err(err.into_error(symbol));
        }

        let Some(result) = body.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(Vec::new());
        };

        Ok(result.into_bars(start, end))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, DashboardError> {
        self.get_quote_summary(symbol).await
    }

    async fn history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, DashboardError> {
        self.get_daily_history(symbol, start, end).await
    }
}

/// Merge quoteSummary modules into one flat map.
/// `{raw, fmt}` wrappers collapse to `raw`, empty `{}` wrappers are dropped,
/// and the first module defining a key wins.
pub fn flatten_modules(result: &Map<String, Value>) -> QuoteSnapshot {
    let mut snapshot = QuoteSnapshot::new();
    for module in SNAPSHOT_MODULES {
        let Some(Value::Object(fields)) = result.get(*module) else {
            continue;
        };
        for (key, value) in fields {
            if snapshot.contains(key) {
                continue;
            }
            if let Some(value) = unwrap_formatted(value) {
                snapshot.insert(key.clone(), value);
            }
        }
    }
    snapshot
}

fn unwrap_formatted(value: &Value) -> Option<Value> {
    match value {
        Value::Object(obj) if obj.contains_key("raw") => obj.get("raw").cloned(),
        Value::Object(obj) if obj.is_empty() => None,
        other => Some(other.clone()),
    }
}

// Error body shared by quoteSummary and chart
#[derive(Debug, Deserialize)]
struct YahooErrorBody {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

impl YahooErrorBody {
    fn into_error(self, symbol: &str) -> DashboardError {
        if self.code.eq_ignore_ascii_case("Not Found") {
            DashboardError::SymbolNotFound(symbol.to_string())
        } else {
            DashboardError::ApiError(format!(
                "{}: {}",
                self.code,
                self.description.unwrap_or_default()
            ))
        }
    }
}

// quoteSummary response structures
#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(default)]
    result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    error: Option<YahooErrorBody>,
}

// Chart response structures
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<YahooErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: ChartIndicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Rows with any missing price/volume are skipped (non-trading placeholders).
    fn into_bars(self, start: NaiveDate, end: NaiveDate) -> HistoricalSeries {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };
        let cell = |col: &[Option<f64>], i: usize| col.get(i).copied().flatten();

        let mut bars = Vec::with_capacity(self.timestamp.len());
        for (i, ts) in self.timestamp.iter().enumerate() {
            let Some(date) = DateTime::from_timestamp(ts + self.meta.gmtoffset, 0).map(|dt| dt.date_naive()) else {
                continue;
            };
            if date < start || date > end {
                continue;
            }
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
                cell(&quote.open, i),
                cell(&quote.high, i),
                cell(&quote.low, i),
                cell(&quote.close, i),
                cell(&quote.volume, i),
            ) {
                bars.push(HistoricalBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume: volume as u64,
                });
            }
        }
        bars
    }
}
