use async_trait::async_trait;
use dashboard_core::{DashboardError, TickerListSource, TickerRecord};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_TICKER_LIST_URL: &str =
    "https://raw.githubusercontent.com/ericttran3/yfinance-web-scraper/main/data/nasdaq-stock-tickers.csv";

/// Downloads the ticker list CSV from a fixed URL
#[derive(Clone)]
pub struct HttpTickerSource {
    url: String,
    client: Client,
}

impl HttpTickerSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpTickerSource {
    fn default() -> Self {
        Self::new(DEFAULT_TICKER_LIST_URL)
    }
}

#[async_trait]
impl TickerListSource for HttpTickerSource {
    async fn fetch(&self) -> Result<Vec<TickerRecord>, DashboardError> {
        tracing::debug!("Downloading ticker list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DashboardError::CatalogFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::CatalogFetch(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::CatalogFetch(e.to_string()))?;

        parse_ticker_csv(&body)
    }
}

// Column names as published in the screener export. Every column is optional.
#[derive(Debug, Deserialize)]
struct CsvTickerRow {
    #[serde(rename = "Symbol", default)]
    symbol: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Sector", default)]
    sector: String,
    #[serde(rename = "Market Cap", default, deserialize_with = "csv::invalid_option")]
    market_cap: Option<f64>,
    #[serde(rename = "Industry", default, deserialize_with = "csv::invalid_option")]
    industry: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "csv::invalid_option")]
    country: Option<String>,
}

/// Parse ticker list CSV text.
/// Rows keep file order; missing columns or unparsable numbers become absent values.
pub fn parse_ticker_csv(csv_data: &str) -> Result<Vec<TickerRecord>, DashboardError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize::<CsvTickerRow>() {
        let row = result.map_err(|e| DashboardError::CatalogFetch(format!("Malformed ticker list: {}", e)))?;
        records.push(TickerRecord {
            symbol: row.symbol,
            name: row.name,
            sector: row.sector,
            market_cap: row.market_cap,
            industry: row.industry,
            country: row.country,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Symbol,Name,Last Sale,Market Cap,Country,Sector,Industry\n\
                          AAPL,Apple Inc. Common Stock,$150.00,2500000000000,United States,Technology,Computer Manufacturing\n\
                          AMZN,Amazon.com Inc. Common Stock,$3000.00,,United States,Consumer Services,Catalog/Specialty Distribution\n\
                          ZZZZ,Mystery Corp,$1.00,n/a,,,\n";

    #[test]
    fn test_parse_csv() {
        let rows = parse_ticker_csv(SAMPLE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].symbol, "AAPL");
        assert_eq!(rows[0].sector, "Technology");
        assert_eq!(rows[0].market_cap, Some(2_500_000_000_000.0));
        assert_eq!(rows[0].industry.as_deref(), Some("Computer Manufacturing"));
        assert_eq!(rows[1].market_cap, None);
        // Unparsable number and blank columns stay absent rather than failing the load
        assert_eq!(rows[2].market_cap, None);
        assert_eq!(rows[2].sector, "");
        assert_eq!(rows[2].country, None);
    }

    #[test]
    fn test_parse_csv_missing_columns() {
        let csv = "Symbol,Name\nMSFT,Microsoft Corporation\n";
        let rows = parse_ticker_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Microsoft Corporation");
        assert_eq!(rows[0].sector, "");
        assert_eq!(rows[0].market_cap, None);
    }

    #[test]
    fn test_parse_csv_empty() {
        let csv = "Symbol,Name,Sector\n";
        let rows = parse_ticker_csv(csv).unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_http_fetch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tickers.csv")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(SAMPLE)
            .expect(1)
            .create_async()
            .await;

        let source = HttpTickerSource::new(format!("{}/tickers.csv", server.url()));
        let rows = source.fetch().await.unwrap();

        assert_eq!(rows.len(), 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_fetch_failure_is_catalog_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/tickers.csv")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let source = HttpTickerSource::new(format!("{}/tickers.csv", server.url()));
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, DashboardError::CatalogFetch(_)));
    }
}
