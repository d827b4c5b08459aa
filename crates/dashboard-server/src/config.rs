use anyhow::Context;
use chrono::NaiveDate;
use ticker_catalog::DEFAULT_TICKER_LIST_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Process settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ticker_list_url: String,
    pub yahoo_base_url: String,
    pub default_start: NaiveDate,
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 1).unwrap_or_default()
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse::<u16>().with_context(|| format!("Invalid PORT: {}", v))?,
            None => DEFAULT_PORT,
        };

        let default_start = match get("DEFAULT_START_DATE") {
            Some(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .with_context(|| format!("Invalid DEFAULT_START_DATE: {}", v))?,
            None => default_start_date(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            ticker_list_url: get("TICKER_LIST_URL").unwrap_or_else(|| DEFAULT_TICKER_LIST_URL.to_string()),
            yahoo_base_url: get("YAHOO_BASE_URL").unwrap_or_else(|| yahoo_client::DEFAULT_BASE_URL.to_string()),
            default_start,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
