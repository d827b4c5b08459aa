use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One row of the tradable-symbol list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Point-in-time descriptive/quote fields for one symbol, keyed by the
/// provider's field names. JSON `null` is treated the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteSnapshot {
    fields: BTreeMap<String, Value>,
}

impl QuoteSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present, non-null value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a field; returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl FromIterator<(String, Value)> for QuoteSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<serde_json::Map<String, Value>> for QuoteSnapshot {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Daily OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl HistoricalBar {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Daily bars ordered by date ascending
pub type HistoricalSeries = Vec<HistoricalBar>;

/// Thematic grouping of summary fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    Technical,
    Valuation,
    Fundamentals,
    Holdings,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Technical,
        FieldGroup::Valuation,
        FieldGroup::Fundamentals,
        FieldGroup::Holdings,
    ];

    /// Section heading shown above the group's table
    pub fn to_label(&self) -> &'static str {
        match self {
            FieldGroup::Technical => "Technical",
            FieldGroup::Valuation => "Valuation",
            FieldGroup::Fundamentals => "Fundamentals",
            FieldGroup::Holdings => "Holdings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_null_is_absent() {
        let snapshot: QuoteSnapshot = serde_json::from_value(json!({
            "beta": null,
            "regularMarketPrice": 150.0,
        }))
        .unwrap();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get("beta").is_none());
        assert!(!snapshot.contains("beta"));
        assert_eq!(snapshot.get("regularMarketPrice"), Some(&json!(150.0)));
        assert!(snapshot.get("marketCap").is_none());
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let mut snapshot = QuoteSnapshot::new();
        snapshot.insert("sector", json!("Technology"));
        let out = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(out, json!({ "sector": "Technology" }));
    }

    #[test]
    fn test_bar_year() {
        let bar = HistoricalBar {
            date: NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100,
        };
        assert_eq!(bar.year(), 2019);
    }

    #[test]
    fn test_group_labels() {
        let labels: Vec<&str> = FieldGroup::ALL.iter().map(|g| g.to_label()).collect();
        assert_eq!(labels, vec!["Technical", "Valuation", "Fundamentals", "Holdings"]);
    }
}
