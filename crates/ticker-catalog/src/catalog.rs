use dashboard_core::TickerRecord;
use serde::Serialize;

const LABEL_SEPARATOR: &str = " | ";

/// Loaded ticker list in CSV order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickerCatalog {
    records: Vec<TickerRecord>,
}

impl TickerCatalog {
    pub fn new(records: Vec<TickerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TickerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.symbol.as_str()).collect()
    }

    /// Distinct sectors in first-seen order
    pub fn sectors(&self) -> Vec<&str> {
        let mut sectors: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sectors.contains(&record.sector.as_str()) {
                sectors.push(record.sector.as_str());
            }
        }
        sectors
    }

    pub fn in_sector(&self, sector: &str) -> Vec<&TickerRecord> {
        self.records.iter().filter(|r| r.sector == sector).collect()
    }

    /// Case-insensitive symbol lookup
    pub fn find(&self, symbol: &str) -> Option<&TickerRecord> {
        self.records
            .iter()
            .find(|r| r.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    /// "SYM | Name" entries for the symbol picker
    pub fn selector_labels(&self) -> Vec<String> {
        self.records.iter().map(selector_label).collect()
    }
}

pub fn selector_label(record: &TickerRecord) -> String {
    format!("{}{}{}", record.symbol, LABEL_SEPARATOR, record.name)
}

/// Recover the symbol from a picker label. Plain symbols pass through.
pub fn symbol_from_label(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map(|(symbol, _)| symbol)
        .unwrap_or(label)
        .trim()
}
