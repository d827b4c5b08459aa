//! Tradable-symbol list: CSV download, sector groupings, and the
//! process-lifetime memo the dashboard reads it through.

pub mod cache;
pub mod catalog;
pub mod source;

pub use cache::CatalogCache;
pub use catalog::{selector_label, symbol_from_label, TickerCatalog};
pub use source::{parse_ticker_csv, HttpTickerSource, DEFAULT_TICKER_LIST_URL};
