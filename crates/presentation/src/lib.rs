//! Arranges extracted fields and price history into display-ready tables
//! and chart columns. Pure functions over constant tables; no I/O.

pub mod charts;
pub mod glossary;
pub mod groups;

pub use charts::{prepare_series_for_charts, recent_rows, ChartRow, ChartSeries, RECENT_ROWS};
pub use glossary::{build_glossary, glossary_table, GlossaryEntry, GlossaryRow, ProfileField, ValueSource};
pub use groups::{group_fields, group_members, GroupedFields, PresentedField};
