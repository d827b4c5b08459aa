//! Defensive reads of quote-snapshot fields.
//!
//! Every displayed value goes through one descriptor table and one extraction
//! loop. A field that is absent, `null`, or of the wrong type falls back to its
//! default without touching the other fields.

pub mod extract;
pub mod fields;
pub mod service;

pub use extract::{
    extract_field, extract_field_or, extract_fields, extract_profile, format_number,
    CompanyProfile, ExtractedField, ExtractedFields,
};
pub use fields::{summary_field, FieldSpec, Transform, PROFILE_FIELDS, SUMMARY_FIELDS};
pub use service::QuoteService;
