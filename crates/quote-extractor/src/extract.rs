use dashboard_core::QuoteSnapshot;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::fields::{FieldSpec, Transform, PROFILE_FIELDS, SUMMARY_FIELDS};

/// Why a single field could not be shown. Always recovered with the field default.
#[derive(Error, Debug)]
enum FieldReadError {
    #[error("field absent")]
    Missing,

    #[error("value is not numeric")]
    NotNumeric,

    #[error("value is not finite")]
    NotFinite,
}

/// Read `key` and format it, or return `""`.
pub fn extract_field(snapshot: &QuoteSnapshot, key: &str, transform: Option<Transform>) -> String {
    extract_field_or(snapshot, key, transform, "")
}

/// Read `key` and format it, or return `default` when it is absent or the transform fails.
pub fn extract_field_or(
    snapshot: &QuoteSnapshot,
    key: &str,
    transform: Option<Transform>,
    default: &str,
) -> String {
    read_field(snapshot, key, transform).unwrap_or_else(|_| default.to_string())
}

fn read_field(
    snapshot: &QuoteSnapshot,
    key: &str,
    transform: Option<Transform>,
) -> Result<String, FieldReadError> {
    let value = snapshot.get(key).ok_or(FieldReadError::Missing)?;
    match transform {
        None => Ok(display_raw(value)),
        Some(Transform::Round2) => round2(value),
        Some(Transform::Percent) => percent(value),
    }
}

fn display_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format_number(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn finite(value: &Value) -> Result<f64, FieldReadError> {
    let f = value.as_f64().ok_or(FieldReadError::NotNumeric)?;
    if f.is_finite() {
        Ok(f)
    } else {
        Err(FieldReadError::NotFinite)
    }
}

fn round2(value: &Value) -> Result<String, FieldReadError> {
    if let Some(i) = value.as_i64() {
        return Ok(i.to_string());
    }
    Ok(format_number(round_dp(finite(value)?, 2)))
}

fn percent(value: &Value) -> Result<String, FieldReadError> {
    if let Some(scaled) = value.as_i64().and_then(|i| i.checked_mul(100)) {
        return Ok(format!("{}%", scaled));
    }
    Ok(format!("{}%", format_number(round_dp(finite(value)? * 100.0, 2))))
}

/// Round the exact binary value to `dp` decimals, ties to even.
fn round_dp(v: f64, dp: usize) -> f64 {
    format!("{:.*}", dp, v).parse().unwrap_or(v)
}

/// Shortest decimal form, keeping one decimal on integral floats ("150.0").
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// One extracted summary field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedField {
    pub id: &'static str,
    pub source_key: &'static str,
    pub raw_value: Option<Value>,
    pub display_value: String,
}

/// Extracted summary fields in descriptor-table order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    fields: Vec<ExtractedField>,
}

impl ExtractedFields {
    pub fn get(&self, id: &str) -> Option<&ExtractedField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Display string for `id`; unknown ids read as blank.
    pub fn display(&self, id: &str) -> &str {
        self.get(id).map(|f| f.display_value.as_str()).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn extract_with(snapshot: &QuoteSnapshot, specs: &'static [FieldSpec]) -> ExtractedFields {
    let fields = specs
        .iter()
        .map(|spec| ExtractedField {
            id: spec.id,
            source_key: spec.source_key,
            raw_value: snapshot.get(spec.source_key).cloned(),
            display_value: extract_field_or(snapshot, spec.source_key, spec.transform, spec.default),
        })
        .collect();
    ExtractedFields { fields }
}

/// Run every summary descriptor against the snapshot
pub fn extract_fields(snapshot: &QuoteSnapshot) -> ExtractedFields {
    extract_with(snapshot, SUMMARY_FIELDS)
}

/// Company header shown above the summary tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub name: String,
    pub country: String,
    pub sector: String,
    pub industry: String,
    pub market: String,
    pub employees: String,
    pub website: String,
    pub logo_url: String,
    pub summary: String,
}

pub fn extract_profile(snapshot: &QuoteSnapshot) -> CompanyProfile {
    let fields = extract_with(snapshot, PROFILE_FIELDS);
    let take = |id: &str| fields.display(id).to_string();

    CompanyProfile {
        name: take("name"),
        country: take("country"),
        sector: take("sector"),
        industry: take("industry"),
        market: take("market"),
        employees: take("employees"),
        website: take("website"),
        logo_url: take("logo_url"),
        summary: take("summary"),
    }
}
