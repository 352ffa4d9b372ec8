//! Field extraction helpers for decoded export rows
//!
//! Every helper is lenient: a missing or mistyped cell becomes an empty
//! string or `None` rather than an error.

use crate::models::{FieldValue, RawRecord};

/// Text of a field, or an empty string when absent
pub fn text_field(row: &RawRecord, name: &str) -> String {
    optional_text(row, name).unwrap_or_default()
}

/// Text of a field, `None` when absent or blank
pub fn optional_text(row: &RawRecord, name: &str) -> Option<String> {
    row.get(name)
        .and_then(FieldValue::as_text)
        .filter(|value| !value.trim().is_empty())
}

/// Non-negative integer field
pub fn optional_u32(row: &RawRecord, name: &str) -> Option<u32> {
    row.get(name)
        .and_then(FieldValue::as_i64)
        .and_then(|value| u32::try_from(value).ok())
}

pub fn optional_f64(row: &RawRecord, name: &str) -> Option<f64> {
    row.get(name).and_then(FieldValue::as_f64)
}

pub fn optional_bool(row: &RawRecord, name: &str) -> Option<bool> {
    row.get(name).and_then(FieldValue::as_bool)
}

/// Raw value of a field, null when absent
pub fn value_field(row: &RawRecord, name: &str) -> FieldValue {
    row.get(name).cloned().unwrap_or(FieldValue::Null)
}
