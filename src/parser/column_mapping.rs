//! Column header renaming for the eBird export
//!
//! Export headers such as `Taxonomic Order` are mapped onto canonical
//! camelCase field names. Headers without a mapping pass through unchanged.

use crate::constants::COLUMN_TRANSFORMS;
use csv::StringRecord;

/// Rename a single export header to its canonical field name
pub fn header_transform(column: &str) -> &str {
    COLUMN_TRANSFORMS
        .iter()
        .find(|(source, _)| *source == column)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(column)
}

/// Canonical names for a full header row, in column order
pub fn canonical_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|header| header_transform(header.trim()).to_string())
        .collect()
}

/// Whether a header is one of the known export columns
pub fn is_known_column(column: &str) -> bool {
    COLUMN_TRANSFORMS
        .iter()
        .any(|(source, canonical)| *source == column || *canonical == column)
}
