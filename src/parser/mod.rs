//! eBird export CSV parsing
//!
//! Turns the text of `MyEBirdData.csv` into annotated observations:
//!
//! 1. [`tabular`] decodes the delimited text into renamed, typed rows
//! 2. [`record_parser`] maps each row onto an [`Observation`]
//! 3. [`crate::processor::annotate`] orders the records and derives
//!    per-record facts
//!
//! Parsing is fail-soft by default: rows with missing fields are kept with
//! whatever the export provided. Strict validation can be switched on through
//! [`ParsingConfig`].

pub mod column_mapping;
pub mod field_parsers;
pub mod record_parser;
pub mod tabular;

pub use column_mapping::header_transform;
pub use record_parser::{normalize_record, validate_record};
pub use tabular::decode_rows;

use crate::config::ParsingConfig;
use crate::error::Result;
use crate::models::Observation;
use crate::processor::annotate;
use tracing::info;

/// Parse export text with the default parsing configuration
pub fn parse_data(csv_data: &str) -> Result<Vec<Observation>> {
    parse_data_with(csv_data, &ParsingConfig::default())
}

/// Parse export text into annotated observations
pub fn parse_data_with(csv_data: &str, config: &ParsingConfig) -> Result<Vec<Observation>> {
    info!("Parsing eBird CSV data");

    let rows = decode_rows(csv_data, config.delimiter, config.infer_types)?;
    let mut observations = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let observation = normalize_record(row);
        if config.strict_validation {
            validate_record(&observation, index + 1)?;
        }
        observations.push(observation);
    }

    let annotated = annotate(observations);
    info!("Parsed {} observations", annotated.len());
    Ok(annotated)
}
