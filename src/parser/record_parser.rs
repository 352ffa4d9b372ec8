//! Mapping of decoded rows onto the canonical observation shape

use super::column_mapping::is_known_column;
use super::field_parsers::{
    optional_bool, optional_f64, optional_text, optional_u32, text_field, value_field,
};
use crate::constants::fields;
use crate::error::{MyDataError, Result};
use crate::models::{Observation, RawRecord};

/// Build an observation from a renamed row.
///
/// Derived fields stay unset; columns without a canonical name are kept in
/// `extra`.
pub fn normalize_record(row: RawRecord) -> Observation {
    let mut observation = Observation {
        submission_id: text_field(&row, fields::SUBMISSION_ID),
        common_name: text_field(&row, fields::COMMON_NAME),
        scientific_name: text_field(&row, fields::SCIENTIFIC_NAME),
        taxonomic_order: optional_u32(&row, fields::TAXONOMIC_ORDER),
        count: value_field(&row, fields::COUNT),
        state_province: text_field(&row, fields::STATE_PROVINCE),
        county: text_field(&row, fields::COUNTY),
        location_id: text_field(&row, fields::LOCATION_ID),
        location: text_field(&row, fields::LOCATION),
        latitude: optional_f64(&row, fields::LATITUDE),
        longitude: optional_f64(&row, fields::LONGITUDE),
        date: optional_text(&row, fields::DATE),
        time: optional_text(&row, fields::TIME),
        protocol: text_field(&row, fields::PROTOCOL),
        duration_min: optional_f64(&row, fields::DURATION_MIN),
        all_obs_reported: optional_bool(&row, fields::ALL_OBS_REPORTED),
        distance_traveled_km: optional_f64(&row, fields::DISTANCE_TRAVELED_KM),
        area_covered_ha: optional_f64(&row, fields::AREA_COVERED_HA),
        number_of_observers: optional_u32(&row, fields::NUMBER_OF_OBSERVERS),
        breeding_code: optional_text(&row, fields::BREEDING_CODE),
        observation_details: optional_text(&row, fields::OBSERVATION_DETAILS),
        checklist_comments: optional_text(&row, fields::CHECKLIST_COMMENTS),
        ml_catalog_numbers: optional_text(&row, fields::ML_CATALOG_NUMBERS),
        ..Default::default()
    };

    for (name, value) in row.fields {
        if !is_known_column(&name) {
            observation.extra.entry(name).or_insert(value);
        }
    }

    observation
}

/// Reject records missing the fields the analysis depends on.
///
/// `row` is the 1-based data row number used in the error.
pub fn validate_record(observation: &Observation, row: usize) -> Result<()> {
    if observation.scientific_name.trim().is_empty() {
        return Err(MyDataError::InvalidRecord {
            row,
            reason: "missing scientific name".to_string(),
        });
    }
    if observation.taxonomic_order.is_none() {
        return Err(MyDataError::InvalidRecord {
            row,
            reason: "missing or invalid taxonomic order".to_string(),
        });
    }
    Ok(())
}
