//! Tests for the annotation, filtering and grouping engine
//!
//! Shared fixtures build observations the way the parser would, before
//! annotation.

pub mod filter_tests;
pub mod scenario_tests;

use crate::models::Observation;

/// Create an unannotated observation
pub fn create_observation(
    submission_id: &str,
    taxonomic_order: u32,
    scientific_name: &str,
    date: &str,
) -> Observation {
    Observation {
        submission_id: submission_id.to_string(),
        common_name: format!("Species {}", taxonomic_order),
        scientific_name: scientific_name.to_string(),
        taxonomic_order: Some(taxonomic_order),
        location_id: "L100".to_string(),
        location: "Home Patch".to_string(),
        date: Some(date.to_string()),
        ..Default::default()
    }
}

/// Create an observation with a time of day
pub fn create_timed_observation(
    submission_id: &str,
    taxonomic_order: u32,
    scientific_name: &str,
    date: &str,
    time: &str,
) -> Observation {
    Observation {
        time: Some(time.to_string()),
        ..create_observation(submission_id, taxonomic_order, scientific_name, date)
    }
}

/// Create an observation at a specific location
pub fn create_located_observation(
    submission_id: &str,
    taxonomic_order: u32,
    location_id: &str,
    location: &str,
) -> Observation {
    Observation {
        location_id: location_id.to_string(),
        location: location.to_string(),
        ..create_observation(
            submission_id,
            taxonomic_order,
            "Anas platyrhynchos",
            "2022-01-01",
        )
    }
}

/// Submission IDs in sequence order
pub fn submission_ids<'a, I>(observations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Observation>,
{
    observations
        .into_iter()
        .map(|o| o.submission_id.clone())
        .collect()
}

/// The end-to-end fixture: species 1 in 2020 and 2021, species 2 in 2020
pub fn two_species_fixture() -> Vec<Observation> {
    vec![
        create_observation("S3", 2, "Anas acuta", "2020-05-01"),
        create_observation("S2", 1, "Anas platyrhynchos", "2021-04-01"),
        create_observation("S1", 1, "Anas platyrhynchos", "2020-03-01"),
    ]
}
