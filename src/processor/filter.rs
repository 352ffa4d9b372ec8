//! Validity and period filtering of annotated observations
//!
//! A record counts toward a period only when it is dated, falls inside the
//! requested year and month, and names a definite species. Genus-level
//! ("spuh"), slash and domestic-type identifications never count.

use super::ordering::sort_chronologically;
use super::reducer::first_occurrences;
use crate::constants::{DOMESTIC_PATTERN, SLASH_MARKER, SPUH_MARKER};
use crate::models::{Observation, PeriodFilter};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DOMESTIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DOMESTIC_PATTERN).expect("valid domestic regex"));

/// Whether a scientific name names a definite, wild species
pub fn is_countable_species(scientific_name: &str) -> bool {
    !scientific_name.contains(SPUH_MARKER)
        && !scientific_name.contains(SLASH_MARKER)
        && !DOMESTIC_RE.is_match(scientific_name)
}

/// Whether a record is a countable sighting inside `period`
pub fn matches_period(observation: &Observation, period: &PeriodFilter) -> bool {
    let (Some(year), Some(month)) = (observation.observed_year, observation.observed_month) else {
        return false;
    };
    period.matches(year, month) && is_countable_species(&observation.scientific_name)
}

/// Countable sightings inside `period`.
///
/// With `include_all_matches` every matching record is returned in
/// chronological order. Otherwise the matches are reduced to the first
/// admitted record per species (see [`first_occurrences`]).
pub fn filter_observations<'a>(
    annotated: &'a [Observation],
    period: &PeriodFilter,
    include_all_matches: bool,
) -> Vec<&'a Observation> {
    let mut matching: Vec<&Observation> = annotated
        .iter()
        .filter(|observation| matches_period(observation, period))
        .collect();

    debug!(
        "Period {} month {:?}: {} of {} records match",
        period.year,
        period.month,
        matching.len(),
        annotated.len()
    );

    if include_all_matches {
        sort_chronologically(&mut matching);
        matching
    } else {
        first_occurrences(matching)
    }
}

/// First countable sighting of each species inside `period`
pub fn get_filtered_observations<'a>(
    annotated: &'a [Observation],
    period: impl Into<PeriodFilter>,
) -> Vec<&'a Observation> {
    filter_observations(annotated, &period.into(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countable_species() {
        assert!(is_countable_species("Anas platyrhynchos"));
        assert!(is_countable_species("Junco hyemalis oreganus"));
        assert!(!is_countable_species("Anas sp."));
        assert!(!is_countable_species("Anas platyrhynchos/rubripes"));
        assert!(!is_countable_species("Anas platyrhynchos (Domestic type)"));
        assert!(!is_countable_species("Columba livia (domestic type)"));
        assert!(!is_countable_species("Anser anser (DOMESTIC type)"));
    }

    #[test]
    fn test_undated_records_never_match() {
        let observation = Observation {
            scientific_name: "Anas platyrhynchos".to_string(),
            date: Some("2020-01-01".to_string()),
            ..Default::default()
        };
        assert!(!matches_period(&observation, &PeriodFilter::life()));
    }
}
