//! Months that contain at least one countable sighting

use super::filter::filter_observations;
use crate::models::{Observation, PeriodFilter, YearFilter};
use std::collections::BTreeSet;

/// Distinct months with a countable sighting in `year`, ascending
pub fn months_with_observations(annotated: &[Observation], year: impl Into<YearFilter>) -> Vec<u32> {
    let period = PeriodFilter::from(year.into());
    filter_observations(annotated, &period, true)
        .into_iter()
        .filter_map(|observation| observation.observed_month)
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .collect()
}
