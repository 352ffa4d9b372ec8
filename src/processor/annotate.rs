//! Observation annotation: canonical ordering plus derived per-record facts
//!
//! Records are sorted by taxonomic order, then by date and time, after which
//! a single pass derives the observed year and month, the binomial name and
//! the lifer / first-of-year flags. Because a species' records are contiguous
//! after the sort, both flags only need to look at the previous dated record.

use super::ordering::taxonomic_then_chronological;
use crate::constants::DATE_FORMAT;
use crate::models::Observation;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

/// Order records canonically and derive their annotations.
///
/// Consumes the input and returns the annotated sequence. Derived fields
/// from any earlier annotation are cleared first, so re-annotating is safe.
/// Records without a parseable date are kept in place with no derived
/// fields and are invisible to the flag computation.
pub fn annotate(mut records: Vec<Observation>) -> Vec<Observation> {
    records.sort_by(taxonomic_then_chronological);

    let mut previous: Option<(Option<u32>, i32)> = None;
    let mut lifers = 0usize;
    let mut undated = 0usize;

    for observation in records.iter_mut() {
        clear_annotations(observation);

        let Some((year, month)) = observation.date.as_deref().and_then(parse_observed_date)
        else {
            undated += 1;
            continue;
        };

        observation.observed_year = Some(year);
        observation.observed_month = Some(month);
        observation.base_scientific_name = Some(base_scientific_name(&observation.scientific_name));

        let order = observation.taxonomic_order;
        observation.is_lifer = previous.is_none_or(|(previous_order, _)| previous_order != order);
        observation.is_first_of_year = previous.is_some_and(|(previous_order, previous_year)| {
            previous_order == order && previous_year != year
        });

        if observation.is_lifer {
            lifers += 1;
        }
        previous = Some((order, year));
    }

    if undated > 0 {
        debug!("{} records without a usable date left unannotated", undated);
    }
    info!(
        "Annotated {} observations covering {} species",
        records.len(),
        lifers
    );

    records
}

/// Year and month of an ISO `YYYY-MM-DD` date.
///
/// Uses the same calendar parse as [`Observation::timestamp`], so a record
/// that sorts as undated is never annotated.
pub fn parse_observed_date(date: &str) -> Option<(i32, u32)> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    Some((date.year(), date.month()))
}

/// Genus and species epithet of a (possibly trinomial) scientific name
pub fn base_scientific_name(scientific_name: &str) -> String {
    let mut tokens = scientific_name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(genus), Some(species)) => format!("{} {}", genus, species),
        _ => scientific_name.to_string(),
    }
}

fn clear_annotations(observation: &mut Observation) {
    observation.observed_year = None;
    observation.observed_month = None;
    observation.base_scientific_name = None;
    observation.is_lifer = false;
    observation.is_first_of_year = false;
}
