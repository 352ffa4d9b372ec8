//! First-occurrence reduction: one record per species
//!
//! The scan admits the first record seen for each binomial name, in the
//! order the records arrive. Filtered sequences arrive in annotated
//! (taxonomic) order, so the admitted record is the earliest of its
//! taxonomic-order block, which is not necessarily the chronologically
//! earliest record sharing that binomial name.

use super::ordering::sort_chronologically;
use crate::models::Observation;
use std::collections::HashSet;
use tracing::debug;

/// Keep the first record per `baseScientificName`, then sort chronologically.
///
/// Applying the reduction to its own output returns the same records.
pub fn first_occurrences<'a>(records: Vec<&'a Observation>) -> Vec<&'a Observation> {
    if records.is_empty() {
        return records;
    }

    let input_count = records.len();
    let mut admitted: HashSet<Option<&str>> = HashSet::new();
    let mut firsts: Vec<&Observation> = Vec::new();

    for record in records {
        if admitted.insert(record.base_scientific_name.as_deref()) {
            firsts.push(record);
        }
    }

    debug!(
        "First-occurrence reduction: {} -> {} records",
        input_count,
        firsts.len()
    );

    sort_chronologically(&mut firsts);
    firsts
}
