//! Record comparators shared by the annotator, filters and reducer

use crate::models::Observation;
use std::cmp::Ordering;

/// Taxonomic order first, then date and time.
///
/// This is the canonical ordering of an annotated sequence; it keeps each
/// species' records contiguous.
pub fn taxonomic_then_chronological(a: &Observation, b: &Observation) -> Ordering {
    a.taxonomic_order
        .cmp(&b.taxonomic_order)
        .then_with(|| a.timestamp().cmp(&b.timestamp()))
}

/// Date and time first, taxonomic order breaking ties
pub fn chronological(a: &Observation, b: &Observation) -> Ordering {
    a.timestamp()
        .cmp(&b.timestamp())
        .then_with(|| a.taxonomic_order.cmp(&b.taxonomic_order))
}

/// Sort borrowed records chronologically, preserving the order of ties
pub fn sort_chronologically(records: &mut [&Observation]) {
    records.sort_by(|a, b| chronological(a, b));
}
