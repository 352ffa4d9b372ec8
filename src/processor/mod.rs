//! Annotation, filtering and grouping engine.
//!
//! All stages are pure functions over an annotated observation sequence:
//! - [`annotate`] - canonical ordering and derived per-record facts
//! - [`filter`] - countable sightings inside a year/month window
//! - [`reducer`] - one record per species, earliest admitted first
//! - [`grouping`] - species, family and location partitions
//! - [`months`] - months containing countable sightings
//!
//! [`ObservationSet`] owns an annotated sequence and exposes the stages as
//! methods; the groups and filtered lists it returns borrow from it.

pub mod annotate;
pub mod filter;
pub mod grouping;
pub mod months;
pub mod ordering;
pub mod reducer;

#[cfg(test)]
pub mod tests;

pub use annotate::{annotate, base_scientific_name, parse_observed_date};
pub use filter::{filter_observations, get_filtered_observations, is_countable_species};
pub use grouping::{group_by_family, group_by_location, group_by_species};
pub use months::months_with_observations;
pub use ordering::{chronological, taxonomic_then_chronological};
pub use reducer::first_occurrences;

use crate::config::ParsingConfig;
use crate::error::Result;
use crate::models::{
    FamilyGroup, LocationGroup, Observation, ObservationStats, PeriodFilter, SpeciesGroup,
    YearFilter,
};
use crate::parser::parse_data_with;
use crate::taxonomy::TaxonomyTable;

/// An annotated observation list and the views derived from it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    /// Annotate raw observations into a new set
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations: annotate(observations),
        }
    }

    /// Parse export CSV text into an annotated set
    pub fn from_csv(csv_data: &str, config: &ParsingConfig) -> Result<Self> {
        Ok(Self {
            observations: parse_data_with(csv_data, config)?,
        })
    }

    /// Annotated observations in canonical order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// First countable sighting of each species inside `period`
    pub fn first_sightings(&self, period: &PeriodFilter) -> Vec<&Observation> {
        filter_observations(&self.observations, period, false)
    }

    /// Every countable sighting inside `period`, chronologically
    pub fn all_sightings(&self, period: &PeriodFilter) -> Vec<&Observation> {
        filter_observations(&self.observations, period, true)
    }

    pub fn months_with_observations(&self, year: YearFilter) -> Vec<u32> {
        months_with_observations(&self.observations, year)
    }

    pub fn by_species(&self) -> Vec<SpeciesGroup<'_>> {
        group_by_species(&self.observations)
    }

    pub fn by_location(&self) -> Vec<LocationGroup<'_>> {
        group_by_location(&self.observations)
    }

    pub fn by_family<'a>(&'a self, taxonomy: &TaxonomyTable) -> Vec<FamilyGroup<'a>> {
        group_by_family(&self.observations, taxonomy)
    }

    pub fn stats(&self) -> ObservationStats {
        ObservationStats::from_observations(&self.observations)
    }
}

impl From<Vec<Observation>> for ObservationSet {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}
