//! eBird MyData Library
//!
//! A Rust library for reading the personal observation export produced by
//! eBird's "Download My Data" and deriving life-list views from it.
//!
//! This library provides tools for:
//! - Loading the `MyEBirdData.csv` member out of the export ZIP
//! - Decoding and normalising the CSV into typed observation records
//! - Annotating records with observed year/month, binomial name, lifer and
//!   first-of-year flags
//! - Filtering countable sightings for a year or month, and reducing them to
//!   the first sighting per species
//! - Grouping observations by species, taxonomic family and location
//!
//! ```rust
//! use ebird_mydata::{parse_data, get_filtered_observations, YearFilter};
//!
//! # fn example(csv_text: &str) -> ebird_mydata::Result<()> {
//! let observations = parse_data(csv_text)?;
//! let life_list = get_filtered_observations(&observations, YearFilter::Life);
//! println!("{} species", life_list.len());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod taxonomy;

pub use archive::{DataSource, extract_member, load_data_file, load_data_file_with};
pub use config::ReaderConfig;
pub use error::{MyDataError, Result};
pub use models::{
    FamilyGroup, FieldValue, LocationGroup, Observation, ObservationStats, PeriodFilter,
    RawRecord, SpeciesGroup, TaxonomicRange, YearFilter,
};
pub use parser::{parse_data, parse_data_with};
pub use processor::{
    ObservationSet, annotate, filter_observations, get_filtered_observations, group_by_family,
    group_by_location, group_by_species, months_with_observations,
};
pub use taxonomy::TaxonomyTable;
