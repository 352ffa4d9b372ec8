//! Application constants for the eBird export reader
//!
//! This module contains the archive layout, the column rename table and the
//! identification markers used throughout the reader.

// =============================================================================
// Archive Layout
// =============================================================================

/// Name of the CSV member inside an eBird "Download My Data" archive
pub const CSV_FILENAME: &str = "MyEBirdData.csv";

/// Default field delimiter of the export
pub const DEFAULT_DELIMITER: char = ',';

// =============================================================================
// Column Mapping
// =============================================================================

/// Export column header -> canonical field name.
///
/// Columns not listed here pass through with their original header.
pub const COLUMN_TRANSFORMS: &[(&str, &str)] = &[
    ("Submission ID", "submissionId"),
    ("Common Name", "commonName"),
    ("Scientific Name", "scientificName"),
    ("Taxonomic Order", "taxonomicOrder"),
    ("Count", "count"),
    ("State/Province", "stateProvince"),
    ("County", "county"),
    ("Location ID", "locationId"),
    ("Location", "location"),
    ("Latitude", "latitude"),
    ("Longitude", "longitude"),
    ("Date", "date"),
    ("Time", "time"),
    ("Protocol", "protocol"),
    ("Duration (Min)", "durationMin"),
    ("All Obs Reported", "allObsReported"),
    ("Distance Traveled (km)", "distanceTraveledKm"),
    ("Area Covered (ha)", "areaCoveredHa"),
    ("Number of Observers", "numberOfObservers"),
    ("Breeding Code", "breedingCode"),
    ("Observation Details", "observationDetails"),
    ("Checklist Comments", "checklistComments"),
    ("ML Catalog Numbers", "mlCatalogNumbers"),
];

/// Canonical field names
pub mod fields {
    pub const SUBMISSION_ID: &str = "submissionId";
    pub const COMMON_NAME: &str = "commonName";
    pub const SCIENTIFIC_NAME: &str = "scientificName";
    pub const TAXONOMIC_ORDER: &str = "taxonomicOrder";
    pub const COUNT: &str = "count";
    pub const STATE_PROVINCE: &str = "stateProvince";
    pub const COUNTY: &str = "county";
    pub const LOCATION_ID: &str = "locationId";
    pub const LOCATION: &str = "location";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const PROTOCOL: &str = "protocol";
    pub const DURATION_MIN: &str = "durationMin";
    pub const ALL_OBS_REPORTED: &str = "allObsReported";
    pub const DISTANCE_TRAVELED_KM: &str = "distanceTraveledKm";
    pub const AREA_COVERED_HA: &str = "areaCoveredHa";
    pub const NUMBER_OF_OBSERVERS: &str = "numberOfObservers";
    pub const BREEDING_CODE: &str = "breedingCode";
    pub const OBSERVATION_DETAILS: &str = "observationDetails";
    pub const CHECKLIST_COMMENTS: &str = "checklistComments";
    pub const ML_CATALOG_NUMBERS: &str = "mlCatalogNumbers";
}

// =============================================================================
// Identification Markers
// =============================================================================

/// Marker of a genus-level ("spuh") identification, e.g. `Anas sp.`
pub const SPUH_MARKER: &str = "sp.";

/// Marker of a slash identification, e.g. `Anas platyrhynchos/rubripes`
pub const SLASH_MARKER: &str = "/";

/// Case-insensitive pattern of a domestic-type identification
pub const DOMESTIC_PATTERN: &str = r"(?i)\(domestic";

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Observation date format in the export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted observation time formats, tried in order
pub const TIME_FORMATS: &[&str] = &["%I:%M %p", "%H:%M", "%H:%M:%S", "%I:%M:%S %p"];

// =============================================================================
// Reference Taxonomy Columns
// =============================================================================

/// Taxon order column of the reference taxonomy CSV (whitespace removed)
pub const TAXONOMY_ORDER_COLUMN: &str = "TAXON_ORDER";

/// Species group column of the reference taxonomy CSV (whitespace removed)
pub const TAXONOMY_GROUP_COLUMN: &str = "SPECIES_GROUP";

// =============================================================================
// Output
// =============================================================================

/// Default log level when neither `RUST_LOG` nor configuration say otherwise
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Export file names written by the CLI
pub mod output_files {
    pub const OBSERVATIONS: &str = "observations.json";
    pub const SPECIES: &str = "species.json";
    pub const LOCATIONS: &str = "locations.json";
    pub const FAMILIES: &str = "families.json";
}
