//! Core data structures and types for eBird export analysis.
//!
//! Defines the decoded cell values, the canonical observation record with its
//! derived annotations, period filters, taxonomy ranges and the grouping
//! results built over annotated observations.

use crate::constants::{DATE_FORMAT, TIME_FORMATS};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A single decoded CSV cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Infer the most specific value type for a raw cell
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Null;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return FieldValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return FieldValue::Bool(false);
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return FieldValue::Int(value);
        }
        if looks_numeric(trimmed) {
            if let Ok(value) = trimmed.parse::<f64>() {
                if value.is_finite() {
                    return FieldValue::Float(value);
                }
            }
        }
        FieldValue::Text(raw.to_string())
    }

    /// Keep the raw cell as text, only mapping empty cells to null
    pub fn text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            FieldValue::Null
        } else {
            FieldValue::Text(raw.to_string())
        }
    }

    /// Render the value as text; null renders as `None`
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(value) => Some(value.to_string()),
            FieldValue::Int(value) => Some(value.to_string()),
            FieldValue::Float(value) => Some(value.to_string()),
            FieldValue::Text(value) => Some(value.clone()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            FieldValue::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            FieldValue::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            FieldValue::Text(value) => value.trim().parse().ok().filter(|v: &f64| v.is_finite()),
            _ => None,
        }
    }

    /// Booleans, plus the `1`/`0` encoding the export uses for flags
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            FieldValue::Int(value) => Some(*value != 0),
            FieldValue::Text(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        && value.chars().any(|c| c.is_ascii_digit())
}

/// A decoded CSV row: canonical field name -> value, in column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub fields: Vec<(String, FieldValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// First value stored under `name`
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One sighting from the export, plus the annotations derived from it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Observation {
    pub submission_id: String,
    pub common_name: String,
    pub scientific_name: String,
    /// Species identity and global ordering key
    pub taxonomic_order: Option<u32>,
    /// A number, or `X` when the count was not recorded
    pub count: FieldValue,
    pub state_province: String,
    pub county: String,
    pub location_id: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// ISO `YYYY-MM-DD`
    pub date: Option<String>,
    pub time: Option<String>,
    pub protocol: String,
    pub duration_min: Option<f64>,
    pub all_obs_reported: Option<bool>,
    pub distance_traveled_km: Option<f64>,
    pub area_covered_ha: Option<f64>,
    pub number_of_observers: Option<u32>,
    pub breeding_code: Option<String>,
    pub observation_details: Option<String>,
    pub checklist_comments: Option<String>,
    pub ml_catalog_numbers: Option<String>,

    /// Columns without a canonical name, carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_lifer: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_first_of_year: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Observation {
    /// Date and time composed into a single timestamp.
    ///
    /// A missing or unrecognised time counts as midnight; a missing or
    /// unparseable date yields `None`, which orders before every timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?.trim(), DATE_FORMAT).ok()?;
        let time = self
            .time
            .as_deref()
            .and_then(parse_time)
            .unwrap_or(NaiveTime::MIN);
        Some(date.and_time(time))
    }

    /// Whether the annotator has derived a year and month for this record
    pub fn is_dated(&self) -> bool {
        self.observed_year.is_some() && self.observed_month.is_some()
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

/// Year selector for period filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFilter {
    /// Every year of the observer's life
    Life,
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::Life => true,
            YearFilter::Year(wanted) => *wanted == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::Life => write!(f, "life"),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for YearFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("life") {
            return Ok(YearFilter::Life);
        }
        s.parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| format!("expected a year or 'life', got '{}'", s))
    }
}

impl From<i32> for YearFilter {
    fn from(year: i32) -> Self {
        YearFilter::Year(year)
    }
}

/// Year plus optional month window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFilter {
    pub year: YearFilter,
    pub month: Option<u32>,
}

impl PeriodFilter {
    pub fn life() -> Self {
        Self {
            year: YearFilter::Life,
            month: None,
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            year: YearFilter::Year(year),
            month: None,
        }
    }

    /// Restrict to one month; `0` clears the month restriction
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month).filter(|month| *month != 0);
        self
    }

    /// A month of `Some(0)` counts as no month restriction
    pub fn matches(&self, year: i32, month: u32) -> bool {
        self.year.matches(year)
            && self
                .month
                .filter(|wanted| *wanted != 0)
                .is_none_or(|wanted| wanted == month)
    }
}

impl From<YearFilter> for PeriodFilter {
    fn from(year: YearFilter) -> Self {
        Self { year, month: None }
    }
}

impl From<i32> for PeriodFilter {
    fn from(year: i32) -> Self {
        Self::year(year)
    }
}

/// A contiguous span of taxonomic orders belonging to one family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomicRange {
    #[serde(rename = "min")]
    pub min_order: u32,
    #[serde(rename = "max")]
    pub max_order: u32,
    #[serde(rename = "fam")]
    pub family_name: String,
}

impl TaxonomicRange {
    pub fn new(min_order: u32, max_order: u32, family_name: impl Into<String>) -> Self {
        Self {
            min_order,
            max_order,
            family_name: family_name.into(),
        }
    }

    pub fn contains(&self, order: u32) -> bool {
        self.min_order <= order && order <= self.max_order
    }
}

/// All observations of one species
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesGroup<'a> {
    pub taxonomic_order: u32,
    pub common_name: String,
    pub observations: Vec<&'a Observation>,
}

/// All observations whose species falls in one family range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyGroup<'a> {
    pub family_name: String,
    pub observations: Vec<&'a Observation>,
}

/// All observations made at one location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup<'a> {
    pub location_id: String,
    pub location: String,
    pub observations: Vec<&'a Observation>,
}

/// Summary counts over an annotated observation list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObservationStats {
    pub total_records: usize,
    pub dated_records: usize,
    pub species: usize,
    pub first_of_year: usize,
    pub locations: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl ObservationStats {
    pub fn from_observations(observations: &[Observation]) -> Self {
        let mut stats = Self {
            total_records: observations.len(),
            ..Default::default()
        };
        let mut locations = HashSet::new();

        for observation in observations {
            if !observation.location_id.is_empty() {
                locations.insert(observation.location_id.as_str());
            }
            if !observation.is_dated() {
                continue;
            }
            stats.dated_records += 1;
            if observation.is_lifer {
                stats.species += 1;
            }
            if observation.is_first_of_year {
                stats.first_of_year += 1;
            }
            if let Some(date) = observation.timestamp().map(|ts| ts.date()) {
                stats.first_date = Some(stats.first_date.map_or(date, |d| d.min(date)));
                stats.last_date = Some(stats.last_date.map_or(date, |d| d.max(date)));
            }
        }

        stats.locations = locations.len();
        stats
    }

    pub fn summary(&self) -> String {
        let span = match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => "no dated records".to_string(),
        };
        format!(
            "{} records ({} dated) | {} species | {} locations | {}",
            self.total_records, self.dated_records, self.species, self.locations, span
        )
    }
}
