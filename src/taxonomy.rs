//! Taxonomic family range table.
//!
//! A read-only list of `{min, max, family}` intervals over taxonomic order,
//! loaded once and used to classify observations by family. The table is
//! kept ascending and non-overlapping, so lookups are a binary search.

use crate::constants::{TAXONOMY_GROUP_COLUMN, TAXONOMY_ORDER_COLUMN};
use crate::error::{MyDataError, Result};
use crate::models::TaxonomicRange;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyTable {
    ranges: Vec<TaxonomicRange>,
}

impl TaxonomyTable {
    /// Build a table from ranges already in ascending order
    pub fn new(ranges: Vec<TaxonomicRange>) -> Result<Self> {
        for range in &ranges {
            if range.min_order > range.max_order {
                return Err(MyDataError::invalid_taxonomy(format!(
                    "range {}..={} for '{}' is inverted",
                    range.min_order, range.max_order, range.family_name
                )));
            }
        }
        for pair in ranges.windows(2) {
            if pair[1].min_order <= pair[0].max_order {
                return Err(MyDataError::invalid_taxonomy(format!(
                    "range {}..={} ('{}') overlaps or precedes {}..={} ('{}')",
                    pair[1].min_order,
                    pair[1].max_order,
                    pair[1].family_name,
                    pair[0].min_order,
                    pair[0].max_order,
                    pair[0].family_name
                )));
            }
        }
        Ok(Self { ranges })
    }

    /// Parse the ranged taxonomy JSON: `[{"min": 1, "max": 9, "fam": "..."}]`
    pub fn from_json(text: &str) -> Result<Self> {
        let ranges: Vec<TaxonomicRange> = serde_json::from_str(text)?;
        Self::new(ranges)
    }

    /// Collapse a reference taxonomy CSV into family ranges.
    ///
    /// Consecutive rows sharing a species group become one range spanning
    /// their first and last taxon order. Whitespace in header names is
    /// ignored.
    pub fn from_taxonomy_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .collect();
        let column = |name: &str| {
            headers.iter().position(|header| header == name).ok_or_else(|| {
                MyDataError::invalid_taxonomy(format!("taxonomy CSV has no {} column", name))
            })
        };
        let order_index = column(TAXONOMY_ORDER_COLUMN)?;
        let group_index = column(TAXONOMY_GROUP_COLUMN)?;

        let mut ranges: Vec<TaxonomicRange> = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result?;
            let order = record
                .get(order_index)
                .and_then(|value| value.trim().parse::<u32>().ok());
            let group = record.get(group_index).map(str::trim).unwrap_or_default();

            let Some(order) = order else {
                skipped += 1;
                continue;
            };

            match ranges.last_mut() {
                Some(current) if current.family_name == group => current.max_order = order,
                _ => ranges.push(TaxonomicRange::new(order, order, group)),
            }
        }

        if skipped > 0 {
            warn!("Skipped {} taxonomy rows without a taxon order", skipped);
        }
        debug!("Collapsed taxonomy into {} family ranges", ranges.len());
        Self::new(ranges)
    }

    /// Load a table from disk; `.csv` files are read as a reference
    /// taxonomy, anything else as ranged JSON
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let table = if is_csv {
            Self::from_taxonomy_csv(&text)?
        } else {
            Self::from_json(&text)?
        };
        info!(
            "Loaded {} family ranges from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Family whose range contains `order`
    pub fn family_for(&self, order: u32) -> Option<&str> {
        let index = self.ranges.partition_point(|range| range.max_order < order);
        self.ranges
            .get(index)
            .filter(|range| range.contains(order))
            .map(|range| range.family_name.as_str())
    }

    pub fn ranges(&self) -> &[TaxonomicRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
