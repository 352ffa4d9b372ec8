//! Partitioning of annotated observations by species, family and location
//!
//! Each partitioner is a single pass that appends groups in first-seen order
//! and appends later records to the group they belong to. Records without a
//! usable key are left out of that partition.

use crate::models::{FamilyGroup, LocationGroup, Observation, SpeciesGroup};
use crate::taxonomy::TaxonomyTable;
use std::collections::HashMap;
use tracing::debug;

/// Group observations by taxonomic order, skipping records without one
pub fn group_by_species(annotated: &[Observation]) -> Vec<SpeciesGroup<'_>> {
    let mut groups: Vec<SpeciesGroup<'_>> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for observation in annotated {
        let Some(order) = observation.taxonomic_order.filter(|order| *order != 0) else {
            continue;
        };

        match index.get(&order) {
            Some(&position) => groups[position].observations.push(observation),
            None => {
                index.insert(order, groups.len());
                groups.push(SpeciesGroup {
                    taxonomic_order: order,
                    common_name: observation.common_name.clone(),
                    observations: vec![observation],
                });
            }
        }
    }

    debug!("Grouped observations into {} species", groups.len());
    groups
}

/// Group observations by location ID, skipping records without one
pub fn group_by_location(annotated: &[Observation]) -> Vec<LocationGroup<'_>> {
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for observation in annotated {
        let location_id = observation.location_id.as_str();
        if location_id.is_empty() {
            continue;
        }

        match index.get(location_id) {
            Some(&position) => groups[position].observations.push(observation),
            None => {
                index.insert(location_id, groups.len());
                groups.push(LocationGroup {
                    location_id: location_id.to_string(),
                    location: observation.location.clone(),
                    observations: vec![observation],
                });
            }
        }
    }

    debug!("Grouped observations into {} locations", groups.len());
    groups
}

/// Group observations by the family range containing their taxonomic order.
///
/// Records without a taxonomic order, or whose order falls outside every
/// range, are left out.
pub fn group_by_family<'a>(
    annotated: &'a [Observation],
    taxonomy: &TaxonomyTable,
) -> Vec<FamilyGroup<'a>> {
    let mut groups: Vec<FamilyGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unmatched = 0usize;

    for observation in annotated {
        let Some(order) = observation.taxonomic_order.filter(|order| *order != 0) else {
            continue;
        };
        let Some(family) = taxonomy.family_for(order) else {
            unmatched += 1;
            continue;
        };

        match index.get(family) {
            Some(&position) => groups[position].observations.push(observation),
            None => {
                index.insert(family.to_string(), groups.len());
                groups.push(FamilyGroup {
                    family_name: family.to_string(),
                    observations: vec![observation],
                });
            }
        }
    }

    if unmatched > 0 {
        debug!("{} observations fell outside every family range", unmatched);
    }
    debug!("Grouped observations into {} families", groups.len());
    groups
}
