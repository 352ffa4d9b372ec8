//! End-to-end scenarios over annotated data

use super::*;
use crate::models::{PeriodFilter, YearFilter};
use crate::processor::{ObservationSet, annotate, get_filtered_observations, months_with_observations};

#[test]
fn test_two_species_scenario() {
    let data = annotate(two_species_fixture());

    assert_eq!(submission_ids(&data), vec!["S1", "S2", "S3"]);
    assert!(data[0].is_lifer);
    assert!(!data[0].is_first_of_year);
    assert!(!data[1].is_lifer);
    assert!(data[1].is_first_of_year);
    assert!(data[2].is_lifer);

    let year_2021 = get_filtered_observations(&data, 2021);
    assert_eq!(submission_ids(year_2021), vec!["S2"]);

    let life = get_filtered_observations(&data, YearFilter::Life);
    assert_eq!(submission_ids(life), vec!["S1", "S3"]);
}

#[test]
fn test_month_extraction_scenario() {
    let data = annotate(vec![
        create_observation("mar", 20, "Anas acuta", "2022-03-10"),
        create_observation("jan", 10, "Anas crecca", "2022-01-02"),
        create_observation("spuh", 5, "Anas sp.", "2022-01-20"),
        create_observation("other-year", 10, "Anas crecca", "2021-07-01"),
    ]);

    assert_eq!(months_with_observations(&data, 2022), vec![1, 3]);
    assert_eq!(months_with_observations(&data, YearFilter::Life), vec![1, 3, 7]);
    assert!(months_with_observations(&data, 1990).is_empty());
}

#[test]
fn test_months_sort_numerically() {
    let data = annotate(vec![
        create_observation("dec", 10, "Anas crecca", "2022-12-01"),
        create_observation("feb", 20, "Anas acuta", "2022-02-01"),
        create_observation("oct", 30, "Aix sponsa", "2022-10-01"),
    ]);
    assert_eq!(months_with_observations(&data, 2022), vec![2, 10, 12]);
}

#[test]
fn test_observation_set_views() {
    let set = ObservationSet::new(two_species_fixture());

    assert_eq!(set.len(), 3);
    assert_eq!(set.first_sightings(&PeriodFilter::life()).len(), 2);
    assert_eq!(set.all_sightings(&PeriodFilter::year(2020)).len(), 2);
    assert_eq!(set.months_with_observations(YearFilter::Year(2020)), vec![3, 5]);
    assert_eq!(set.by_species().len(), 2);
    assert_eq!(set.by_location().len(), 1);

    let stats = set.stats();
    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.dated_records, 3);
    assert_eq!(stats.species, 2);
    assert_eq!(stats.first_of_year, 1);
    assert_eq!(stats.locations, 1);
    assert_eq!(stats.first_date.map(|d| d.to_string()).as_deref(), Some("2020-03-01"));
    assert_eq!(stats.last_date.map(|d| d.to_string()).as_deref(), Some("2021-04-01"));
}
