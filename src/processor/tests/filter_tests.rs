//! Tests for validity and period filtering

use super::*;
use crate::models::{PeriodFilter, YearFilter};
use crate::processor::{annotate, filter_observations, get_filtered_observations};

fn mixed_fixture() -> Vec<Observation> {
    annotate(vec![
        create_observation("spuh", 50, "Anas sp.", "2021-05-01"),
        create_observation("slash", 51, "Anas platyrhynchos/rubripes", "2021-05-01"),
        create_observation(
            "domestic",
            52,
            "Anas platyrhynchos (Domestic type)",
            "2021-05-01",
        ),
        create_observation("mallard", 53, "Anas platyrhynchos", "2021-05-01"),
        create_observation("teal", 40, "Anas crecca", "2021-06-15"),
        create_observation("teal-2020", 40, "Anas crecca", "2020-06-15"),
    ])
}

#[test]
fn test_uncertain_identifications_are_excluded() {
    let annotated = mixed_fixture();

    for period in [PeriodFilter::life(), PeriodFilter::year(2021)] {
        let all = filter_observations(&annotated, &period, true);
        let ids = submission_ids(all.iter().copied());
        assert!(!ids.contains(&"spuh".to_string()));
        assert!(!ids.contains(&"slash".to_string()));
        assert!(!ids.contains(&"domestic".to_string()));
        assert!(ids.contains(&"mallard".to_string()));
    }
}

#[test]
fn test_year_filter() {
    let annotated = mixed_fixture();
    let all_2020 = filter_observations(&annotated, &PeriodFilter::year(2020), true);
    assert_eq!(submission_ids(all_2020.iter().copied()), vec!["teal-2020"]);

    let none = filter_observations(&annotated, &PeriodFilter::year(1999), true);
    assert!(none.is_empty());
}

#[test]
fn test_month_filter() {
    let annotated = mixed_fixture();
    let june = filter_observations(&annotated, &PeriodFilter::life().with_month(6), true);
    assert_eq!(
        submission_ids(june.iter().copied()),
        vec!["teal-2020", "teal"]
    );

    let may_2021 = filter_observations(&annotated, &PeriodFilter::year(2021).with_month(5), true);
    assert_eq!(submission_ids(may_2021.iter().copied()), vec!["mallard"]);
}

#[test]
fn test_all_matches_are_chronological() {
    let annotated = annotate(vec![
        create_timed_observation("late", 10, "Anas crecca", "2021-01-01", "05:00 PM"),
        create_timed_observation("tie-b", 30, "Anas acuta", "2021-01-01", "07:00 AM"),
        create_timed_observation("tie-a", 20, "Mareca strepera", "2021-01-01", "07:00 AM"),
        create_timed_observation("early", 40, "Aix sponsa", "2020-01-01", "09:00 AM"),
    ]);

    let all = filter_observations(&annotated, &PeriodFilter::life(), true);
    assert_eq!(
        submission_ids(all.iter().copied()),
        vec!["early", "tie-a", "tie-b", "late"]
    );
}

#[test]
fn test_default_filter_reduces_to_first_per_species() {
    let annotated = mixed_fixture();
    let life = get_filtered_observations(&annotated, YearFilter::Life);
    assert_eq!(submission_ids(life.iter().copied()), vec!["teal-2020", "mallard"]);
}

#[test]
fn test_undated_records_are_excluded() {
    let mut undated = create_observation("undated", 10, "Anas crecca", "");
    undated.date = None;
    let annotated = annotate(vec![undated]);

    assert!(filter_observations(&annotated, &PeriodFilter::life(), true).is_empty());
    assert!(get_filtered_observations(&annotated, YearFilter::Life).is_empty());
}

#[test]
fn test_filter_does_not_modify_records() {
    let annotated = mixed_fixture();
    let before = annotated.clone();
    let _ = filter_observations(&annotated, &PeriodFilter::life(), false);
    let _ = filter_observations(&annotated, &PeriodFilter::year(2021), true);
    assert_eq!(annotated, before);
}
