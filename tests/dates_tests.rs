use rateforge::config::{DateRange, ScenarioParams};
use rateforge::dates::{validate_scenario_dates, validation_message, ScenarioDateError, SeasonKind};
use rstest::rstest;

fn valid_scenario() -> ScenarioParams {
    let mut params = ScenarioParams::builder()
        .valid_from("2025-12-01")
        .valid_to("2026-04-15")
        .build();
    params.regular_seasons = vec![
        DateRange::new("r1", "2025-12-01", "2025-12-19"),
        DateRange::new("r2", "2026-01-07", "2026-04-15"),
    ];
    params.promo_seasons = vec![DateRange::new("p1", "2025-12-20", "2026-01-06")];
    params
}

#[test]
fn test_valid_scenario_passes() {
    let params = valid_scenario();
    assert_eq!(validate_scenario_dates(&params), Ok(()));
    assert_eq!(validation_message(&params), None);
}

#[rstest]
#[case::missing_from("", "2026-04-15", ScenarioDateError::MissingValidity)]
#[case::missing_to("2025-12-01", " ", ScenarioDateError::MissingValidity)]
#[case::inverted("2026-05-01", "2026-04-15", ScenarioDateError::ValidityInverted)]
#[case::garbage("01/12/2025", "2026-04-15", ScenarioDateError::InvalidDate("01/12/2025".into()))]
fn test_validity_window(#[case] from: &str, #[case] to: &str, #[case] expected: ScenarioDateError) {
    let mut params = valid_scenario();
    params.valid_from = from.to_string();
    params.valid_to = to.to_string();
    assert_eq!(validate_scenario_dates(&params), Err(expected));
}

#[test]
fn test_same_day_validity_is_allowed() {
    let mut params = valid_scenario();
    params.valid_from = "2025-12-01".into();
    params.valid_to = "2025-12-01".into();
    // Window passes, seasons still checked independently of it
    assert_eq!(validate_scenario_dates(&params), Ok(()));
}

#[test]
fn test_empty_lists_regular_reported_first() {
    let mut params = valid_scenario();
    params.regular_seasons.clear();
    params.promo_seasons.clear();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::NoSeasons(SeasonKind::Regular))
    );

    let mut params = valid_scenario();
    params.promo_seasons.clear();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::NoSeasons(SeasonKind::Promo))
    );
}

#[test]
fn test_window_checked_before_lists() {
    let mut params = valid_scenario();
    params.valid_from.clear();
    params.regular_seasons.clear();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::MissingValidity)
    );
}

#[test]
fn test_incomplete_and_inverted_ranges() {
    let mut params = valid_scenario();
    params.promo_seasons[0].end.clear();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::IncompleteRange {
            kind: SeasonKind::Promo,
            id: "p1".into()
        })
    );

    let mut params = valid_scenario();
    params.regular_seasons[1] = DateRange::new("r2", "2026-04-15", "2026-01-07");
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::InvertedRange {
            kind: SeasonKind::Regular,
            id: "r2".into()
        })
    );
}

#[test]
fn test_range_integrity_checked_before_overlaps() {
    let mut params = valid_scenario();
    // r1 overlaps p1, but p1 itself is broken: integrity wins
    params.regular_seasons[0].end = "2025-12-25".into();
    params.promo_seasons[0].start.clear();
    assert!(matches!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::IncompleteRange { .. })
    ));
}

#[test]
fn test_self_overlap_detected_inclusive() {
    let mut params = valid_scenario();
    // Shares a single boundary day with r1
    params.regular_seasons[1].start = "2025-12-19".into();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::OverlappingRanges {
            kind: SeasonKind::Regular,
            first: "r1".into(),
            second: "r2".into()
        })
    );
}

#[test]
fn test_self_overlap_checked_before_cross_overlap() {
    let mut params = valid_scenario();
    params.promo_seasons = vec![
        DateRange::new("p1", "2025-12-10", "2026-01-06"),
        DateRange::new("p2", "2026-01-01", "2026-01-03"),
    ];
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::OverlappingRanges {
            kind: SeasonKind::Promo,
            first: "p1".into(),
            second: "p2".into()
        })
    );
}

#[test]
fn test_cross_overlap_detected() {
    let mut params = valid_scenario();
    params.promo_seasons[0].end = "2026-01-07".into();
    assert_eq!(
        validate_scenario_dates(&params),
        Err(ScenarioDateError::CrossOverlap {
            regular: "r2".into(),
            promo: "p1".into()
        })
    );
    let msg = validation_message(&params).unwrap();
    assert!(msg.contains("r2") && msg.contains("p1"), "message was: {}", msg);
}
