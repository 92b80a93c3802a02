use dashkinds::kinds::dashboard;
use dashkinds::roundtrip::{self, DifferenceKind};

mod stubs;

#[test]
fn test_full_dashboard_round_trips() {
    let result = roundtrip::check(stubs::dashboard::VALID_PAYLOAD_1).unwrap();
    assert!(result.is_faithful(), "{:?}", result.differences);
}

#[test]
fn test_minimal_dashboard_round_trips() {
    let result = roundtrip::check(stubs::dashboard::VALID_MINIMAL).unwrap();
    assert!(result.is_faithful(), "{:?}", result.differences);
}

#[test]
fn test_threshold_steps_keep_absent_and_null_values_apart() {
    let result = roundtrip::check(stubs::dashboard::THRESHOLD_WITHOUT_VALUE).unwrap();
    assert!(result.is_faithful(), "{:?}", result.differences);

    let reencoded = dashboard::to_value(&result.dashboard).unwrap();
    let steps = &reencoded["panels"][0]["fieldConfig"]["defaults"]["thresholds"]["steps"];
    assert!(steps[0].get("value").is_none());
    assert!(steps[1]["value"].is_null());
    assert_eq!(steps[2]["value"], 75.0);
}

#[test]
fn test_reencoded_dashboard_decodes_to_same_value() {
    let dash = dashboard::from_str(stubs::dashboard::VALID_PAYLOAD_1).unwrap();
    let again = dashboard::from_str(&dashboard::to_string(&dash).unwrap()).unwrap();
    assert_eq!(dash, again);
}

#[test]
fn test_lossy_dashboard_reports_differences() {
    let result = roundtrip::check(stubs::dashboard::LOSSY_PAYLOAD).unwrap();
    assert!(!result.is_faithful());
    let paths: Vec<(&str, DifferenceKind)> = result
        .differences
        .iter()
        .map(|d| (d.path.as_str(), d.kind))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("/title", DifferenceKind::Missing),
            ("/unknownKey", DifferenceKind::Missing)
        ]
    );
}

#[test]
fn test_invalid_dashboard_is_an_error() {
    assert!(roundtrip::check(stubs::dashboard::INVALID_ENUM_PAYLOAD).is_err());
    assert!(roundtrip::check(stubs::dashboard::INVALID_JSON).is_err());
}
