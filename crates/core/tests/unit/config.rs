//! # Configuration Tests
//!
//! Defaults, JSON deserialization, validation and capacity sizing.

use std::io::Write;

use pagesim_core::common::SimError;
use pagesim_core::config::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.policy.kind, PolicyKind::Cflru);
    assert_eq!(config.policy.cflru.window_ratio, 0.25);
    assert_eq!(config.policy.cflru.mode, WindowMode::Dynamic);
    assert_eq!(config.policy.cflru.dynamic_period, 1000);
    assert_eq!(config.sizing.capacity, None);
    assert_eq!(config.sizing.ratios, vec![0.001, 0.01, 0.1]);
    assert_eq!(config.sizing.min_capacity, 5);
    assert_eq!(config.trace.page_size_kb, 4);
    assert!(!config.report.verbose);
    assert_eq!(config.report.show_cache_limit, 20);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_gives_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.policy.cflru, CflruConfig::default());
    assert_eq!(config.sizing, SizingConfig::default());
}

#[rstest]
#[case("\"Lru\"", PolicyKind::Lru)]
#[case("\"LRU\"", PolicyKind::Lru)]
#[case("\"cflru\"", PolicyKind::Cflru)]
#[case("\"BeladyMin\"", PolicyKind::BeladyMin)]
#[case("\"OPT\"", PolicyKind::BeladyMin)]
fn test_policy_kind_names(#[case] name: &str, #[case] expected: PolicyKind) {
    let json = format!(r#"{{ "policy": {{ "kind": {name} }} }}"#);
    assert_eq!(Config::from_json_str(&json).unwrap().policy.kind, expected);
}

#[test]
fn test_full_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "policy": {{ "kind": "Cflru", "cflru": {{ "window_ratio": 0.5, "mode": "static", "dynamic_period": 50 }} }},
            "sizing": {{ "ratios": [0.5], "min_capacity": 2 }},
            "trace": {{ "page_size_kb": 8 }},
            "report": {{ "verbose": true, "show_cache_limit": 4 }}
        }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(
        config.policy.cflru,
        CflruConfig {
            window_ratio: 0.5,
            mode: WindowMode::Static,
            dynamic_period: 50,
        }
    );
    assert_eq!(config.sizing.ratios, vec![0.5]);
    assert_eq!(config.trace.page_size_kb, 8);
    assert!(config.report.verbose);
    assert_eq!(config.report.show_cache_limit, 4);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = Config::from_json_str("{ policy: }").unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)));
}

#[rstest]
#[case(r#"{ "policy": { "cflru": { "window_ratio": 1.5 } } }"#)]
#[case(r#"{ "policy": { "cflru": { "dynamic_period": 0 } } }"#)]
#[case(r#"{ "sizing": { "capacity": 0 } }"#)]
#[case(r#"{ "sizing": { "min_capacity": 0 } }"#)]
#[case(r#"{ "sizing": { "ratios": [] } }"#)]
#[case(r#"{ "sizing": { "ratios": [0.1, -0.5] } }"#)]
#[case(r#"{ "trace": { "page_size_kb": 0 } }"#)]
fn test_out_of_range_values_are_rejected(#[case] json: &str) {
    let err = Config::from_json_str(json).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)), "{err}");
}

#[test]
fn test_explicit_capacity_allows_empty_ratios() {
    let config = Config::from_json_str(r#"{ "sizing": { "capacity": 64, "ratios": [] } }"#).unwrap();
    assert_eq!(config.sizing.capacities(1_000_000), vec![64]);
}

#[rstest]
#[case(10_000, vec![10, 100, 1000])]
#[case(100, vec![5, 5, 10])]
#[case(0, vec![5, 5, 5])]
fn test_capacities_scale_with_working_set(#[case] working_set: usize, #[case] expected: Vec<usize>) {
    assert_eq!(SizingConfig::default().capacities(working_set), expected);
}
