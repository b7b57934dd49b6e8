//! Tests for config

use super::*;
use proptest::prelude::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// Malformed TOML never aborts loading: defaults come back with a warning
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[search\nlimit = 5",          // Missing closing bracket
            "[search]\nalgorithm = fuzzy", // Missing quotes
            "[search]\n limit",            // Missing value
            "search]\nlimit = 5",          // Missing opening bracket
            "[server]\nbind = \"0.0.0.0",  // Unterminated string
        ])
    ) {
        let file = write_config(malformed);
        let result = load_config_from(file.path());

        prop_assert!(result.warning.is_some(), "Malformed TOML should produce a warning");
        prop_assert_eq!(result.config.search.limit, DEFAULT_LIMIT);
        prop_assert_eq!(result.config.search.algorithm, MatchAlgorithm::Approximate);
    }
}

#[test]
fn test_config_path_is_stable() {
    let path1 = get_config_path();
    let path2 = get_config_path();
    assert_eq!(path1, path2);

    let path_str = path1.to_string_lossy();
    assert!(
        path_str.ends_with("prk-suggest/config.toml")
            || path_str.ends_with("prk-suggest\\config.toml"),
        "unexpected config path: {}",
        path_str
    );
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("absent.toml"));

    assert!(result.warning.is_none());
    assert_eq!(result.config.search.threshold, DEFAULT_THRESHOLD);
    assert_eq!(result.config.search.limit, DEFAULT_LIMIT);
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config(
        r#"
[catalog]
path = "catalog.json"

[search]
limit = 3
"#,
    );
    let result = load_config_from(file.path());

    assert!(result.warning.is_none());
    assert_eq!(result.config.search.limit, 3);
    assert_eq!(
        result.config.catalog.path,
        Some(std::path::PathBuf::from("catalog.json"))
    );
}

#[test]
fn test_invalid_value_type_produces_warning() {
    let file = write_config("[search]\nlimit = \"twelve\"\n");
    let result = load_config_from(file.path());

    let warning = result.warning.expect("expected a warning");
    assert!(warning.starts_with("Invalid config"));
    assert_eq!(result.config.search.limit, DEFAULT_LIMIT);
}

#[test]
fn test_directory_path_produces_read_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(dir.path());

    let warning = result.warning.expect("expected a warning");
    assert!(warning.starts_with("Failed to read config"));
}
