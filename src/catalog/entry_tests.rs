use super::*;

#[test]
fn test_parses_plain_field_names() {
    let entry: CatalogEntry =
        serde_json::from_str(r#"{"description": "Paracetamol 500 mg", "code": "P01"}"#).unwrap();
    assert_eq!(entry, CatalogEntry::new("Paracetamol 500 mg", "P01"));
}

#[test]
fn test_parses_prk_field_names() {
    let entry: CatalogEntry = serde_json::from_str(
        r#"{"prk_description": "Naproxen tablet 250 mg", "prk_code": "N01"}"#,
    )
    .unwrap();
    assert_eq!(entry.description, "Naproxen tablet 250 mg");
    assert_eq!(entry.code, "N01");
}

#[test]
fn test_numeric_code_becomes_string() {
    let entry: CatalogEntry =
        serde_json::from_str(r#"{"prk_description": "Ibuprofen 400 mg", "prk_code": 14303}"#)
            .unwrap();
    assert_eq!(entry.code, "14303");
}

#[test]
fn test_missing_code_is_rejected() {
    let result: Result<CatalogEntry, _> = serde_json::from_str(r#"{"description": "Ibuprofen"}"#);
    assert!(result.is_err());
}

#[test]
fn test_fractional_code_is_rejected() {
    let result: Result<CatalogEntry, _> =
        serde_json::from_str(r#"{"description": "Ibuprofen", "code": 1.5}"#);
    assert!(result.is_err());
}

#[test]
fn test_serializes_with_plain_field_names() {
    let json = serde_json::to_string(&CatalogEntry::new("Omeprazol 20 mg", "O01")).unwrap();
    assert_eq!(json, r#"{"description":"Omeprazol 20 mg","code":"O01"}"#);
}
