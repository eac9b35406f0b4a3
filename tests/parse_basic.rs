//! Integration tests for the parse phase: investigation JSON → typed record.

use arc_rocrate::parse;

#[test]
fn parse_example_investigation() {
    let json = include_str!("fixtures/investigation_basic.json");
    let inv = parse::parse(json).expect("Should parse successfully");
    assert_eq!(inv.identifier.as_deref(), Some("ArcPrototype"));
    assert_eq!(inv.public_release_date.as_deref(), Some("2023-01-15"));
    assert_eq!(inv.people.len(), 3);
    assert_eq!(inv.publications.len(), 2);
    assert_eq!(inv.studies.len(), 2);
    assert_eq!(inv.studies[1].assays.len(), 2);
}

#[test]
fn parse_normalizes_both_person_shapes() {
    let json = include_str!("fixtures/investigation_basic.json");
    let inv = parse::parse(json).expect("Should parse");

    // Full record with ORCID
    assert_eq!(inv.people[0].first_name, "Grace");
    assert_eq!(inv.people[0].orcid.as_deref(), Some("0000-0001-2345-6789"));

    // Record without ORCID
    assert_eq!(inv.people[1].last_name, "Turing");
    assert!(inv.people[1].orcid.is_none());

    // Bare string, split into first/last
    assert_eq!(inv.people[2].first_name, "Ada");
    assert_eq!(inv.people[2].last_name, "Lovelace");
    assert!(inv.people[2].orcid.is_none());
}

#[test]
fn parse_keeps_missing_doi_as_none() {
    let json = include_str!("fixtures/investigation_basic.json");
    let inv = parse::parse(json).expect("Should parse");
    assert_eq!(inv.publications[0].doi.as_deref(), Some("10.1000/xyz123"));
    assert!(inv.publications[1].doi.is_none());
}

#[test]
fn parse_invalid_json_returns_error() {
    let result = parse::parse("not valid json");
    assert!(result.is_err());
}

#[test]
fn parse_rejects_investigation_without_studies() {
    let json = r#"{"identifier": "X", "people": [], "publications": []}"#;
    assert!(parse::parse(json).is_err());
}
