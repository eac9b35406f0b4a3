//! Author reference derivation.

use crate::parse::types::Person;

/// Prefix marking an author whose record carries no ORCID.
pub const MISSING_ORCID_PREFIX: &str = "MISSING_ORCID:";

/// Derive the `@id` used to reference a contributor from the root dataset.
///
/// An ORCID is used verbatim; a person without one still gets a reference,
/// via a placeholder identifier built from their name. An empty ORCID
/// counts as missing.
pub fn person_ref(person: &Person) -> String {
    match person.orcid.as_deref() {
        Some(orcid) if !orcid.is_empty() => orcid.to_string(),
        _ => format!(
            "{}{} {}",
            MISSING_ORCID_PREFIX, person.first_name, person.last_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str, orcid: Option<&str>) -> Person {
        serde_json::from_value(serde_json::json!({
            "firstName": first,
            "lastName": last,
            "orcid": orcid,
        }))
        .unwrap()
    }

    #[test]
    fn orcid_is_used_verbatim() {
        let p = person("Grace", "Hopper", Some("0000-0001-2345-6789"));
        assert_eq!(person_ref(&p), "0000-0001-2345-6789");
    }

    #[test]
    fn missing_orcid_yields_placeholder() {
        let p = person("Ada", "Lovelace", None);
        assert_eq!(person_ref(&p), "MISSING_ORCID:Ada Lovelace");
    }

    #[test]
    fn empty_orcid_counts_as_missing() {
        let p = person("Ada", "Lovelace", Some(""));
        assert_eq!(person_ref(&p), "MISSING_ORCID:Ada Lovelace");
    }
}
