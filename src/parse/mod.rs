//! Parse phase: investigation JSON → Rust types.

pub mod types;

pub use types::*;

use crate::error::ConvertError;

/// Deserialize an investigation JSON string into an `Investigation`.
pub fn parse(json: &str) -> Result<Investigation, ConvertError> {
    serde_json::from_str::<Investigation>(json)
        .map_err(|source| ConvertError::Parse { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_from_bare_string() {
        let person: Person = serde_json::from_str(r#""Ada Lovelace""#).unwrap();
        assert_eq!(person.first_name, "Ada");
        assert_eq!(person.last_name, "Lovelace");
        assert!(person.orcid.is_none());
    }

    #[test]
    fn person_from_single_word_string() {
        let person: Person = serde_json::from_str(r#""Ada""#).unwrap();
        assert_eq!(person.first_name, "Ada");
        assert_eq!(person.last_name, "");
    }

    #[test]
    fn person_from_record() {
        let person: Person = serde_json::from_str(
            r#"{"firstName": "Grace", "lastName": "Hopper", "orcid": "0000-0001-2345-6789"}"#,
        )
        .unwrap();
        assert_eq!(person.first_name, "Grace");
        assert_eq!(person.last_name, "Hopper");
        assert_eq!(person.orcid.as_deref(), Some("0000-0001-2345-6789"));
    }

    #[test]
    fn missing_people_field_is_a_parse_error() {
        let json = r#"{"identifier": "X", "publications": [], "studies": []}"#;
        assert!(matches!(parse(json), Err(ConvertError::Parse { .. })));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            parse("not valid json"),
            Err(ConvertError::Parse { .. })
        ));
    }
}
