//! Identifier encoding for `@id` values derived from human-readable text.

/// Percent-encode text for use as a URI-reference identifier.
///
/// Spaces become `%20`, percent signs `%25`; alphanumerics and `-_.~` pass
/// through. ORCID values and DOIs are deliberately not run through this:
/// they are assumed already URI-safe and used verbatim.
pub fn to_valid_id(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}
