//! Rust types mirroring the ARC `isa.investigation.json` schema.
//!
//! These types are the serde target for the investigation JSON. The schema
//! is externally defined; only the fields the converter consumes are
//! declared, unknown fields are ignored.

use serde::Deserialize;

// =============================================================================
// TOP-LEVEL INVESTIGATION
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investigation {
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub public_release_date: Option<String>,
    pub people: Vec<Person>,
    pub publications: Vec<Publication>,
    pub studies: Vec<Study>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub doi: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Study {
    pub assays: Vec<Assay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assay {
    /// May carry a path; only the segment before the first `/` is used.
    /// Backslash-separated paths are not split (known upstream defect).
    pub filename: String,
}

// =============================================================================
// PERSON — shape-polymorphic in the source format
// =============================================================================

/// A contributor, normalized from either input shape at deserialization time.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "PersonEntry")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub orcid: Option<String>,
    pub doi: Option<String>,
}

/// Raw wire shape: a bare `"First Last"` string or a full record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PersonEntry {
    Name(String),
    Record {
        #[serde(rename = "firstName", default)]
        first_name: String,
        #[serde(rename = "lastName", default)]
        last_name: String,
        orcid: Option<String>,
        doi: Option<String>,
    },
}

impl From<PersonEntry> for Person {
    fn from(entry: PersonEntry) -> Self {
        match entry {
            PersonEntry::Name(name) => {
                let mut parts = name.split_whitespace();
                Person {
                    first_name: parts.next().unwrap_or_default().to_string(),
                    last_name: parts.next().unwrap_or_default().to_string(),
                    orcid: None,
                    doi: None,
                }
            }
            PersonEntry::Record {
                first_name,
                last_name,
                orcid,
                doi,
            } => Person {
                first_name,
                last_name,
                orcid,
                doi,
            },
        }
    }
}
