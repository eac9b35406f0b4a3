//! RO-Crate JSON-LD node types and fixed identifiers.
//!
//! Field order within each struct matches the order the corresponding JSON
//! object is assembled in, which is the order keys appear in the output.

use serde::Serialize;

/// The RO-Crate 1.1 JSON-LD context.
pub const RO_CRATE_CONTEXT: &str = "https://w3id.org/ro/crate/1.1/context";
/// The RO-Crate 1.1 specification URI, referenced by `conformsTo`.
pub const RO_CRATE_SPEC: &str = "https://w3id.org/ro/crate/1.1";
/// `@id` of the metadata file descriptor node.
pub const METADATA_DESCRIPTOR_ID: &str = "ro-crate-metadata.json";
/// `@id` of the root data entity.
pub const ROOT_DATASET_ID: &str = "./";
/// `@id` of the assays container dataset.
pub const ASSAYS_ID: &str = "assays/";

// =============================================================================
// REFERENCES
// =============================================================================

/// A `{"@id": ...}` pointer to another graph node.
///
/// A reference without an identifier serializes as `{}`: citations keep the
/// source format's behavior for publications lacking a DOI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ref {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Ref {
    pub fn to(id: impl Into<String>) -> Self {
        Ref { id: Some(id.into()) }
    }
}

// =============================================================================
// GRAPH NODES
// =============================================================================

/// Fixed descriptor for the metadata file itself.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataDescriptor {
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "conformsTo")]
    pub conforms_to: Ref,
    pub about: Ref,
    pub description: String,
}

impl MetadataDescriptor {
    pub fn new() -> Self {
        MetadataDescriptor {
            node_type: "CreativeWork".into(),
            id: METADATA_DESCRIPTOR_ID.into(),
            conforms_to: Ref::to(RO_CRATE_SPEC),
            about: Ref::to(ROOT_DATASET_ID),
            description: "RO-Crate Metadata File Descriptor".into(),
        }
    }
}

impl Default for MetadataDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

/// The investigation as the root data entity.
///
/// `name`/`description` keys are omitted entirely when the investigation
/// lacks the corresponding field.
#[derive(Debug, Clone, Serialize)]
pub struct RootDataset {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub author: Vec<Ref>,
    pub citation: Vec<Ref>,
    #[serde(rename = "hasPart")]
    pub has_part: Vec<Ref>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "datePublished")]
    pub date_published: String,
    pub license: String,
}

impl RootDataset {
    pub fn new(name: Option<String>, description: Option<String>, date_published: String) -> Self {
        RootDataset {
            id: ROOT_DATASET_ID.into(),
            node_type: "Dataset".into(),
            author: Vec::new(),
            citation: Vec::new(),
            has_part: vec![Ref::to(ASSAYS_ID)],
            name,
            description,
            date_published,
            // Unfinished upstream: a placeholder literal, not a license reference.
            license: "TODO".into(),
        }
    }
}

/// Fixed container dataset holding one part per assay.
#[derive(Debug, Clone, Serialize)]
pub struct AssaysContainer {
    pub name: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "hasPart")]
    pub has_part: Vec<Ref>,
}

impl AssaysContainer {
    pub fn new() -> Self {
        AssaysContainer {
            name: "assays".into(),
            id: ASSAYS_ID.into(),
            node_type: "Dataset".into(),
            has_part: Vec::new(),
        }
    }
}

impl Default for AssaysContainer {
    fn default() -> Self {
        Self::new()
    }
}

/// One dataset per derived assay identifier.
#[derive(Debug, Clone, Serialize)]
pub struct AssayDataset {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub name: String,
    pub description: String,
}

impl AssayDataset {
    pub fn new(id: impl Into<String>) -> Self {
        AssayDataset {
            id: id.into(),
            node_type: "Dataset".into(),
            // Unfinished upstream: placeholder values.
            name: "TODO".into(),
            description: "TODO".into(),
        }
    }
}

// =============================================================================
// NODE UNION
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RocNode {
    Descriptor(MetadataDescriptor),
    Root(RootDataset),
    Assays(AssaysContainer),
    Assay(AssayDataset),
}

impl RocNode {
    pub fn id(&self) -> &str {
        match self {
            RocNode::Descriptor(n) => &n.id,
            RocNode::Root(n) => &n.id,
            RocNode::Assays(n) => &n.id,
            RocNode::Assay(n) => &n.id,
        }
    }
}
