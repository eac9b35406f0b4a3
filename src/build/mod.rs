//! Build phase: Investigation → RO-Crate graph.
//!
//! Assembles the fixed descriptor and container nodes, populates the root
//! dataset from the investigation, and derives one assay node per assay
//! filename's first path segment.

pub mod date;
pub mod graph;
pub mod id;
pub mod nodes;
pub mod person;

pub use graph::CrateGraph;
pub use nodes::*;

use crate::error::ConvertError;
use crate::parse::types::Investigation;

/// Build the RO-Crate graph for an investigation.
pub fn build(investigation: &Investigation) -> Result<CrateGraph, ConvertError> {
    // 1. Root data entity, populated from the investigation
    let date_published = match &investigation.public_release_date {
        Some(raw) => date::normalize_release_date(raw)?,
        None => return Err(ConvertError::MissingDate),
    };
    let mut root = RootDataset::new(
        investigation.identifier.clone(),
        investigation.description.clone(),
        date_published,
    );

    // 2. Authors: one reference per person, in input order
    for p in &investigation.people {
        root.author.push(Ref::to(person::person_ref(p)));
    }

    // 3. Citations: DOIs verbatim; a publication without one yields `{}`
    for publication in &investigation.publications {
        root.citation.push(Ref {
            id: publication.doi.clone(),
        });
    }

    // 4. Assays: one hasPart reference per assay, one node per distinct
    //    derived identifier (later duplicates overwrite in place)
    let mut assays = AssaysContainer::new();
    let mut assay_nodes = Vec::new();
    for study in &investigation.studies {
        for assay in &study.assays {
            let segment = match assay.filename.split_once('/') {
                Some((first, _)) => first,
                None => assay.filename.as_str(),
            };
            let assay_id = id::to_valid_id(segment);
            assays.has_part.push(Ref::to(assay_id.clone()));
            assay_nodes.push(AssayDataset::new(assay_id));
        }
    }

    // 5. Assemble in the fixed graph order
    let mut graph = CrateGraph::new();
    graph.insert(RocNode::Descriptor(MetadataDescriptor::new()));
    graph.insert(RocNode::Root(root));
    graph.insert(RocNode::Assays(assays));
    for node in assay_nodes {
        graph.insert(RocNode::Assay(node));
    }

    Ok(graph)
}
