//! Emit phase: flatten the graph and render the JSON-LD document.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::build::graph::CrateGraph;
use crate::build::nodes::{RO_CRATE_CONTEXT, RocNode};
use crate::error::ConvertError;

/// The complete RO-Crate metadata document.
#[derive(Debug, Clone, Serialize)]
pub struct RoCrate {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<RocNode>,
}

/// Flatten the keyed node store into the `@graph` list, in insertion order.
pub fn finalize(graph: CrateGraph) -> RoCrate {
    RoCrate {
        context: RO_CRATE_CONTEXT.into(),
        graph: graph.into_nodes(),
    }
}

/// Render the document with one-space indentation.
pub fn render(doc: &RoCrate) -> Result<String, ConvertError> {
    let mut buf = Vec::with_capacity(4096);
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)
        .map_err(|source| ConvertError::Render { source })?;
    String::from_utf8(buf).map_err(|e| ConvertError::Render {
        source: serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_renders_with_context() {
        let doc = finalize(CrateGraph::new());
        let rendered = render(&doc).unwrap();
        assert_eq!(
            rendered,
            "{\n \"@context\": \"https://w3id.org/ro/crate/1.1/context\",\n \"@graph\": []\n}"
        );
    }
}
