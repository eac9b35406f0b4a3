//! Insertion-ordered keyed store for RO-Crate graph nodes.

use std::collections::HashMap;

use super::nodes::RocNode;

/// The `@graph` under construction: nodes keyed by `@id`, flattened to an
/// ordered list at the end.
///
/// Re-inserting a node under an existing `@id` overwrites the stored node in
/// place without changing its position. Two assays sharing a derived
/// identifier therefore collapse into one graph node (source behavior,
/// flagged in DESIGN.md).
pub struct CrateGraph {
    nodes: Vec<RocNode>,
    node_indices: HashMap<String, usize>,
}

impl CrateGraph {
    pub fn new() -> Self {
        CrateGraph {
            nodes: Vec::new(),
            node_indices: HashMap::new(),
        }
    }

    pub fn insert(&mut self, node: RocNode) {
        let id = node.id().to_string();
        match self.node_indices.get(&id) {
            Some(&idx) => self.nodes[idx] = node,
            None => {
                self.node_indices.insert(id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&RocNode> {
        self.node_indices.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flatten into the `@graph` list, in insertion order.
    pub fn into_nodes(self) -> Vec<RocNode> {
        self.nodes
    }
}

impl Default for CrateGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::nodes::AssayDataset;

    #[test]
    fn insertion_order_is_preserved() {
        let mut graph = CrateGraph::new();
        graph.insert(RocNode::Assay(AssayDataset::new("b")));
        graph.insert(RocNode::Assay(AssayDataset::new("a")));
        graph.insert(RocNode::Assay(AssayDataset::new("c")));

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn reinsertion_overwrites_without_moving() {
        let mut graph = CrateGraph::new();
        graph.insert(RocNode::Assay(AssayDataset::new("a")));
        graph.insert(RocNode::Assay(AssayDataset::new("b")));
        graph.insert(RocNode::Assay(AssayDataset::new("a")));

        assert_eq!(graph.len(), 2);
        let nodes = graph.into_nodes();
        let ids: Vec<&str> = nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn get_finds_nodes_by_id() {
        let mut graph = CrateGraph::new();
        graph.insert(RocNode::Assay(AssayDataset::new("a")));
        assert!(graph.get("a").is_some());
        assert!(graph.get("missing").is_none());
    }
}
