use std::collections::HashMap;

use super::model::{Graph, NodeId};

#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    afferent: HashMap<NodeId, Vec<NodeId>>,
    efferent: HashMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyIndex {
    pub fn build(graph: &Graph) -> Self {
        let mut afferent: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(graph.len());
        let mut efferent: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(graph.len());

        for node in graph.nodes() {
            afferent.entry(node.clone()).or_default();
            efferent.entry(node.clone()).or_default();
        }

        for edge in graph.edges() {
            afferent
                .entry(edge.dst.clone())
                .or_default()
                .push(edge.src.clone());
            efferent
                .entry(edge.src.clone())
                .or_default()
                .push(edge.dst.clone());
        }

        Self { afferent, efferent }
    }

    pub fn afferent(&self, node: &NodeId) -> &[NodeId] {
        self.afferent.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn efferent(&self, node: &NodeId) -> &[NodeId] {
        self.efferent.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
