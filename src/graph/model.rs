use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: NodeId,
    pub dst: NodeId,
}

impl Edge {
    pub fn new(src: impl Into<NodeId>, dst: impl Into<NodeId>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph has no nodes")]
    Empty,
    #[error("edge {src} -> {dst} references unknown node {missing}")]
    UnknownEndpoint {
        src: NodeId,
        dst: NodeId,
        missing: NodeId,
    },
}

// Immutable once built; duplicate node identities and duplicate edges are kept.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        let known = nodes.iter().collect::<HashSet<_>>();
        for edge in &edges {
            for endpoint in [&edge.src, &edge.dst] {
                if !known.contains(endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        src: edge.src.clone(),
                        dst: edge.dst.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&NodeId> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, node: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|candidate| candidate == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().copied().map(NodeId::from).collect()
    }

    #[test]
    fn rejects_empty_node_list() {
        let error = Graph::new(Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(error, GraphError::Empty);
    }

    #[test]
    fn rejects_edge_with_unknown_endpoint() {
        let error = Graph::new(ids(&["A", "B"]), vec![Edge::new("A", "Z")]).unwrap_err();
        assert_eq!(
            error,
            GraphError::UnknownEndpoint {
                src: NodeId::from("A"),
                dst: NodeId::from("Z"),
                missing: NodeId::from("Z"),
            }
        );
        assert!(error.to_string().contains("unknown node Z"));
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let graph = Graph::new(
            ids(&["A", "B", "A"]),
            vec![Edge::new("A", "B"), Edge::new("A", "B"), Edge::new("B", "B")],
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.index_of(&NodeId::from("A")), Some(0));
        assert_eq!(graph.node(2), Some(&NodeId::from("A")));
        assert!(graph.edges()[2].is_self_loop());
        assert_eq!(graph.node(3), None);
    }
}
