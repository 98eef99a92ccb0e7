use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Edge, Graph, NodeId};

#[derive(Debug, Deserialize)]
struct RawGraph {
    nodes: Vec<NodeId>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Pair([NodeId; 2]),
    Object { src: NodeId, dst: NodeId },
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        match raw {
            RawEdge::Pair([src, dst]) | RawEdge::Object { src, dst } => Edge { src, dst },
        }
    }
}

pub fn parse_graph(raw: &str) -> Result<Graph> {
    let parsed: RawGraph = serde_json::from_str(raw).context("invalid graph JSON")?;
    let edges = parsed.edges.into_iter().map(Edge::from).collect();
    Graph::new(parsed.nodes, edges).context("graph document failed validation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_and_pair_edges() {
        let graph = parse_graph(
            r#"{
                "nodes": ["A", "B", "C"],
                "edges": [{"src": "A", "dst": "B"}, ["B", "C"]]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges(), [Edge::new("A", "B"), Edge::new("B", "C")]);
    }

    #[test]
    fn edges_are_optional() {
        let graph = parse_graph(r#"{"nodes": ["solo"]}"#).unwrap();
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn empty_node_list_is_rejected() {
        let error = parse_graph(r#"{"nodes": [], "edges": []}"#).unwrap_err();
        assert!(format!("{error:#}").contains("graph has no nodes"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let error = parse_graph(r#"{"nodes": "A"}"#).unwrap_err();
        assert!(error.to_string().contains("invalid graph JSON"));
    }
}
