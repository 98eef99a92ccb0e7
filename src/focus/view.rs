use std::sync::Arc;

use crate::geometry::Vec2;
use crate::graph::{Edge, Graph, NodeId};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub advance: bool,
    pub retreat: bool,
    pub click: bool,
    pub pointer_moved: bool,
    pub pointer_position: Vec2,
}

impl InputSnapshot {
    pub fn pointer_at(position: Vec2) -> Self {
        Self {
            pointer_moved: true,
            pointer_position: position,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
    pub node: NodeId,
    pub position: Vec2,
    pub highlight: bool,
    pub focused: bool,
}

impl VisualNode {
    pub(super) fn satellite(node: NodeId, position: Vec2) -> Self {
        Self {
            node,
            position,
            highlight: false,
            focused: false,
        }
    }
}

// Drawing order: predecessors, successors, then the focus node on top.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub nodes: Vec<VisualNode>,
    graph: Arc<Graph>,
}

impl ViewModel {
    pub(super) fn new(nodes: Vec<VisualNode>, graph: Arc<Graph>) -> Self {
        Self { nodes, graph }
    }

    // Always the full static edge list, independent of focus.
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn position_of(&self, node: &NodeId) -> Option<Vec2> {
        self.nodes
            .iter()
            .rev()
            .find(|visual| &visual.node == node)
            .map(|visual| visual.position)
    }

    pub fn hovered(&self) -> Option<&VisualNode> {
        self.nodes.iter().find(|visual| visual.focused)
    }

    pub fn focus(&self) -> Option<&VisualNode> {
        self.nodes.last().filter(|visual| visual.highlight)
    }

    // Edges whose endpoints both appear in this frame, with their positions.
    pub fn visible_edges(&self) -> impl Iterator<Item = (&Edge, Vec2, Vec2)> + '_ {
        self.edges().iter().filter_map(|edge| {
            let start = self.position_of(&edge.src)?;
            let end = self.position_of(&edge.dst)?;
            Some((edge, start, end))
        })
    }
}
