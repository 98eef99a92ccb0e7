mod layout;
mod view;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::geometry::Vec2;
use crate::graph::{AdjacencyIndex, Graph, NodeId};

pub use hit_test::first_hit;
pub use layout::{ArcSide, arc_angle, predecessor_positions, successor_positions};
pub use view::{InputSnapshot, ViewModel, VisualNode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusConfig {
    pub satellite_radius: f32,
    pub hit_radius: f32,
    pub successor_arc_offset: f32,
}

impl FocusConfig {
    pub const DEFAULT_SATELLITE_RADIUS: f32 = 240.0;
    pub const DEFAULT_HIT_RADIUS: f32 = 40.0;
    pub const DEFAULT_SUCCESSOR_ARC_OFFSET: f32 = 0.05;
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            satellite_radius: Self::DEFAULT_SATELLITE_RADIUS,
            hit_radius: Self::DEFAULT_HIT_RADIUS,
            successor_arc_offset: Self::DEFAULT_SUCCESSOR_ARC_OFFSET,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("cannot focus an empty graph")]
    EmptyGraph,
    #[error("focus cursor {cursor} is outside a graph of {len} nodes")]
    CursorOutOfRange { cursor: usize, len: usize },
}

pub struct FocusController {
    graph: Arc<Graph>,
    adjacency: AdjacencyIndex,
    config: FocusConfig,
    cursor: usize,
    pointer_position: Vec2,
}

impl FocusController {
    pub fn new(graph: Arc<Graph>, config: FocusConfig) -> Result<Self, FocusError> {
        if graph.is_empty() {
            return Err(FocusError::EmptyGraph);
        }

        let adjacency = AdjacencyIndex::build(&graph);
        Ok(Self {
            graph,
            adjacency,
            config,
            cursor: 0,
            pointer_position: Vec2::ZERO,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn config(&self) -> FocusConfig {
        self.config
    }

    pub fn set_config(&mut self, config: FocusConfig) {
        self.config = config;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    pub fn focus(&self) -> Result<&NodeId, FocusError> {
        self.graph
            .node(self.cursor)
            .ok_or(FocusError::CursorOutOfRange {
                cursor: self.cursor,
                len: self.graph.len(),
            })
    }

    pub fn tick(&mut self, input: &InputSnapshot) -> Result<ViewModel, FocusError> {
        let len = self.graph.len();
        if self.cursor >= len {
            return Err(FocusError::CursorOutOfRange {
                cursor: self.cursor,
                len,
            });
        }

        if input.pointer_moved {
            self.pointer_position = input.pointer_position;
        }

        // Advance and retreat in the same tick cancel out.
        match (input.advance, input.retreat) {
            (true, false) => self.move_cursor((self.cursor + 1) % len),
            (false, true) => self.move_cursor((self.cursor + len - 1) % len),
            _ => {}
        }

        let focus = self.focus()?.clone();
        let afferent = self.adjacency.afferent(&focus);
        let efferent = self.adjacency.efferent(&focus);
        let radius = self.config.satellite_radius;

        let predecessors = predecessor_positions(&focus, afferent, radius);
        let successors =
            successor_positions(&focus, efferent, radius, self.config.successor_arc_offset);

        let mut nodes = Vec::with_capacity(predecessors.len() + successors.len() + 1);
        nodes.extend(
            predecessors
                .into_iter()
                .chain(successors)
                .map(|(node, position)| VisualNode::satellite(node.clone(), position)),
        );
        let focus_slot = nodes.len();
        nodes.push(VisualNode {
            node: focus,
            position: Vec2::ZERO,
            highlight: true,
            focused: false,
        });

        if let Some(hit) = first_hit(&nodes, self.pointer_position, self.config.hit_radius) {
            nodes[hit].focused = true;
            if input.click
                && hit != focus_slot
                && let Some(index) = self.graph.index_of(&nodes[hit].node)
            {
                self.move_cursor(index);
            }
        }

        Ok(ViewModel::new(nodes, Arc::clone(&self.graph)))
    }

    fn move_cursor(&mut self, cursor: usize) {
        if cursor != self.cursor {
            debug!(
                from = self.cursor,
                to = cursor,
                node = ?self.graph.node(cursor),
                "focus moved"
            );
        }
        self.cursor = cursor;
    }
}
