use std::f32::consts::{FRAC_PI_2, PI};

use crate::geometry::Vec2;
use crate::graph::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcSide {
    Predecessors,
    Successors,
}

// Half-plane arc whose offsets from -PI/2 are mirror-symmetric, midline at -PI for
// predecessors and at the offset for successors, with a half-slot margin at each end.
pub fn arc_angle(side: ArcSide, ordinal: usize, count: usize, successor_offset: f32) -> f32 {
    let fraction = PI / (count as f32 + 2.0);
    let step = (ordinal as f32 + 1.5) * fraction;
    match side {
        ArcSide::Predecessors => -step - FRAC_PI_2,
        ArcSide::Successors => step - FRAC_PI_2 + successor_offset,
    }
}

pub fn satellite_positions<'a>(
    focus: &NodeId,
    neighbors: &'a [NodeId],
    side: ArcSide,
    radius: f32,
    successor_offset: f32,
) -> Vec<(&'a NodeId, Vec2)> {
    let satellites = neighbors
        .iter()
        .filter(|neighbor| *neighbor != focus)
        .collect::<Vec<_>>();
    let count = satellites.len();

    satellites
        .into_iter()
        .enumerate()
        .map(|(ordinal, node)| {
            let angle = arc_angle(side, ordinal, count, successor_offset);
            (node, Vec2::from_angle(angle).scale(radius))
        })
        .collect()
}

pub fn predecessor_positions<'a>(
    focus: &NodeId,
    afferent: &'a [NodeId],
    radius: f32,
) -> Vec<(&'a NodeId, Vec2)> {
    satellite_positions(focus, afferent, ArcSide::Predecessors, radius, 0.0)
}

pub fn successor_positions<'a>(
    focus: &NodeId,
    efferent: &'a [NodeId],
    radius: f32,
    offset: f32,
) -> Vec<(&'a NodeId, Vec2)> {
    satellite_positions(focus, efferent, ArcSide::Successors, radius, offset)
}
