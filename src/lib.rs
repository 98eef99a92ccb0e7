pub mod focus;
pub mod geometry;
pub mod graph;
