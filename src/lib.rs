//! Adjacency-aware color assignment for multi-tile microscopy views.
//!
//! Overlapping views should be told apart at a glance. Given the view
//! adjacency graph, whose edges carry the spatial overlap of two views,
//! [`assigner::ColorAssigner`] gives every view one color of a small palette
//! so that overlapping views differ whenever the color budget allows.

pub mod assigner;
pub mod error;
pub mod front_end;
pub mod graph;
pub mod layer;
pub mod scorer;
pub mod types;

pub use assigner::{assign_colors, Assignment, ColorAssigner, Palette, ViewColorMap};
pub use error::{Error, Result};
pub use graph::ViewGraph;
