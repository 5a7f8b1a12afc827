//! Various types related to view coloring.

/// The view id type.
pub type ViewId = u32;

/// The position of a view in insertion order.
pub type NodeIdx = usize;

/// The position of an edge in insertion order.
pub type EdgeIdx = usize;

/// The color class produced by a coloring pass.
pub type ColorClass = usize;
