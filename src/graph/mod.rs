//! The view adjacency graph and the graph algorithms run on it.

pub use betweenness::edge_betweenness;
pub use coloring::{greedy_color, Coloring};
pub use info::GraphInfo;
pub use sqlite::{graph_from_sqlite, read_sqlite};
pub use view_graph::{Edge, ViewGraph};

mod betweenness;
mod coloring;
mod info;
mod sqlite;
mod view_graph;
