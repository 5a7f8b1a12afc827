use super::GraphInfo;
use crate::{
    error::{Error, Result},
    types::{EdgeIdx, NodeIdx, ViewId},
};
use std::collections::{HashMap, HashSet};

/// An undirected edge between two views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    u: NodeIdx,
    v: NodeIdx,
    overlap: f64,
}

impl Edge {
    pub fn endpoints(&self) -> (NodeIdx, NodeIdx) {
        (self.u, self.v)
    }

    /// Fraction of spatial overlap between the two views, within `[0, 1]`.
    pub fn overlap(&self) -> f64 {
        self.overlap
    }
}

/// The view adjacency graph.
///
/// Views are nodes numbered by insertion order; every tie-break in the
/// algorithms on this graph follows that order. The graph is simple: no
/// self-loops and at most one edge per unordered pair of views.
#[derive(Debug, Clone, Default)]
pub struct ViewGraph {
    views: Vec<ViewId>,
    nodes: HashMap<ViewId, NodeIdx>,
    edges: Vec<Edge>,
    pairs: HashSet<(NodeIdx, NodeIdx)>,
    neighbors: Vec<Vec<(NodeIdx, EdgeIdx)>>,
}

impl ViewGraph {
    /// Create a new empty view graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from views and `(view_a, view_b, overlap)` triples.
    pub fn from_parts<V, E>(views: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = ViewId>,
        E: IntoIterator<Item = (ViewId, ViewId, f64)>,
    {
        let mut graph = Self::new();
        for view in views {
            graph.add_view(view)?;
        }
        for (a, b, overlap) in edges {
            graph.add_edge(a, b, overlap)?;
        }
        Ok(graph)
    }

    pub fn add_view(&mut self, view: ViewId) -> Result<NodeIdx> {
        if self.nodes.contains_key(&view) {
            return Err(Error::DuplicateView(view));
        }
        let node = self.views.len();
        self.views.push(view);
        self.nodes.insert(view, node);
        self.neighbors.push(vec![]);
        Ok(node)
    }

    /// Adds the undirected edge `(a, b)`.
    ///
    /// The overlap is validated, never clamped.
    pub fn add_edge(&mut self, a: ViewId, b: ViewId, overlap: f64) -> Result<EdgeIdx> {
        let u = self.node(a).ok_or(Error::UnknownView(a))?;
        let v = self.node(b).ok_or(Error::UnknownView(b))?;
        if u == v {
            return Err(Error::SelfLoop(a));
        }
        if !(0.0..=1.0).contains(&overlap) {
            return Err(Error::InvalidOverlap(a, b, overlap));
        }
        if !self.pairs.insert((u.min(v), u.max(v))) {
            return Err(Error::DuplicateEdge(a, b));
        }
        let edge = self.edges.len();
        self.edges.push(Edge { u, v, overlap });
        self.neighbors[u].push((v, edge));
        self.neighbors[v].push((u, edge));
        Ok(edge)
    }

    pub fn num_views(&self) -> usize {
        self.views.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_views(), self.num_edges())
    }

    /// Views in insertion order.
    pub fn views(&self) -> &[ViewId] {
        &self.views
    }

    pub fn view(&self, node: NodeIdx) -> ViewId {
        self.views[node]
    }

    pub fn node(&self, view: ViewId) -> Option<NodeIdx> {
        self.nodes.get(&view).copied()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, edge: EdgeIdx) -> &Edge {
        &self.edges[edge]
    }

    /// Returns `(neighbor, edge)` pairs of `node` in edge insertion order.
    pub fn neighbors(&self, node: NodeIdx) -> &[(NodeIdx, EdgeIdx)] {
        &self.neighbors[node]
    }

    pub fn degree(&self, node: NodeIdx) -> usize {
        self.neighbors[node].len()
    }

    /// Degree of `node` counting only edges flagged in `active`.
    pub fn active_degree(&self, node: NodeIdx, active: &[bool]) -> usize {
        self.neighbors[node]
            .iter()
            .filter(|&&(_, e)| active[e])
            .count()
    }
}
