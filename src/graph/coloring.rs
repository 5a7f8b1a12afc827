use super::ViewGraph;
use crate::types::{ColorClass, NodeIdx};
use itertools::Itertools;
use std::cmp::Reverse;

/// A color class for every node of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    classes: Vec<ColorClass>,
}

impl Coloring {
    pub fn new(classes: Vec<ColorClass>) -> Self {
        Self { classes }
    }

    pub fn class(&self, node: NodeIdx) -> ColorClass {
        self.classes[node]
    }

    /// Classes indexed by node.
    pub fn classes(&self) -> &[ColorClass] {
        &self.classes
    }

    /// Number of distinct classes in use.
    pub fn num_classes(&self) -> usize {
        self.classes.iter().unique().count()
    }

    /// Returns true if no active edge joins two nodes of the same class.
    pub fn is_proper(&self, graph: &ViewGraph, active: &[bool]) -> bool {
        graph
            .edges()
            .iter()
            .zip(active)
            .filter(|&(_, &a)| a)
            .all(|(edge, _)| {
                let (u, v) = edge.endpoints();
                self.classes[u] != self.classes[v]
            })
    }
}

/// Colors `graph` greedily, considering only edges flagged in `active`.
///
/// Nodes are visited by decreasing active degree, ties broken by insertion
/// order. Each node takes the smallest class unused by its colored neighbors.
pub fn greedy_color(graph: &ViewGraph, active: &[bool]) -> Coloring {
    let n = graph.num_views();
    let mut classes: Vec<Option<ColorClass>> = vec![None; n];
    let order = (0..n).sorted_by_key(|&u| Reverse(graph.active_degree(u, active)));
    for u in order {
        let mut taken = vec![false; graph.active_degree(u, active) + 1];
        for &(w, e) in graph.neighbors(u) {
            if let (true, Some(c)) = (active[e], classes[w]) {
                if c < taken.len() {
                    taken[c] = true;
                }
            }
        }
        classes[u] = taken.iter().position(|&t| !t);
    }
    Coloring::new(classes.into_iter().map(Option::unwrap_or_default).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_active(graph: &ViewGraph) -> Vec<bool> {
        vec![true; graph.num_edges()]
    }

    #[test]
    fn test_triangle_needs_three() {
        let g = ViewGraph::from_parts(0..3, vec![(0, 1, 0.9), (1, 2, 0.5), (2, 0, 0.3)]).unwrap();
        let coloring = greedy_color(&g, &all_active(&g));
        assert_eq!(coloring.classes(), &[0, 1, 2]);
        assert_eq!(coloring.num_classes(), 3);
        assert!(coloring.is_proper(&g, &all_active(&g)));
    }

    #[test]
    fn test_inactive_edges_are_ignored() {
        let g = ViewGraph::from_parts(0..3, vec![(0, 1, 0.9), (1, 2, 0.5), (2, 0, 0.3)]).unwrap();
        let active = [true, true, false];
        let coloring = greedy_color(&g, &active);
        // Node 1 has the largest degree and is colored first.
        assert_eq!(coloring.classes(), &[1, 0, 1]);
        assert!(coloring.is_proper(&g, &active));
        assert!(!coloring.is_proper(&g, &all_active(&g)));
    }

    #[test]
    fn test_star_center_first() {
        let g = ViewGraph::from_parts(0..4, vec![(0, 1, 0.1), (0, 3, 0.1), (3, 2, 0.1), (3, 1, 0.1)])
            .unwrap();
        // Degrees: 0 -> 2, 1 -> 2, 2 -> 1, 3 -> 3.
        let coloring = greedy_color(&g, &all_active(&g));
        assert_eq!(coloring.classes(), &[1, 2, 1, 0]);
    }

    #[test]
    fn test_edgeless() {
        let g = ViewGraph::from_parts(0..3, vec![]).unwrap();
        let coloring = greedy_color(&g, &[]);
        assert_eq!(coloring.classes(), &[0, 0, 0]);
        assert_eq!(coloring.num_classes(), 1);
        assert_eq!(greedy_color(&ViewGraph::new(), &[]).num_classes(), 0);
    }
}
