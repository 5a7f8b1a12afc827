use super::ViewGraph;
use crate::types::{EdgeIdx, NodeIdx};
use rayon::prelude::*;
use std::collections::VecDeque;

/// Single-source shortest path counts on the unweighted graph.
struct ShortestPaths {
    /// Nodes in non-decreasing distance from the source.
    order: Vec<NodeIdx>,
    /// Predecessors of each node on shortest paths, with the connecting edge.
    preds: Vec<Vec<(NodeIdx, EdgeIdx)>>,
    /// Number of shortest paths from the source.
    sigma: Vec<f64>,
}

impl ShortestPaths {
    fn new(graph: &ViewGraph, source: NodeIdx) -> Self {
        let n = graph.num_views();
        let mut order = Vec::with_capacity(n);
        let mut preds = vec![vec![]; n];
        let mut sigma = vec![0.0; n];
        let mut dist: Vec<Option<usize>> = vec![None; n];
        sigma[source] = 1.0;
        dist[source] = Some(0);
        let mut queue = VecDeque::from(vec![source]);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            let dv = dist[v].unwrap_or_default();
            for &(w, e) in graph.neighbors(v) {
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    preds[w].push((v, e));
                }
            }
        }
        Self {
            order,
            preds,
            sigma,
        }
    }

    /// Dependency of the source on every edge, accumulated back to front.
    fn edge_dependencies(mut self, num_edges: usize) -> Vec<f64> {
        let mut delta = vec![0.0; self.sigma.len()];
        let mut dependencies = vec![0.0; num_edges];
        while let Some(w) = self.order.pop() {
            let coeff = (1.0 + delta[w]) / self.sigma[w];
            for &(v, e) in &self.preds[w] {
                let c = self.sigma[v] * coeff;
                dependencies[e] += c;
                delta[v] += c;
            }
        }
        dependencies
    }
}

/// Computes the normalized edge betweenness centrality of every edge.
///
/// Shortest paths are counted by hops. With `sources = Some(k)` only the
/// first `k` views act as path sources and the result is rescaled by
/// `n / k`. Sources run in parallel batches of one per thread, and their
/// contributions are summed in source order, so the result does not depend
/// on scheduling and at most one batch of dependency vectors is alive.
pub fn edge_betweenness(graph: &ViewGraph, sources: Option<usize>) -> Vec<f64> {
    let n = graph.num_views();
    let k = sources.map_or(n, |k| k.min(n));
    let mut betweenness = accumulate(graph, k, rayon::current_num_threads().max(1));
    if n > 1 {
        let mut scale = 1.0 / (n * (n - 1)) as f64;
        if k < n && k > 0 {
            scale *= n as f64 / k as f64;
        }
        betweenness.iter_mut().for_each(|b| *b *= scale);
    }
    betweenness
}

/// Sums the edge dependencies of sources `0..k`, `batch_size` sources at a time.
fn accumulate(graph: &ViewGraph, k: usize, batch_size: usize) -> Vec<f64> {
    let sources: Vec<NodeIdx> = (0..k).collect();
    let mut betweenness = vec![0.0; graph.num_edges()];
    for batch in sources.chunks(batch_size) {
        let per_source: Vec<Vec<f64>> = batch
            .par_iter()
            .map(|&s| ShortestPaths::new(graph, s).edge_dependencies(graph.num_edges()))
            .collect();
        for dependencies in per_source {
            for (b, d) in betweenness.iter_mut().zip(dependencies) {
                *b += d;
            }
        }
    }
    betweenness
}
