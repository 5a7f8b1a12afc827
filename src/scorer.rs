//! Edge priority scores used to decide pruning order.

use crate::{
    graph::{edge_betweenness, ViewGraph},
    types::{EdgeIdx, ViewId},
};
use derive_more::Display;
use log::debug;

/// The frozen score table of a view graph.
///
/// `score = betweenness + overlap`; the lowest-scored edges are pruned first.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeScores {
    betweenness: Vec<f64>,
    scores: Vec<f64>,
}

impl EdgeScores {
    pub fn new(graph: &ViewGraph) -> Self {
        Self::with_sources(graph, None)
    }

    /// Scores the edges with betweenness restricted to the first `sources` views.
    pub fn with_sources(graph: &ViewGraph, sources: Option<usize>) -> Self {
        let betweenness = edge_betweenness(graph, sources);
        let scores = graph
            .edges()
            .iter()
            .zip(&betweenness)
            .map(|(edge, b)| b + edge.overlap())
            .collect();
        debug!("scored {} edges", graph.num_edges());
        Self {
            betweenness,
            scores,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score(&self, edge: EdgeIdx) -> f64 {
        self.scores[edge]
    }

    pub fn betweenness(&self, edge: EdgeIdx) -> f64 {
        self.betweenness[edge]
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Distinct scores in ascending order.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut thresholds = self.scores.clone();
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        thresholds
    }

    /// One displayable row per edge, in edge insertion order.
    pub fn rows(&self, graph: &ViewGraph) -> Vec<ScoreRow> {
        graph
            .edges()
            .iter()
            .enumerate()
            .map(|(e, edge)| {
                let (u, v) = edge.endpoints();
                ScoreRow {
                    a: graph.view(u),
                    b: graph.view(v),
                    overlap: edge.overlap(),
                    betweenness: self.betweenness(e),
                    score: self.score(e),
                }
            })
            .collect()
    }
}

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "{} {} {:.6} {:.6} {:.6}", a, b, overlap, betweenness, score)]
pub struct ScoreRow {
    pub a: ViewId,
    pub b: ViewId,
    pub overlap: f64,
    pub betweenness: f64,
    pub score: f64,
}
