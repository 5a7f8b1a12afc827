use crate::{
    graph::{greedy_color, Coloring, ViewGraph},
    scorer::EdgeScores,
};
use derive_more::Display;

/// The pruning state machine over a frozen score table.
///
/// Round `0` keeps every edge. Round `i > 0` keeps the edges scored above
/// `thresholds[i - 1]`, so each round is a pure function of its index and
/// the surviving edge sets shrink monotonically. The last round,
/// `thresholds.len()`, keeps no edge at all.
pub struct Pruning<'a> {
    graph: &'a ViewGraph,
    scores: &'a EdgeScores,
    thresholds: Vec<f64>,
}

impl<'a> Pruning<'a> {
    pub fn new(graph: &'a ViewGraph, scores: &'a EdgeScores) -> Self {
        Self {
            graph,
            scores,
            thresholds: scores.thresholds(),
        }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Upper bound on the number of rounds before the graph is edgeless.
    pub fn num_rounds(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Threshold applied before round `index`, if any.
    pub fn threshold(&self, index: usize) -> Option<f64> {
        index
            .checked_sub(1)
            .and_then(|i| self.thresholds.get(i).copied())
    }

    /// Surviving edges of round `index`, or `None` past the last round.
    pub fn active_edges(&self, index: usize) -> Option<Vec<bool>> {
        if index >= self.num_rounds() {
            return None;
        }
        Some(match self.threshold(index) {
            None => vec![true; self.scores.len()],
            Some(t) => self.scores.scores().iter().map(|&s| s > t).collect(),
        })
    }

    pub fn round(&self, index: usize) -> Option<Round> {
        self.active_edges(index).map(|active| {
            let coloring = greedy_color(self.graph, &active);
            Round {
                index,
                threshold: self.threshold(index),
                active,
                coloring,
            }
        })
    }
}

/// One coloring attempt of the pruning state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    index: usize,
    threshold: Option<f64>,
    active: Vec<bool>,
    coloring: Coloring,
}

impl Round {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn active(&self) -> &[bool] {
        &self.active
    }

    pub fn num_active(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            index: self.index(),
            threshold: self.threshold().unwrap_or(f64::NEG_INFINITY),
            num_active: self.num_active(),
            num_classes: self.coloring.num_classes(),
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<bool>, Coloring) {
        (self.active, self.coloring)
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display(
    fmt = "round {}: threshold {:.6}, {} edges, {} classes",
    index,
    threshold,
    num_active,
    num_classes
)]
pub struct RoundSummary {
    pub index: usize,
    /// Negative infinity for the unpruned first round.
    pub threshold: f64,
    pub num_active: usize,
    pub num_classes: usize,
}
