//! Palette color assignment of overlapping views.
//!
//! The assigner scores every edge once, then walks the [`Pruning`] rounds
//! until a greedy coloring of the surviving edges uses at most `n_colors`
//! classes. Classes are finally mapped onto the [`Palette`].

pub use palette::{Palette, DEFAULT_PALETTE};
pub use pruning::{Pruning, Round, RoundSummary};

use crate::{
    error::{Error, Result},
    graph::{Coloring, ViewGraph},
    scorer::EdgeScores,
    types::{ColorClass, ViewId},
};
use log::{debug, info};
use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

mod palette;
mod pruning;

pub const DEFAULT_N_COLORS: usize = 2;

/// Builder and entry point of the color assignment.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    n_colors: usize,
    palette: Palette,
    sources: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self {
            n_colors: DEFAULT_N_COLORS,
            palette: Palette::default(),
            sources: None,
            cancel: None,
        }
    }
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on distinct color classes, at least 1.
    pub fn n_colors(mut self, n_colors: usize) -> Self {
        self.n_colors = n_colors;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Bounds the betweenness computation to the first `sources` views.
    pub fn betweenness_sources(mut self, sources: usize) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Checked between pruning rounds; once set the assignment is abandoned.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn assign(&self, graph: &ViewGraph) -> Result<Assignment> {
        if self.n_colors < 1 {
            return Err(Error::NoColors);
        }
        info!("assigning at most {} colors to {}", self.n_colors, graph.info());
        let scores = EdgeScores::with_sources(graph, self.sources);
        let pruning = Pruning::new(graph, &scores);
        debug!("{} distinct thresholds", pruning.thresholds().len());
        let mut rounds = Vec::new();
        for index in 0..pruning.num_rounds() {
            if self.is_cancelled() {
                return Err(Error::Cancelled);
            }
            let round = pruning
                .round(index)
                .ok_or(Error::ThresholdsExhausted(index))?;
            let summary = round.summary();
            debug!("{}", summary);
            rounds.push(summary);
            if summary.num_classes <= self.n_colors {
                info!(
                    "converged after {} rounds with {} classes and {} of {} edges",
                    rounds.len(),
                    summary.num_classes,
                    summary.num_active,
                    graph.num_edges()
                );
                let (active, coloring) = round.into_parts();
                return Ok(Assignment::new(graph, &self.palette, active, coloring, rounds));
            }
        }
        Err(Error::ThresholdsExhausted(pruning.num_rounds()))
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

/// Assigns colors from the default palette using at most `n_colors` classes.
pub fn assign_colors(graph: &ViewGraph, n_colors: usize) -> Result<ViewColorMap> {
    ColorAssigner::new()
        .n_colors(n_colors)
        .assign(graph)
        .map(Assignment::into_colors)
}

/// The outcome of a color assignment.
#[derive(Debug, Clone)]
pub struct Assignment {
    coloring: Coloring,
    active: Vec<bool>,
    colors: ViewColorMap,
    rounds: Vec<RoundSummary>,
}

impl Assignment {
    fn new(
        graph: &ViewGraph,
        palette: &Palette,
        active: Vec<bool>,
        coloring: Coloring,
        rounds: Vec<RoundSummary>,
    ) -> Self {
        let colors = ViewColorMap::new(
            graph
                .views()
                .iter()
                .enumerate()
                .map(|(node, &view)| {
                    let class = coloring.class(node);
                    (view, class, String::from(palette.color(class)))
                })
                .collect(),
        );
        Self {
            coloring,
            active,
            colors,
            rounds,
        }
    }

    /// Classes indexed by node.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Edges that survived pruning.
    pub fn active(&self) -> &[bool] {
        &self.active
    }

    pub fn colors(&self) -> &ViewColorMap {
        &self.colors
    }

    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    pub fn into_colors(self) -> ViewColorMap {
        self.colors
    }
}

/// The total mapping from view to its color class and palette color.
///
/// Entries keep view insertion order; lookups go through a view index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewColorMap {
    entries: Vec<(ViewId, ColorClass, String)>,
    index: HashMap<ViewId, usize>,
}

impl ViewColorMap {
    fn new(entries: Vec<(ViewId, ColorClass, String)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, &(view, _, _))| (view, i))
            .collect();
        Self { entries, index }
    }

    fn entry(&self, view: ViewId) -> Option<&(ViewId, ColorClass, String)> {
        self.index.get(&view).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn color(&self, view: ViewId) -> Option<&str> {
        self.entry(view).map(|(_, _, color)| color.as_str())
    }

    pub fn class(&self, view: ViewId) -> Option<ColorClass> {
        self.entry(view).map(|&(_, class, _)| class)
    }

    /// `(view, color)` pairs in view insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &str)> {
        self.entries
            .iter()
            .map(|(view, _, color)| (*view, color.as_str()))
    }
}

impl fmt::Display for ViewColorMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (view, class, color) in &self.entries {
            writeln!(f, "{} {} {}", view, class, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_triangle() -> ViewGraph {
        ViewGraph::from_parts(0..3, vec![(0, 1, 0.9), (1, 2, 0.5), (2, 0, 0.3)]).unwrap()
    }

    #[test]
    fn test_triangle_prunes_weakest_edge() {
        let g = create_triangle();
        let assignment = ColorAssigner::new().assign(&g).unwrap();
        assert_eq!(assignment.active(), &[true, true, false]);
        assert_eq!(assignment.coloring().classes(), &[1, 0, 1]);
        assert_eq!(assignment.rounds().len(), 2);
        assert_eq!(assignment.colors().color(1), Some("red"));
        assert_eq!(assignment.colors().color(0), Some("green"));
        assert_eq!(assignment.colors().to_string(), "0 1 green\n1 0 red\n2 1 green\n");
    }

    #[test]
    fn test_rejects_zero_colors() {
        assert!(matches!(
            ColorAssigner::new().n_colors(0).assign(&create_triangle()),
            Err(Error::NoColors)
        ));
    }

    #[test]
    fn test_cancelled() {
        let flag = Arc::new(AtomicBool::new(true));
        assert!(matches!(
            ColorAssigner::new().cancel_flag(flag).assign(&create_triangle()),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_custom_palette() {
        let colors = ColorAssigner::new()
            .n_colors(3)
            .palette(Palette::new(vec!["cyan", "magenta", "yellow"]).unwrap())
            .assign(&create_triangle())
            .unwrap()
            .into_colors();
        assert_eq!(
            colors.iter().collect::<Vec<_>>(),
            vec![(0, "cyan"), (1, "magenta"), (2, "yellow")]
        );
    }

    #[test]
    fn test_empty_graph() {
        let colors = assign_colors(&ViewGraph::new(), 1).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_color_map_lookup() {
        // Views inserted out of id order, lookups must follow ids not positions.
        let g = ViewGraph::from_parts(vec![30, 10, 20], vec![(30, 10, 0.5), (10, 20, 0.5)])
            .unwrap();
        let colors = assign_colors(&g, 2).unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors.class(10), Some(0));
        assert_eq!(colors.color(10), Some("red"));
        assert_eq!(colors.class(30), Some(1));
        assert_eq!(colors.color(20), Some("green"));
        assert_eq!(colors.class(40), None);
        assert_eq!(colors.color(40), None);
        assert_eq!(
            colors.iter().map(|(v, _)| v).collect::<Vec<_>>(),
            vec![30, 10, 20]
        );
    }
}
