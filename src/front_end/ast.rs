use crate::types::ViewId;

#[derive(Debug, PartialEq, Default)]
pub struct Ast {
    views: Vec<ViewId>,
    edges: Vec<(ViewId, ViewId, f64)>,
}

impl Ast {
    pub fn new(views: Vec<ViewId>, edges: Vec<(ViewId, ViewId, f64)>) -> Self {
        Self { views, edges }
    }

    pub fn set_views(&mut self, views: Vec<ViewId>) {
        self.views = views;
    }

    pub fn set_edges(&mut self, edges: Vec<(ViewId, ViewId, f64)>) {
        self.edges = edges;
    }

    pub fn views(&self) -> &[ViewId] {
        &self.views
    }

    pub fn edges(&self) -> &[(ViewId, ViewId, f64)] {
        &self.edges
    }
}
