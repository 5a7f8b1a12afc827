use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq)]
#[display(fmt = "{} views, {} edges", num_views, num_edges)]
pub struct GraphInfo {
    num_views: usize,
    num_edges: usize,
}

impl GraphInfo {
    pub fn new(num_views: usize, num_edges: usize) -> Self {
        Self {
            num_views,
            num_edges,
        }
    }
}
