//! Error management.

use crate::{front_end::GraphRule, types::ViewId};
use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "parse error: {}", _0)]
    Parse(pest::error::Error<GraphRule>),
    #[display(fmt = "sqlite error: {}", _0)]
    Sqlite(rusqlite::Error),
    #[display(fmt = "io error: {}", _0)]
    Io(std::io::Error),
    #[display(fmt = "duplicate view {}", _0)]
    DuplicateView(ViewId),
    #[display(fmt = "unknown view {}", _0)]
    UnknownView(ViewId),
    #[display(fmt = "self-loop on view {}", _0)]
    SelfLoop(ViewId),
    #[display(fmt = "duplicate edge ({}, {})", _0, _1)]
    DuplicateEdge(ViewId, ViewId),
    #[display(fmt = "overlap {} of edge ({}, {}) is outside [0, 1]", _2, _0, _1)]
    InvalidOverlap(ViewId, ViewId, f64),
    #[display(fmt = "n_colors must be at least 1")]
    NoColors,
    #[display(fmt = "palette must not be empty")]
    EmptyPalette,
    #[display(fmt = "color assignment cancelled")]
    Cancelled,
    #[display(fmt = "pruning thresholds exhausted after {} rounds", _0)]
    ThresholdsExhausted(usize),
}

impl std::error::Error for Error {}

impl From<pest::error::Error<GraphRule>> for Error {
    fn from(e: pest::error::Error<GraphRule>) -> Self {
        Error::Parse(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Sqlite(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
