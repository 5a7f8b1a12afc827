//! The text form of view graphs.

pub use ast::Ast;
pub use codegen::codegen;
pub use parser::parse;

pub use parser::GraphRule;

pub mod error;

mod ast;
mod codegen;
mod parser;

use crate::{error::Result, graph::ViewGraph};
use std::path::Path;

/// Parses and builds the view graph in `input`.
pub fn graph_from_str(input: &str) -> Result<ViewGraph> {
    codegen(&parse(input)?)
}

/// Reads the view graph stored in the text file `path`.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<ViewGraph> {
    let input = std::fs::read_to_string(path)?;
    graph_from_str(&input)
}
