use super::Ast;
use crate::{error::Result, graph::ViewGraph};

/// Builds the view graph described by `ast`, validating every edge.
pub fn codegen(ast: &Ast) -> Result<ViewGraph> {
    ViewGraph::from_parts(ast.views().iter().copied(), ast.edges().iter().copied())
}
