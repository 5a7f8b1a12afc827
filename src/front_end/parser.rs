use super::{error::Result, Ast};
use crate::types::ViewId;
use itertools::Itertools;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::str::FromStr;

pub type GraphRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GraphParser;

/// Parses a view graph such as
///
/// ```text
/// (graph (views 0 1 2)
///        (edges (0 1 0.9) (1 2 0.5)))
/// ```
pub fn parse(input: &str) -> Result<Ast> {
    let mut ast = Ast::default();
    for pair in GraphParser::parse(Rule::graph, input)? {
        match pair.as_rule() {
            Rule::views_stat => {
                ast.set_views(
                    pair.into_inner()
                        .map(|p| parse_number(&p))
                        .collect::<Result<_>>()?,
                );
            }
            Rule::edges_stat => {
                ast.set_edges(parse_edges_stat(pair)?);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(ast)
}

fn custom_error(pair: &Pair<Rule>, message: String) -> pest::error::Error<GraphRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError { message },
        pair.as_span(),
    )
}

fn parse_number<T: FromStr>(pair: &Pair<Rule>) -> Result<T> {
    pair.as_str()
        .parse()
        .map_err(|_| custom_error(pair, format!("invalid number {}", pair.as_str())))
}

fn parse_edges_stat(pair: Pair<Rule>) -> Result<Vec<(ViewId, ViewId, f64)>> {
    let mut edges = vec![];
    for edge in pair.into_inner() {
        for (a, b, overlap) in edge.into_inner().tuples() {
            match (a.as_rule(), b.as_rule(), overlap.as_rule()) {
                (Rule::view, Rule::view, Rule::overlap) => {
                    edges.push((
                        parse_number(&a)?,
                        parse_number(&b)?,
                        parse_number(&overlap)?,
                    ));
                }
                _ => unreachable!(),
            }
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse(
                "\
(graph (views 0 1 2)
       ; tile overlaps
       (edges (0 1 0.9) (1 2 0.5e0) (2 0 3e-1)))
"
            ),
            Ok(Ast::new(
                vec![0, 1, 2],
                vec![(0, 1, 0.9), (1, 2, 0.5), (2, 0, 0.3)]
            ))
        );
    }

    #[test]
    fn test_no_edges() {
        assert_eq!(
            parse("(graph (views 4 7))"),
            Ok(Ast::new(vec![4, 7], vec![]))
        );
        assert_eq!(parse("(graph (views))"), Ok(Ast::default()));
    }

    #[test]
    fn test_negative_overlap_parses() {
        assert_eq!(
            parse("(graph (views 0 1) (edges (0 1 -0.5)))"),
            Ok(Ast::new(vec![0, 1], vec![(0, 1, -0.5)]))
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse("(graph (edges (0 1 0.5)))").is_err());
        assert!(parse("(graph (views 0 1) (edges (0 1)))").is_err());
        assert!(parse("(graph (views 99999999999))").is_err());
        assert!(parse("(graph (views 0)) trailing").is_err());
    }
}
