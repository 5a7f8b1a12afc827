use super::GraphRule;

pub type Result<T> = std::result::Result<T, pest::error::Error<GraphRule>>;
