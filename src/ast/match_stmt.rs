use serde::Serialize;

use crate::ast::Node;

/// `match expr { (pattern => stmt)* (_ => stmt)? }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub scrutinee: Box<Node>,
    pub cases: Vec<Node>,
    pub default_case: Option<Box<Node>>,
}

/// A single `pattern => stmt` arm. `pattern` is `None` for the default
/// (`_ => stmt`) arm, which is lifted out into `Match::default_case`
/// instead of living in `cases`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCase {
    pub pattern: Option<Box<Node>>,
    pub body: Box<Node>,
}
