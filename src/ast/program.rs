use serde::Serialize;

use crate::ast::Node;

/// The AST root: an ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Node>,
}
