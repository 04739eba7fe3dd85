use serde::Serialize;

use crate::ast::Node;

/// `if expr Block (else (if ... | Block))?`. `else_branch` holds another
/// [`crate::ast::NodeKind::If`] for an else-if chain, or a
/// [`crate::ast::NodeKind::Block`] for a plain else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct If {
    pub condition: Box<Node>,
    pub then_block: Box<Node>,
    pub else_branch: Option<Box<Node>>,
}
