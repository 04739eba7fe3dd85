use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: Token,
    pub operator: Token,
    pub value: Box<Node>,
}
