use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unary {
    pub operator: Token,
    pub operand: Box<Node>,
}
