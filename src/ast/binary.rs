use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binary {
    pub left: Box<Node>,
    pub operator: Token,
    pub right: Box<Node>,
}
