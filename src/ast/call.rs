use serde::Serialize;

use crate::ast::Node;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FnCall {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}
