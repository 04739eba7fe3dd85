use serde::Serialize;

use crate::ast::Node;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Index {
    pub base: Box<Node>,
    pub index: Box<Node>,
}
