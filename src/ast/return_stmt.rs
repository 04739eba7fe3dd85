use serde::Serialize;

use crate::ast::Node;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub value: Option<Box<Node>>,
}
