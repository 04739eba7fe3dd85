use serde::Serialize;

use crate::ast::Node;

/// `{ stmt* }`. Opens a new child scope on entry, closes it on exit; the
/// scope lifecycle lives in the parser, not in this payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Node>,
}
