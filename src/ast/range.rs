use serde::Serialize;

use crate::ast::Node;

/// `a...b` (`start`, `end`) with an optional second `...` introducing a
/// step (`a...b...c`). An inclusive-end flag is intentionally not
/// retained here; see DESIGN.md for why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    pub start: Box<Node>,
    pub end: Box<Node>,
    pub step: Option<Box<Node>>,
}
