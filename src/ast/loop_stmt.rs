use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

/// `loop` in any of its three forms: `condition` is `None` for the
/// unconditional form, `Some(expr)` for the condition form, and
/// `Some(NodeKind::LoopExpr)` for the iterator form (`loop ident : range
/// Block`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loop {
    pub condition: Option<Box<Node>>,
    pub body: Box<Node>,
}

/// The iterator-form binder of a [`Loop`]: `ident : rangeExpr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopExpr {
    pub ident: Token,
    pub range: Box<Node>,
}
