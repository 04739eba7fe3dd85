use serde::Serialize;

use crate::ast::Node;

/// `ForLoop`: an iteration expression plus a
/// body block. No statement production reaches this tag — the
/// `loop ident : range Block` iterator form builds a [`crate::ast::Loop`]
/// with a [`crate::ast::LoopExpr`] condition instead, and the `for` keyword
/// is lexed but never dispatched to a statement parser (reserved, like
/// `import`). Kept for interface completeness; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForLoop {
    pub iterable: Box<Node>,
    pub body: Box<Node>,
}
