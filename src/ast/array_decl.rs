use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

/// `ident [ Type : sizeExpr ] = [ elem, ... ]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayDecl {
    pub name: Token,
    pub element_type: Token,
    pub size: Box<Node>,
    pub initializers: Option<Vec<Node>>,
}
