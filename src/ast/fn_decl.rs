use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

/// `fn ident ( paramList ) [ -> ReturnType ] Block`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FnDecl {
    pub name: Token,
    pub params: Vec<Node>,
    pub return_type: Option<Token>,
    pub body: Box<Node>,
}
