use serde::Serialize;

use crate::ast::Node;
use crate::token::Token;

/// Shared payload for `struct`/`union` declarations: `kw Name { field (,
/// field)* }`. The two AST tags differ only in the introducing keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: Token,
    pub fields: Vec<Node>,
}

/// `ident : Type` inside a struct or union body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: Token,
    pub type_token: Token,
}

/// `enum Name { ident (, ident)* }`, trailing-comma tolerant. Variants are
/// plain identifier tokens, not general expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDecl {
    pub name: Token,
    pub variants: Vec<Token>,
}
