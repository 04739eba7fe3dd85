use serde::Serialize;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: Token,
    pub type_token: Token,
}
