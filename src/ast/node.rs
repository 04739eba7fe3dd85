//! The tagged union at the center of the data model: every AST node
//! is a [`NodeKind`] payload plus the [`SourceLocation`] of the token that
//! started the construct it represents.

use serde::Serialize;

use crate::token::SourceLocation;

use super::{
    ArrayDecl, Assign, Binary, Block, Decl, EnumDecl, Field, FnCall, FnDecl, ForLoop, Identifier,
    If, Index, Literal, Loop, LoopExpr, Match, MatchCase, Param, Program, Range, Return, TypeDecl,
    Unary,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    Literal(Literal),
    Identifier(Identifier),
    Unary(Unary),
    Binary(Binary),
    Assign(Assign),
    Index(Index),
    FnCall(FnCall),
    Range(Range),
    LoopExpr(LoopExpr),
    VarDecl(Decl),
    ConstDecl(Decl),
    ArrayDecl(ArrayDecl),
    Param(Param),
    FnDecl(FnDecl),
    Return(Return),
    Block(Block),
    If(If),
    Match(Match),
    MatchCase(MatchCase),
    ForLoop(ForLoop),
    Loop(Loop),
    Struct(TypeDecl),
    Union(TypeDecl),
    Field(Field),
    Enum(EnumDecl),
    Program(Program),
}

impl Node {
    pub fn new(kind: NodeKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// Name of the variant this node carries, for diagnostics and tests.
    pub fn tag(&self) -> &'static str {
        match &self.kind {
            NodeKind::Literal(_) => "Literal",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Unary(_) => "Unary",
            NodeKind::Binary(_) => "Binary",
            NodeKind::Assign(_) => "Assign",
            NodeKind::Index(_) => "Index",
            NodeKind::FnCall(_) => "FnCall",
            NodeKind::Range(_) => "Range",
            NodeKind::LoopExpr(_) => "LoopExpr",
            NodeKind::VarDecl(_) => "VarDecl",
            NodeKind::ConstDecl(_) => "ConstDecl",
            NodeKind::ArrayDecl(_) => "ArrayDecl",
            NodeKind::Param(_) => "Param",
            NodeKind::FnDecl(_) => "FnDecl",
            NodeKind::Return(_) => "Return",
            NodeKind::Block(_) => "Block",
            NodeKind::If(_) => "If",
            NodeKind::Match(_) => "Match",
            NodeKind::MatchCase(_) => "MatchCase",
            NodeKind::ForLoop(_) => "ForLoop",
            NodeKind::Loop(_) => "Loop",
            NodeKind::Struct(_) => "Struct",
            NodeKind::Union(_) => "Union",
            NodeKind::Field(_) => "Field",
            NodeKind::Enum(_) => "Enum",
            NodeKind::Program(_) => "Program",
        }
    }
}
