//! Type declarations: struct/union share one production shape;
//! enums are a flat identifier list.

use crate::ast::{EnumDecl, Field, Node, NodeKind, TypeDecl};
use crate::diagnostics::Diagnostic;
use crate::symbol::{DataType, Symbol, SymbolKind};
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    /// `kw Name { field (, field)* }`, where `field` is `ident : Type`.
    /// `struct` and `union` share this production; only the resulting AST
    /// tag differs. The symbol table has no dedicated "union" symbol kind,
    /// so both insert a `SymbolKind::Struct` entry — see DESIGN.md.
    pub(super) fn type_decl(&mut self, is_union: bool) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'struct' / 'union'
        let name = self.consume(TokenKind::Identifier, "expected type name")?;
        self.consume(TokenKind::LBrace, "expected '{' to start type body")?;
        self.skip_separators();

        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let field_start = self.peek().location.clone();
            let Some(field_name) = self.consume(TokenKind::Identifier, "expected field name") else {
                break;
            };
            self.consume(TokenKind::Colon, "expected ':' after field name")?;
            let field_type = self.consume(TokenKind::Type, "expected field type")?;
            fields.push(Node::new(
                NodeKind::Field(Field {
                    name: field_name,
                    type_token: field_type,
                }),
                field_start,
            ));
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
            self.skip_separators();
        }
        self.skip_separators();
        self.consume(TokenKind::RBrace, "expected '}' to close type body")?;

        if self.symbols.lookup_current_scope(&name.lexeme).is_some() {
            self.diagnostics
                .push(Diagnostic::redeclaration(&name.lexeme, name.location.clone()));
        } else {
            let symbol = Symbol::new(
                &name.lexeme,
                SymbolKind::Struct,
                DataType::Struct,
                name.location.line,
                self.symbols.current_depth(),
            );
            self.symbols.insert(symbol);
        }

        let payload = TypeDecl { name, fields };
        let kind = if is_union {
            NodeKind::Union(payload)
        } else {
            NodeKind::Struct(payload)
        };
        Some(Node::new(kind, start))
    }

    /// `enum Name { ident (, ident)* }`, trailing-comma tolerant.
    pub(super) fn enum_decl(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'enum'
        let name = self.consume(TokenKind::Identifier, "expected enum name")?;
        self.consume(TokenKind::LBrace, "expected '{' to start enum body")?;
        self.skip_separators();

        let mut variants = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let Some(variant) = self.consume(TokenKind::Identifier, "expected enum variant name") else {
                break;
            };
            variants.push(variant);
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
            self.skip_separators();
        }
        self.skip_separators();
        self.consume(TokenKind::RBrace, "expected '}' to close enum body")?;

        if self.symbols.lookup_current_scope(&name.lexeme).is_some() {
            self.diagnostics
                .push(Diagnostic::redeclaration(&name.lexeme, name.location.clone()));
        } else {
            let symbol = Symbol::new(
                &name.lexeme,
                SymbolKind::Enum,
                DataType::Enum,
                name.location.line,
                self.symbols.current_depth(),
            );
            self.symbols.insert(symbol);
        }

        Some(Node::new(NodeKind::Enum(EnumDecl { name, variants }), start))
    }
}
