//! Variable/constant and array declarations, and function declarations.
//! Each inserts into the symbol table after a
//! `lookup_current_scope` redeclaration check.

use crate::ast::{ArrayDecl, Decl, FnDecl, Node, NodeKind, Param};
use crate::diagnostics::Diagnostic;
use crate::symbol::{DataType, ScopeFlags, Symbol, SymbolInfo, SymbolKind};
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    fn literal_text(node: &Node) -> Option<String> {
        match &node.kind {
            NodeKind::Literal(lit) => Some(lit.value.clone()),
            _ => None,
        }
    }

    /// Checks for a redeclaration in the current scope and either inserts
    /// `symbol` or emits a diagnostic — never both.
    fn declare_or_diagnose(&mut self, name: &crate::token::Token, symbol: Symbol) {
        if self.symbols.lookup_current_scope(&name.lexeme).is_some() {
            self.diagnostics
                .push(Diagnostic::redeclaration(&name.lexeme, name.location.clone()));
        } else {
            self.symbols.insert(symbol);
        }
    }

    /// `var ident [ : Type ] [ = expr ]` (`let` for constants). Rewrites to
    /// an array declaration if `[` follows the identifier.
    pub(super) fn decl_stmt(&mut self, is_const: bool) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'var' / 'let'
        let name = self.consume(TokenKind::Identifier, "expected identifier after declaration keyword")?;

        if self.check(TokenKind::LBracket) {
            return self.array_decl(start, name);
        }

        let declared_type = if self.match_kind(TokenKind::Colon) {
            Some(self.consume(TokenKind::Type, "expected type after ':'")?)
        } else {
            None
        };

        let initializer = if self.match_kind(TokenKind::Assign) {
            Some(Box::new(self.expression()?))
        } else {
            None
        };

        let initial_value = initializer.as_deref().and_then(Self::literal_text);
        let symbol_kind = if is_const {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };
        let symbol = Symbol::new(
            &name.lexeme,
            symbol_kind,
            DataType::Unknown,
            name.location.line,
            self.symbols.current_depth(),
        )
        .with_info(SymbolInfo::Var {
            initial_value,
            size: None,
            is_constant: is_const,
        });
        self.declare_or_diagnose(&name, symbol);

        let decl = Decl {
            name,
            declared_type,
            initializer,
        };
        let kind = if is_const {
            NodeKind::ConstDecl(decl)
        } else {
            NodeKind::VarDecl(decl)
        };
        Some(Node::new(kind, start))
    }

    /// `ident [ Type : sizeExpr ] = [ elem, ... ]`.
    fn array_decl(&mut self, start: crate::token::SourceLocation, name: crate::token::Token) -> Option<Node> {
        self.consume(TokenKind::LBracket, "expected '[' in array declaration")?;
        let element_type = self.consume(TokenKind::Type, "expected element type in array declaration")?;
        self.consume(TokenKind::Colon, "expected ':' in array declaration")?;
        let size = self.expression()?;
        self.consume(TokenKind::RBracket, "expected ']' to close array declaration")?;

        let initializers = if self.match_kind(TokenKind::Assign) {
            self.consume(TokenKind::LBracket, "expected '[' to start array initializer")?;
            let mut elems = Vec::new();
            if !self.check(TokenKind::RBracket) {
                loop {
                    elems.push(self.expression()?);
                    if !self.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.consume(TokenKind::RBracket, "expected ']' to close array initializer")?;
            Some(elems)
        } else {
            None
        };

        let symbol = Symbol::new(
            &name.lexeme,
            SymbolKind::Array,
            DataType::Array,
            name.location.line,
            self.symbols.current_depth(),
        )
        .with_info(SymbolInfo::Array {
            dimensions: 1,
            size: None,
        });
        self.declare_or_diagnose(&name, symbol);

        Some(Node::new(
            NodeKind::ArrayDecl(ArrayDecl {
                name,
                element_type,
                size: Box::new(size),
                initializers,
            }),
            start,
        ))
    }

    /// `fn ident ( paramList ) [ -> ReturnType ] Block`. The function
    /// symbol is inserted into the *enclosing* scope before parameters are
    /// parsed, so recursive calls resolve inside the body.
    pub(super) fn fn_decl(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'fn'
        let name = self.consume(TokenKind::Identifier, "expected function name")?;

        let symbol = Symbol::new(
            &name.lexeme,
            SymbolKind::Function,
            DataType::Unknown,
            name.location.line,
            self.symbols.current_depth(),
        )
        .with_info(SymbolInfo::Func {
            params: Vec::new(),
            param_count: 0,
            is_defined: false,
        });
        self.declare_or_diagnose(&name, symbol);

        self.consume(TokenKind::LParen, "expected '(' after function name")?;
        self.symbols.enter_scope(ScopeFlags::FUNCTION);

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                match self.param() {
                    Some(param) => params.push(param),
                    None => break,
                }
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RParen, "expected ')' after parameter list")?;

        let return_type = if self.match_kind(TokenKind::Arrow) {
            Some(self.consume(TokenKind::Type, "expected return type after '->'")?)
        } else {
            None
        };

        let body = self.block()?;
        self.symbols.exit_scope();

        Some(Node::new(
            NodeKind::FnDecl(FnDecl {
                name,
                params,
                return_type,
                body: Box::new(body),
            }),
            start,
        ))
    }

    fn param(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        let name = self.consume(TokenKind::Identifier, "expected parameter name")?;
        self.consume(TokenKind::Colon, "expected ':' after parameter name")?;
        let type_token = self.consume(TokenKind::Type, "expected parameter type")?;

        let position = self.symbols.current_scope().borrow().symbols.len();
        let symbol = Symbol::new(
            &name.lexeme,
            SymbolKind::Param,
            DataType::Unknown,
            name.location.line,
            self.symbols.current_depth(),
        )
        .with_info(SymbolInfo::Param {
            position,
            stack_offset: None,
        });
        self.declare_or_diagnose(&name, symbol);

        Some(Node::new(NodeKind::Param(Param { name, type_token }), start))
    }
}
