//! Control-flow and block statements: blocks, if/else, match, loop,
//! return.

use crate::ast::{Block, If, Loop, LoopExpr, Match, MatchCase, Node, NodeKind, Return};
use crate::diagnostics::Diagnostic;
use crate::symbol::{DataType, ScopeFlags, Symbol, SymbolInfo, SymbolKind};
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    /// `{ stmt* }`. Opens a new child scope on entry, closes it on exit.
    pub(super) fn block(&mut self) -> Option<Node> {
        let start = self.consume(TokenKind::LBrace, "expected '{' to start block")?.location;
        self.symbols.enter_scope(ScopeFlags::empty());

        let mut statements = Vec::new();
        self.skip_separators();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            match self.statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    if !self.is_at_end() {
                        self.advance();
                    }
                }
            }
            self.skip_separators();
        }
        self.consume(TokenKind::RBrace, "expected '}' to close block");
        self.symbols.exit_scope();

        Some(Node::new(NodeKind::Block(Block { statements }), start))
    }

    /// `if expr Block (else (if ... | Block))?`.
    pub(super) fn if_stmt(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'if'
        let condition = self.expression()?;
        let then_block = self.block()?;

        let else_branch = if self.match_kind(TokenKind::Else) {
            if self.check(TokenKind::If) {
                Some(Box::new(self.if_stmt()?))
            } else {
                Some(Box::new(self.block()?))
            }
        } else {
            None
        };

        Some(Node::new(
            NodeKind::If(If {
                condition: Box::new(condition),
                then_block: Box::new(then_block),
                else_branch,
            }),
            start,
        ))
    }

    /// `match expr { (pattern => stmt)* (_ => stmt)? }`. The default case
    /// is distinguished by its pattern being `_`.
    pub(super) fn match_stmt(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'match'
        let scrutinee = self.expression()?;
        self.consume(TokenKind::LBrace, "expected '{' to start match body")?;
        self.skip_separators();

        let mut cases = Vec::new();
        let mut default_case = None;

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let case_start = self.peek().location.clone();
            let pattern = if self.match_kind(TokenKind::Underscore) {
                None
            } else {
                Some(Box::new(self.expression()?))
            };
            self.consume(TokenKind::Arrow, "expected '=>' in match case")?;
            let body = self.statement()?;

            let is_default = pattern.is_none();
            let case_node = Node::new(
                NodeKind::MatchCase(MatchCase {
                    pattern,
                    body: Box::new(body),
                }),
                case_start,
            );
            if is_default {
                default_case = Some(Box::new(case_node));
            } else {
                cases.push(case_node);
            }

            self.match_kind(TokenKind::Comma);
            self.skip_separators();
        }
        self.consume(TokenKind::RBrace, "expected '}' to close match body")?;

        Some(Node::new(
            NodeKind::Match(Match {
                scrutinee: Box::new(scrutinee),
                cases,
                default_case,
            }),
            start,
        ))
    }

    /// `loop` in its three forms, distinguished by lookahead: `{` for
    /// unconditional, `IDENTIFIER :` for the iterator form, otherwise the
    /// condition form. A `LOOP`-flagged scope wraps the whole construct so
    /// the body block (and any nested block within it) inherits the flag
    /// via [`crate::symbol::Scope::new_child`]'s flag inheritance.
    pub(super) fn loop_stmt(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'loop'
        self.symbols.enter_scope(ScopeFlags::LOOP);

        let condition = if self.check(TokenKind::LBrace) {
            None
        } else if self.check(TokenKind::Identifier) && self.peek_at(1).kind == TokenKind::Colon {
            Some(Box::new(self.loop_iterator_expr()?))
        } else {
            Some(Box::new(self.expression()?))
        };

        let body = self.block()?;
        self.symbols.exit_scope();

        Some(Node::new(
            NodeKind::Loop(Loop {
                condition,
                body: Box::new(body),
            }),
            start,
        ))
    }

    /// `ident : rangeExpr`, the iterator-form binder. Declares `ident` as
    /// a variable in the (already-entered) loop scope.
    fn loop_iterator_expr(&mut self) -> Option<Node> {
        let ident = self.advance(); // identifier
        let location = ident.location.clone();
        self.advance(); // ':'
        let range = self.range_expr()?;

        let symbol = Symbol::new(
            &ident.lexeme,
            SymbolKind::Variable,
            DataType::Unknown,
            ident.location.line,
            self.symbols.current_depth(),
        )
        .with_info(SymbolInfo::Var {
            initial_value: None,
            size: None,
            is_constant: false,
        });
        if self.symbols.lookup_current_scope(&ident.lexeme).is_some() {
            self.diagnostics
                .push(Diagnostic::redeclaration(&ident.lexeme, ident.location.clone()));
        } else {
            self.symbols.insert(symbol);
        }

        Some(Node::new(
            NodeKind::LoopExpr(LoopExpr {
                ident,
                range: Box::new(range),
            }),
            location,
        ))
    }

    /// `return expr ;` (the trailing separator is optional).
    pub(super) fn return_stmt(&mut self) -> Option<Node> {
        let start = self.peek().location.clone();
        self.advance(); // 'return'

        let value = if self.check(TokenKind::Newline)
            || self.check(TokenKind::Semicolon)
            || self.check(TokenKind::RBrace)
            || self.is_at_end()
        {
            None
        } else {
            Some(Box::new(self.expression()?))
        };

        Some(Node::new(NodeKind::Return(Return { value }), start))
    }
}
