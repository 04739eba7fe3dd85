//! The expression-precedence ladder, lowest to highest. Every rung
//! but `assign` is left-associative; `assign` is right-associative and
//! right-recursive, as is `unary`.

use crate::ast::{Assign, Binary, FnCall, Identifier, Index, Literal, Node, NodeKind, Range, Unary};
use crate::token::TokenKind;

use super::Parser;

impl Parser {
    pub(super) fn expression(&mut self) -> Option<Node> {
        self.assignment()
    }

    /// Right-associative; triggers only on `IDENTIFIER` followed by one of
    /// `= += -= *= /= %= &=` (two-token lookahead). Otherwise falls
    /// through to `logical_or`.
    fn assignment(&mut self) -> Option<Node> {
        let is_assignment = self.check(TokenKind::Identifier)
            && matches!(
                self.peek_at(1).kind,
                TokenKind::Assign
                    | TokenKind::PlusAssign
                    | TokenKind::MinusAssign
                    | TokenKind::StarAssign
                    | TokenKind::SlashAssign
                    | TokenKind::PercentAssign
                    | TokenKind::AmpAssign
            );

        if !is_assignment {
            return self.logical_or();
        }

        let target = self.advance();
        let operator = self.advance();
        let value = self.assignment()?;
        self.record_use(&target, true);

        let location = target.location.clone();
        Some(Node::new(
            NodeKind::Assign(Assign {
                target,
                operator,
                value: Box::new(value),
            }),
            location,
        ))
    }

    fn logical_or(&mut self) -> Option<Node> {
        let mut left = self.logical_and()?;
        while self.check(TokenKind::OrOr) {
            let operator = self.advance();
            let right = self.logical_and()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    fn logical_and(&mut self) -> Option<Node> {
        let mut left = self.equality()?;
        while self.check(TokenKind::AndAnd) {
            let operator = self.advance();
            let right = self.equality()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    fn equality(&mut self) -> Option<Node> {
        let mut left = self.comparison()?;
        while self.check(TokenKind::EqEq) || self.check(TokenKind::NotEq) {
            let operator = self.advance();
            let right = self.comparison()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    fn comparison(&mut self) -> Option<Node> {
        let mut left = self.range_expr()?;
        while matches!(
            self.peek().kind,
            TokenKind::Less | TokenKind::Greater | TokenKind::LessEq | TokenKind::GreaterEq
        ) {
            let operator = self.advance();
            let right = self.range_expr()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    /// `a...b` with an optional second `...` introducing a step
    /// (`a...b...c`). Chaining a further `...` left-nests the previous
    /// range as the new start.
    pub(super) fn range_expr(&mut self) -> Option<Node> {
        let mut node = self.additive()?;
        while self.check(TokenKind::Ellipsis) {
            let location = node.location.clone();
            self.advance();
            let end = self.additive()?;
            let step = if self.match_kind(TokenKind::Ellipsis) {
                Some(Box::new(self.additive()?))
            } else {
                None
            };
            node = Node::new(
                NodeKind::Range(Range {
                    start: Box::new(node),
                    end: Box::new(end),
                    step,
                }),
                location,
            );
        }
        Some(node)
    }

    fn additive(&mut self) -> Option<Node> {
        let mut left = self.multiplicative()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            let operator = self.advance();
            let right = self.multiplicative()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    fn multiplicative(&mut self) -> Option<Node> {
        let mut left = self.unary()?;
        while matches!(
            self.peek().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let operator = self.advance();
            let right = self.unary()?;
            left = binary(left, operator, right);
        }
        Some(left)
    }

    /// Prefix `!` or `-`, right-recursive.
    fn unary(&mut self) -> Option<Node> {
        if self.check(TokenKind::Not) || self.check(TokenKind::Minus) {
            let operator = self.advance();
            let operand = self.unary()?;
            let location = operator.location.clone();
            return Some(Node::new(
                NodeKind::Unary(Unary {
                    operator,
                    operand: Box::new(operand),
                }),
                location,
            ));
        }
        self.postfix()
    }

    /// `[ expr ]` indexing and `( args )` calls, chained.
    fn postfix(&mut self) -> Option<Node> {
        let mut node = self.primary()?;
        loop {
            if self.match_kind(TokenKind::LBracket) {
                let location = node.location.clone();
                let index = self.expression()?;
                self.consume(TokenKind::RBracket, "expected ']' to close index expression")?;
                node = Node::new(
                    NodeKind::Index(Index {
                        base: Box::new(node),
                        index: Box::new(index),
                    }),
                    location,
                );
            } else if self.match_kind(TokenKind::LParen) {
                let location = node.location.clone();
                let mut args = Vec::new();
                if !self.check(TokenKind::RParen) {
                    loop {
                        args.push(self.expression()?);
                        if !self.match_kind(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.consume(TokenKind::RParen, "expected ')' to close call arguments")?;
                node = Node::new(
                    NodeKind::FnCall(FnCall {
                        callee: Box::new(node),
                        args,
                    }),
                    location,
                );
            } else {
                break;
            }
        }
        Some(node)
    }

    /// Literal, identifier, or parenthesized expression. An identifier in
    /// read position records a reference.
    fn primary(&mut self) -> Option<Node> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::CharLiteral
            | TokenKind::BoolLiteral
            | TokenKind::HexLiteral
            | TokenKind::OctalLiteral
            | TokenKind::BinaryLiteral
            | TokenKind::StringLiteral => {
                self.advance();
                Some(Node::new(
                    NodeKind::Literal(Literal::new(token.lexeme.clone())),
                    token.location,
                ))
            }
            TokenKind::Identifier => {
                self.advance();
                self.record_use(&token, false);
                Some(Node::new(
                    NodeKind::Identifier(Identifier::new(token.lexeme.clone())),
                    token.location,
                ))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RParen, "expected ')' to close parenthesized expression")?;
                Some(inner)
            }
            _ => {
                self.last_error = Some(crate::error::ParseError::new(
                    format!("unexpected token {:?} in expression position", token.kind),
                    token.location,
                ));
                None
            }
        }
    }
}

fn binary(left: Node, operator: crate::token::Token, right: Node) -> Node {
    let location = left.location.clone();
    Node::new(
        NodeKind::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }),
        location,
    )
}
