//! Expressions: precedence climbing over binary operators, prefix
//! operators, postfix calls and indexing, primaries.

use uniq_ir::{BinaryOp, Expr, ExprKind, QualifiedName, Symbol, UnaryOp};
use uniq_stack::ensure_sufficient_stack;

use super::Parser;
use crate::error::ParseError;
use crate::token::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(1)
    }

    /// Operators binding at least as tightly as `min_prec`, left-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.binary_op() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();
            let rhs = self.parse_binary(prec + 1)?;
            let span = lhs.span.merge(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }
        Ok(lhs)
    }

    fn binary_op(&self) -> Option<BinaryOp> {
        let op = match self.current_kind() {
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            _ => return None,
        };
        Some(op)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        let start = self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Primary followed by any number of `(args)` and `[index]`.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(&TokenKind::LParen) {
                let (args, _) = self.comma_list(&TokenKind::RParen, Self::parse_expr)?;
                let close = self.expect(&TokenKind::RParen, "`)`")?;
                let span = expr.span.merge(close);
                expr = Expr::new(
                    ExprKind::Call {
                        callee: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else if self.eat(&TokenKind::LBracket) {
                let index = self.parse_expr()?;
                let close = self.expect(&TokenKind::RBracket, "`]`")?;
                let span = expr.span.merge(close);
                expr = Expr::new(
                    ExprKind::Index {
                        base: Box::new(expr),
                        index: Box::new(index),
                    },
                    span,
                );
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(value) => {
                let value = *value;
                self.advance();
                ExprKind::Int(value)
            }
            TokenKind::Str(text) => {
                let text = text.clone();
                self.advance();
                ExprKind::Str(text)
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Bool(false)
            }
            TokenKind::LParen => return ensure_sufficient_stack(|| self.parse_paren()),
            TokenKind::LBracket => {
                return ensure_sufficient_stack(|| {
                    self.advance();
                    let (items, _) = self.comma_list(&TokenKind::RBracket, Self::parse_expr)?;
                    let close = self.expect(&TokenKind::RBracket, "`]`")?;
                    Ok(Expr::new(ExprKind::Array(items), span.merge(close)))
                });
            }
            TokenKind::Ident(_) => return self.parse_path(),
            _ => return Err(self.error("expression")),
        };
        Ok(Expr::new(kind, span))
    }

    /// `()` unit, `(e)` grouping, `(e,)` / `(a, b)` tuple.
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(&TokenKind::LParen, "`(`")?;
        let (mut items, saw_comma) = self.comma_list(&TokenKind::RParen, Self::parse_expr)?;
        let close = self.expect(&TokenKind::RParen, "`)`")?;
        let span = open.merge(close);
        let expr = match items.len() {
            0 => Expr::new(ExprKind::Unit, span),
            1 if !saw_comma => items.remove(0),
            _ => Expr::new(ExprKind::Tuple(items), span),
        };
        Ok(expr)
    }

    /// `name {:: name} [::<types>]`. One segment is a local, more are a
    /// global path.
    fn parse_path(&mut self) -> Result<Expr, ParseError> {
        let (first, start) = self.expect_ident()?;
        let mut segments = vec![first];
        let mut type_args = None;
        while self.check(&TokenKind::DoubleColon) {
            match self.peek_kind(1) {
                TokenKind::Ident(_) => {
                    self.advance();
                    let (segment, _) = self.expect_ident()?;
                    segments.push(segment);
                }
                TokenKind::Lt => {
                    self.advance();
                    self.advance();
                    type_args = Some(self.parse_type_args()?);
                    break;
                }
                _ => {
                    self.advance();
                    return Err(self.error("identifier or `<`"));
                }
            }
        }

        let span = start.merge(self.previous_span());
        let symbol = match segments.pop() {
            Some(name) if segments.is_empty() => Symbol::Local(name),
            Some(name) => Symbol::Global(QualifiedName {
                namespace: segments,
                name,
            }),
            None => return Err(self.error("identifier")),
        };
        Ok(Expr::new(ExprKind::Ident { symbol, type_args }, span))
    }
}

