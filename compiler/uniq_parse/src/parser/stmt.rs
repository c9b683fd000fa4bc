//! Blocks and statements.

use uniq_ir::{Block, CondBranch, Stmt, StmtKind};
use uniq_stack::ensure_sufficient_stack;

use super::Parser;
use crate::error::ParseError;
use crate::token::TokenKind;

impl Parser<'_> {
    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            let open = self.expect(&TokenKind::LBrace, "`{`")?;
            let mut stmts = Vec::new();
            while !self.check(&TokenKind::RBrace) {
                if self.at_end() {
                    return Err(self.error("`}`"));
                }
                stmts.push(self.parse_stmt()?);
            }
            let close = self.advance();
            Ok(Block::new(stmts, open.merge(close)))
        })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Let => self.parse_let()?,
            TokenKind::Set => {
                self.advance();
                let target = self.parse_expr()?;
                self.expect(&TokenKind::Eq, "`=`")?;
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon, "`;`")?;
                StmtKind::Set { target, value }
            }
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(&TokenKind::Semicolon, "`;`")?;
                StmtKind::Return(value)
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::While => {
                self.advance();
                let cond = self.parse_expr()?;
                let body = self.parse_block()?;
                StmtKind::While { cond, body }
            }
            TokenKind::For => {
                self.advance();
                let pattern = self.parse_binding_pattern()?;
                self.expect(&TokenKind::In, "`in`")?;
                let iterable = self.parse_expr()?;
                let body = self.parse_block()?;
                StmtKind::For {
                    pattern,
                    iterable,
                    body,
                }
            }
            TokenKind::Repeat => self.parse_repeat()?,
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            _ => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon, "`;`")?;
                StmtKind::Expr(expr)
            }
        };
        Ok(Stmt::new(kind, start.merge(self.previous_span())))
    }

    /// `let [mut] pattern = expr;`
    fn parse_let(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Let, "`let`")?;
        let mutable = self.eat(&TokenKind::Mut);
        let pattern = self.parse_binding_pattern()?;
        self.expect(&TokenKind::Eq, "`=`")?;
        let init = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(StmtKind::Let {
            pattern,
            mutable,
            init,
        })
    }

    /// `if c { } { elif c { } } [else { }]`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::If, "`if`")?;
        let mut branches = Vec::new();
        loop {
            let cond = self.parse_expr()?;
            let block = self.parse_block()?;
            branches.push(CondBranch { cond, block });
            if !self.eat(&TokenKind::Elif) {
                break;
            }
        }
        let else_block = if self.eat(&TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            branches,
            else_block,
        })
    }

    /// `repeat { } until cond [fixup { }];`
    fn parse_repeat(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Repeat, "`repeat`")?;
        let body = self.parse_block()?;
        self.expect(&TokenKind::Until, "`until`")?;
        let until = self.parse_expr()?;
        let fixup = if self.eat(&TokenKind::Fixup) {
            Some(self.parse_block()?)
        } else {
            None
        };
        self.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(StmtKind::Repeat { body, until, fixup })
    }
}
