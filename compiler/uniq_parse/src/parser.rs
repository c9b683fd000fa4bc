//! Recursive descent parser producing [`uniq_ir`] trees.
//!
//! One method per grammar rule, split across submodules by node category.
//! Nesting rules (blocks, unary operands, parenthesized forms) grow the
//! stack through [`uniq_stack::ensure_sufficient_stack`].

mod expr;
mod items;
mod patterns;
mod stmt;

use uniq_ir::{Name, Span};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Parser state.
pub(crate) struct Parser<'t> {
    tokens: &'t [Token],
    /// Returned once the cursor runs past the last token.
    eof: Token,
    pos: usize,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        let end = tokens.last().map_or(Span::DUMMY, |t| Span::point(t.span.end));
        Parser {
            tokens,
            eof: Token::new(TokenKind::Eof, end),
            pos: 0,
        }
    }

    // ===== Token access =====

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn peek_kind(&self, offset: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(&self.eof.kind, |t| &t.kind)
    }

    pub(crate) fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.at_end() {
            self.pos += 1;
        }
        span
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume `kind` if it is next.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(expected))
        }
    }

    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let name = name.clone();
            let span = self.advance();
            Ok((name, span))
        } else {
            Err(self.error("identifier"))
        }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current_kind().clone(),
            span: self.current_span(),
        }
    }

    /// Parse `item { "," item }` up to (not including) `close`. A trailing
    /// comma is accepted. Returns the items and whether any comma was seen.
    fn comma_list<T>(
        &mut self,
        close: &TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, bool), ParseError> {
        let mut items = Vec::new();
        let mut saw_comma = false;
        while !self.check(close) {
            items.push(item(self)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
            saw_comma = true;
        }
        Ok((items, saw_comma))
    }
}

#[cfg(test)]
mod tests;
