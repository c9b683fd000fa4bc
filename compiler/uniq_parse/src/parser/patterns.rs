//! Binding patterns and type annotations.

use uniq_ir::{BindingPattern, LocalDecl, Spanned, TypeExpr};
use uniq_stack::ensure_sufficient_stack;

use super::Parser;
use crate::error::ParseError;
use crate::token::TokenKind;

impl Parser<'_> {
    /// `name [: type]` | `_` | `( [pattern {, pattern}] )`
    pub(crate) fn parse_binding_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        match self.current_kind() {
            TokenKind::Underscore => Ok(BindingPattern::Discarded(self.advance())),
            TokenKind::LParen => ensure_sufficient_stack(|| {
                let open = self.advance();
                let (mut elems, saw_comma) =
                    self.comma_list(&TokenKind::RParen, Self::parse_binding_pattern)?;
                let close = self.expect(&TokenKind::RParen, "`)`")?;
                if elems.len() == 1 && !saw_comma {
                    Ok(elems.remove(0))
                } else {
                    Ok(BindingPattern::Tuple(elems, open.merge(close)))
                }
            }),
            TokenKind::Ident(_) => {
                let (name, span) = self.expect_ident()?;
                let ty = self.parse_type_annotation()?;
                let span = ty.as_ref().map_or(span, |ty| span.merge(ty.span()));
                Ok(BindingPattern::Name(LocalDecl::new(name, ty, span)))
            }
            _ => Err(self.error("pattern")),
        }
    }

    /// Optional `: type` after a binding name.
    pub(crate) fn parse_type_annotation(&mut self) -> Result<Option<TypeExpr>, ParseError> {
        if self.eat(&TokenKind::Colon) {
            self.parse_type().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `Name [< type {, type} >]` | `( types )` | `[ type ]`
    pub(crate) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Ident(_) => {
                let (name, start) = self.expect_ident()?;
                let mut args = Vec::new();
                let mut span = start;
                if self.eat(&TokenKind::Lt) {
                    args = self.parse_type_args()?;
                    span = start.merge(self.previous_span());
                }
                Ok(TypeExpr::Named { name, args, span })
            }
            TokenKind::LParen => {
                let open = self.advance();
                let (elems, _) = self.comma_list(&TokenKind::RParen, Self::parse_type)?;
                let close = self.expect(&TokenKind::RParen, "`)`")?;
                Ok(TypeExpr::Tuple(elems, open.merge(close)))
            }
            TokenKind::LBracket => {
                let open = self.advance();
                let elem = self.parse_type()?;
                let close = self.expect(&TokenKind::RBracket, "`]`")?;
                Ok(TypeExpr::Array(Box::new(elem), open.merge(close)))
            }
            _ => Err(self.error("type")),
        })
    }

    /// Remainder of `< type {, type} >` after the opening `<`.
    pub(crate) fn parse_type_args(&mut self) -> Result<Vec<TypeExpr>, ParseError> {
        let (args, _) = self.comma_list(&TokenKind::Gt, Self::parse_type)?;
        self.expect(&TokenKind::Gt, "`>`")?;
        Ok(args)
    }
}
