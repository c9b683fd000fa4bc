//! Callables and parameter lists.

use uniq_ir::{Callable, LocalDecl, Module, ParamDecl, Spanned};
use uniq_stack::ensure_sufficient_stack;

use super::Parser;
use crate::error::ParseError;
use crate::token::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_module(&mut self) -> Result<Module, ParseError> {
        let mut callables = Vec::new();
        while !self.at_end() {
            callables.push(self.parse_callable()?);
        }
        Ok(Module { callables })
    }

    /// `fn name(params) { body }`
    pub(crate) fn parse_callable(&mut self) -> Result<Callable, ParseError> {
        let start = self.expect(&TokenKind::Fn, "`fn`")?;
        let (name, _) = self.expect_ident()?;
        let open = self.expect(&TokenKind::LParen, "`(`")?;
        let (mut params, _) = self.comma_list(&TokenKind::RParen, Self::parse_param)?;
        let close = self.expect(&TokenKind::RParen, "`)`")?;

        // A single parameter stands alone; any other count is a tuple.
        let params = if params.len() == 1 {
            params.remove(0)
        } else {
            ParamDecl::Tuple(params, open.merge(close))
        };

        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Ok(Callable {
            name,
            params,
            body,
            span,
        })
    }

    /// `name [: type]` | `_` | `( params )`
    fn parse_param(&mut self) -> Result<ParamDecl, ParseError> {
        match self.current_kind() {
            TokenKind::Underscore => Ok(ParamDecl::Unnamed(self.advance())),
            TokenKind::LParen => ensure_sufficient_stack(|| {
                let open = self.advance();
                let (mut items, _) = self.comma_list(&TokenKind::RParen, Self::parse_param)?;
                let close = self.expect(&TokenKind::RParen, "`)`")?;
                if items.len() == 1 {
                    Ok(items.remove(0))
                } else {
                    Ok(ParamDecl::Tuple(items, open.merge(close)))
                }
            }),
            TokenKind::Ident(_) => {
                let (name, span) = self.expect_ident()?;
                let ty = self.parse_type_annotation()?;
                let span = ty.as_ref().map_or(span, |ty| span.merge(ty.span()));
                Ok(ParamDecl::Named(LocalDecl::new(name, ty, span)))
            }
            _ => Err(self.error("parameter")),
        }
    }
}
