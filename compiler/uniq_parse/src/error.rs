//! Parse errors.
//!
//! Parsing stops at the first error; there is no recovery.

use uniq_ir::{Span, Spanned};

use crate::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized input `{text}`")]
    InvalidToken { text: String, span: Span },

    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { text: String, span: Span },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },
}

impl ParseError {
    /// Short label for the offending span.
    pub fn label(&self) -> String {
        match self {
            ParseError::InvalidToken { .. } => "not valid here".to_string(),
            ParseError::IntegerOverflow { .. } => "too large".to_string(),
            ParseError::UnexpectedToken { expected, .. } => format!("expected {expected}"),
        }
    }
}

impl Spanned for ParseError {
    fn span(&self) -> Span {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::IntegerOverflow { span, .. }
            | ParseError::UnexpectedToken { span, .. } => *span,
        }
    }
}
