//! Uniq Parse
//!
//! Lexer ([`lex`], built on logos) and recursive-descent parser for Uniq
//! source text. Produces [`uniq_ir`] trees; stops at the first error.
//!
//! ```text
//! fn main(args: [Str]) {
//!     let mut total = 0;
//!     for (i, arg) in enumerate(args) {
//!         set total = total + len(arg);
//!     }
//!     repeat {
//!         let next = io::read_line();
//!     } until is_done(next) fixup {
//!         io::log::<Str>(next);
//!     };
//!     return total;
//! }
//! ```

mod error;
mod lexer;
mod parser;
mod token;

pub use error::ParseError;
pub use lexer::lex;
pub use token::{Token, TokenKind};

use uniq_ir::{Callable, Expr, Module};

use parser::Parser;

/// Parse a whole source file.
pub fn parse_module(source: &str) -> Result<Module, ParseError> {
    let tokens = lex(source)?;
    Parser::new(&tokens).parse_module()
}

/// Parse source holding exactly one callable.
pub fn parse_callable(source: &str) -> Result<Callable, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(&tokens);
    let callable = parser.parse_callable()?;
    parser.expect_end()?;
    Ok(callable)
}

/// Parse a single expression.
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(expr)
}
