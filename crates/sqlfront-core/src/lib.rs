//! # sqlfront-core
//!
//! A SQL front-end: a finite-state lexer with a token push-back window and
//! a recursive-descent parser for SELECT, INSERT, UPDATE, DELETE, CREATE
//! and DROP.
//!
//! The parser is driven by a [`Dialect`]: its reserved words decide what the
//! lexer reports as keywords, and its type, function, operator, command and
//! synonym tables decide what the grammar accepts.
//!
//! ```rust
//! use sqlfront_core::{Dialect, Parser};
//!
//! let parser = Parser::new(Dialect::ansi());
//! let stmt = parser.parse("SELECT a, b FROM t WHERE a = 1").unwrap();
//! assert_eq!(stmt.command(), "select");
//!
//! let err = parser.parse("SELECT FROM t").unwrap_err();
//! assert_eq!(err.line, 1);
//! assert_eq!(err.column, 7);
//! ```
//!
//! Parse trees serialize with `serde`; every statement carries a `command`
//! field and clause arguments render as `{ "value": ..., "type": ... }`.

pub mod ast;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::Statement;
pub use dialect::{Dialect, DialectError};
pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenKind, DEFAULT_LOOKAHEAD};
pub use parser::{ParseError, Parser, ParserConfig};

/// Parses `sql` with the built-in dialect called `dialect`.
///
/// # Errors
///
/// Returns [`Error::Dialect`] for an unknown dialect name and
/// [`Error::Parse`] if the statement is invalid.
pub fn parse(dialect: &str, sql: &str) -> Result<Statement> {
    let parser = Parser::for_dialect(dialect)?;
    Ok(parser.parse(sql)?)
}
