//! Parser error types.

use core::fmt;

use crate::lexer::{Span, Token};

/// A positioned parse error.
///
/// Parsing is fail-fast: the first structural error aborts the statement
/// and no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// Text of the offending token.
    pub found: String,
    /// 1-based line number of the offending token.
    pub line: usize,
    /// Character column of the token start within its line.
    pub column: usize,
    /// The full source line containing the token.
    pub line_text: String,
    /// The location of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Creates an error pointing at `token` within `source`.
    #[must_use]
    pub fn at(source: &str, token: &Token, message: impl Into<String>) -> Self {
        let rest = source.get(token.line_start..).unwrap_or("");
        let line_text = rest
            .split(['\n', '\r'])
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            message: message.into(),
            found: token.text(source),
            line: token.line,
            column: token.column(source),
            line_text,
            span: token.span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error: {} on line {}\n{}\n{:width$}^ found: \"{}\"",
            self.message,
            self.line,
            self.line_text,
            "",
            self.found,
            width = self.column
        )
    }
}

impl std::error::Error for ParseError {}
