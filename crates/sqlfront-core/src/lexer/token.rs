//! Token types for the SQL lexer.

use core::fmt;

use serde::Serialize;

use super::Span;

/// The kind of token, with its decoded value.
///
/// Keywords are whatever the active dialect reserves, so they are carried
/// as lowercase text rather than a fixed enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    /// Reserved word, lowercased (e.g. `select`).
    Keyword(String),
    /// Identifier with its original case; may contain `.` (`t.col`).
    Ident(String),
    /// Integer literal. A leading `-` is part of the literal.
    IntVal(i64),
    /// Real literal, optionally with an exponent.
    RealVal(f64),
    /// Quoted string with escapes resolved.
    TextVal(String),
    /// System variable starting with `_`.
    SysVar(String),
    /// Operator or punctuation text (`(`, `,`, `<=`, `...`).
    Symbol(String),
    /// End of input. Returned repeatedly once reached.
    EndOfInput,
}

impl TokenKind {
    /// Short name of the kind as used in parse trees (`int_val`, `ident`, ...).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Ident(_) => "ident",
            Self::IntVal(_) => "int_val",
            Self::RealVal(_) => "real_val",
            Self::TextVal(_) => "text_val",
            Self::SysVar(_) => "sys_var",
            Self::Symbol(_) => "symbol",
            Self::EndOfInput => "end_of_input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(s) | Self::Ident(s) | Self::TextVal(s) | Self::SysVar(s) | Self::Symbol(s) => {
                f.write_str(s)
            }
            Self::IntVal(n) => write!(f, "{n}"),
            Self::RealVal(r) => write!(f, "{r}"),
            Self::EndOfInput => Ok(()),
        }
    }
}

/// A token with its location in the source statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Byte range of the token text.
    pub span: Span,
    /// Whitespace and comments consumed right before this token.
    pub skipped: String,
    /// 1-based line number of the token start.
    pub line: usize,
    /// Byte offset where that line begins.
    pub line_start: usize,
}

impl Token {
    /// Creates a token on the first line with nothing skipped before it.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            skipped: String::new(),
            line: 1,
            line_start: 0,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    /// Returns the keyword text if this token is a reserved word.
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// Returns true if this token is the given symbol.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(&self.kind, TokenKind::Symbol(s) if s == symbol)
    }

    /// Lowercased word text for keywords and identifiers.
    ///
    /// Dialect lookups (types, functions, synonyms) go through this so a
    /// word matches whether or not the dialect reserves it.
    #[must_use]
    pub fn word(&self) -> Option<String> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(kw.clone()),
            TokenKind::Ident(name) => Some(name.to_lowercase()),
            _ => None,
        }
    }

    /// Text shown in diagnostics: the decoded literal for strings, the raw
    /// source text for everything else.
    #[must_use]
    pub fn text(&self, source: &str) -> String {
        match &self.kind {
            TokenKind::TextVal(value) => value.clone(),
            TokenKind::EndOfInput => String::new(),
            _ => self.span.slice(source).to_string(),
        }
    }

    /// Character column of the token start within its line.
    #[must_use]
    pub fn column(&self, source: &str) -> usize {
        source
            .get(self.line_start..self.span.start)
            .map_or(0, |prefix| prefix.chars().count())
    }
}
