//! SQL tokenizer implementation.
//!
//! Scanning is a finite state machine fed one character at a time. Every
//! call to [`Lexer::next_token`] that is not satisfied by the push-back
//! window runs the machine from [`State::Start`] until it emits a token.
//! Any sequence the machine cannot classify degrades to a one-character
//! [`TokenKind::Symbol`], so scanning always makes progress and the
//! parser decides whether the input is valid.

use tracing::trace;

use super::{Span, Token, TokenKind, TokenWindow};
use crate::dialect::Dialect;
use crate::parser::ParseError;

/// Push-back depth used by [`Lexer::new`].
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Token boundary: skipping whitespace.
    Start,
    /// Saw `\` at a token boundary.
    EscapedChar,
    /// Inside a string opened by the given quote.
    QuotedString(char),
    /// Identifier or keyword.
    Word,
    /// Integer digits, possibly after a leading `-`.
    Integer,
    /// Digits after the decimal point.
    Fraction,
    /// Saw `e`/`E`; expecting a sign or digit.
    Exponent,
    /// Saw an exponent sign; expecting a digit.
    ExponentSign,
    /// Exponent digits.
    ExponentDigits,
    /// Run of `<`, `>`, `=`, `!`.
    Comparison,
    /// System variable starting with `_`.
    SysVar,
    /// `#` or `--` comment up to end of line.
    LineComment,
    /// Saw `..`-prefix; `...` or nothing.
    Ellipsis,
    /// Lexical error: emit the first character of the token on its own.
    Fallback,
}

/// Saved cursor, used to rewind to the start of the current token.
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    line_start: usize,
}

/// A lexer that tokenizes one SQL statement.
pub struct Lexer<'a> {
    /// The input statement.
    input: &'a str,
    /// Reserved words come from here.
    dialect: &'a Dialect,
    /// The current byte position.
    pos: usize,
    /// Current 1-based line number.
    line: usize,
    /// Byte offset where the current line begins.
    line_start: usize,
    /// Start of the token being scanned.
    start: Mark,
    /// Recently returned tokens, for push-back.
    window: TokenWindow,
    /// The token most recently handed to the caller.
    last: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default push-back depth.
    #[must_use]
    pub fn new(input: &'a str, dialect: &'a Dialect) -> Self {
        Self::with_lookahead(input, dialect, DEFAULT_LOOKAHEAD)
    }

    /// Creates a lexer that can push back up to `lookahead` tokens.
    #[must_use]
    pub fn with_lookahead(input: &'a str, dialect: &'a Dialect, lookahead: usize) -> Self {
        Self {
            input,
            dialect,
            pos: 0,
            line: 1,
            line_start: 0,
            start: Mark {
                pos: 0,
                line: 1,
                line_start: 0,
            },
            window: TokenWindow::new(lookahead),
            last: None,
        }
    }

    /// Returns the statement being scanned.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the next token, replaying a pushed-back one if any.
    pub fn next_token(&mut self) -> Token {
        let token = match self.window.replay() {
            Some(token) => token,
            None => {
                let token = self.scan();
                self.window.record(token.clone());
                token
            }
        };
        self.last = Some(token.clone());
        token
    }

    /// Un-reads the most recently returned token.
    ///
    /// Does nothing once the window is exhausted or when the lexer was
    /// built without lookahead.
    pub fn push_back(&mut self) {
        if self.window.push_back() {
            trace!(depth = self.window.depth(), "pushed back token");
            self.last = self.window.last().cloned();
        }
    }

    /// Tokenizes the rest of the input, including the final end-of-input.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Builds a positioned error pointing at `token`.
    #[must_use]
    pub fn error_at(&self, token: &Token, message: impl Into<String>) -> ParseError {
        ParseError::at(self.input, token, message)
    }

    /// Renders `message` with the line and a caret under the last returned
    /// token.
    #[must_use]
    pub fn format_error(&self, message: &str) -> String {
        let fallback = Token {
            kind: TokenKind::EndOfInput,
            span: Span::new(self.pos, self.pos),
            skipped: String::new(),
            line: self.line,
            line_start: self.line_start,
        };
        let token = self.last.as_ref().unwrap_or(&fallback);
        self.error_at(token, message).to_string()
    }

    // --- Character helpers ---

    /// Returns the current character without advancing.
    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character before the cursor.
    fn prev_char(&self) -> Option<char> {
        self.input[..self.pos].chars().next_back()
    }

    /// Consumes one character, tracking `\n`, `\r` and `\r\n` line breaks.
    fn get(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        let prev = self.prev_char();
        self.pos += c.len_utf8();
        match c {
            '\r' => {
                self.line += 1;
                self.line_start = self.pos;
            }
            '\n' => {
                if prev != Some('\r') {
                    self.line += 1;
                }
                self.line_start = self.pos;
            }
            _ => {}
        }
        Some(c)
    }

    /// Un-consumes the previous character. Never called across a line
    /// break.
    fn step_back_one_char(&mut self) {
        if let Some(c) = self.prev_char() {
            self.pos -= c.len_utf8();
        }
    }

    /// Returns to the start of the current token.
    fn rewind_within_token(&mut self) {
        self.pos = self.start.pos;
        self.line = self.start.line;
        self.line_start = self.start.line_start;
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            line_start: self.line_start,
        }
    }

    /// Records the start of a token whose first character was just read.
    fn begin_token(&mut self, first: char) {
        self.start = Mark {
            pos: self.pos - first.len_utf8(),
            line: self.line,
            line_start: self.line_start,
        };
    }

    /// True when the current token directly follows a `.`.
    fn follows_dot(&self) -> bool {
        self.input[..self.start.pos].ends_with('.')
    }

    // --- State machine ---

    /// Picks the state for the first character of a token.
    fn classify(&mut self, first: char) -> State {
        match first {
            '\\' => State::EscapedChar,
            '\'' | '"' => State::QuotedString(first),
            '<' | '>' | '=' | '!' => State::Comparison,
            '_' => State::SysVar,
            '#' => State::LineComment,
            '-' => match self.peek_char() {
                Some('-') => {
                    self.get();
                    State::LineComment
                }
                Some(c) if c.is_ascii_digit() => State::Integer,
                _ => State::Fallback,
            },
            // `..` is never the start of a number, so `1..2` stays a range.
            '.' => match self.peek_char() {
                Some('.') => State::Ellipsis,
                Some(c) if c.is_ascii_digit() && !self.follows_dot() => State::Fraction,
                _ => State::Fallback,
            },
            c if c.is_ascii_digit() => State::Integer,
            c if c.is_alphabetic() => State::Word,
            _ => State::Fallback,
        }
    }

    /// Scans one raw token from the input.
    fn scan(&mut self) -> Token {
        let skip_from = self.pos;
        let mut text = String::new();
        let mut state = State::Start;

        loop {
            state = match state {
                State::Start => match self.get() {
                    None => {
                        self.start = self.mark();
                        return self.emit(TokenKind::EndOfInput, skip_from);
                    }
                    Some(' ' | '\t' | '\r' | '\n') => State::Start,
                    Some(c) => {
                        self.begin_token(c);
                        self.classify(c)
                    }
                },

                State::EscapedChar => match self.get() {
                    Some(c @ ('\'' | '"' | '\\')) => {
                        return self.emit(TokenKind::Symbol(c.to_string()), skip_from);
                    }
                    _ => State::Fallback,
                },

                State::QuotedString(quote) => match self.get() {
                    None => State::Fallback,
                    Some('\\') => match self.get() {
                        Some(c) => {
                            text.push(c);
                            state
                        }
                        None => State::Fallback,
                    },
                    Some(c) if c == quote => {
                        if self.peek_char() == Some(quote) {
                            self.get();
                            text.push(quote);
                            state
                        } else {
                            let value = core::mem::take(&mut text);
                            return self.emit(TokenKind::TextVal(value), skip_from);
                        }
                    }
                    Some(c) => {
                        text.push(c);
                        state
                    }
                },

                State::Word => match self.peek_char() {
                    Some(c) if c.is_alphanumeric() || c == '_' || c == '.' => {
                        self.get();
                        State::Word
                    }
                    _ => return self.emit_word(skip_from),
                },

                State::Integer => match self.peek_char() {
                    Some(c) if c.is_ascii_digit() => {
                        self.get();
                        State::Integer
                    }
                    Some('.') => {
                        self.get();
                        if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                            State::Fraction
                        } else {
                            // `1..` or `1.x`: the dot belongs to the next token.
                            self.step_back_one_char();
                            match self.finish_number(false, skip_from) {
                                Some(token) => return token,
                                None => State::Fallback,
                            }
                        }
                    }
                    Some(c) if c.is_alphabetic() => State::Fallback,
                    _ => match self.finish_number(false, skip_from) {
                        Some(token) => return token,
                        None => State::Fallback,
                    },
                },

                State::Fraction => match self.peek_char() {
                    Some(c) if c.is_ascii_digit() => {
                        self.get();
                        State::Fraction
                    }
                    Some('e' | 'E') => {
                        self.get();
                        State::Exponent
                    }
                    Some(c) if c.is_alphabetic() => State::Fallback,
                    _ => match self.finish_number(true, skip_from) {
                        Some(token) => return token,
                        None => State::Fallback,
                    },
                },

                State::Exponent => match self.get() {
                    Some('+' | '-') => State::ExponentSign,
                    Some(c) if c.is_ascii_digit() => State::ExponentDigits,
                    _ => State::Fallback,
                },

                State::ExponentSign => match self.get() {
                    Some(c) if c.is_ascii_digit() => State::ExponentDigits,
                    _ => State::Fallback,
                },

                State::ExponentDigits => match self.peek_char() {
                    Some(c) if c.is_ascii_digit() => {
                        self.get();
                        State::ExponentDigits
                    }
                    Some(c) if c.is_alphabetic() => State::Fallback,
                    _ => match self.finish_number(true, skip_from) {
                        Some(token) => return token,
                        None => State::Fallback,
                    },
                },

                State::Comparison => match self.peek_char() {
                    Some('<' | '>' | '=' | '!') => {
                        self.get();
                        State::Comparison
                    }
                    _ => return self.emit_symbol(skip_from),
                },

                State::SysVar => match self.peek_char() {
                    Some(c) if c.is_alphanumeric() || c == '_' => {
                        self.get();
                        State::SysVar
                    }
                    _ => {
                        let name = self.token_text().to_string();
                        return self.emit(TokenKind::SysVar(name), skip_from);
                    }
                },

                State::LineComment => match self.get() {
                    None | Some('\n' | '\r') => State::Start,
                    Some(_) => State::LineComment,
                },

                State::Ellipsis => {
                    self.get();
                    match self.get() {
                        Some('.') => return self.emit_symbol(skip_from),
                        _ => State::Fallback,
                    }
                }

                State::Fallback => {
                    self.rewind_within_token();
                    if self.get().is_none() {
                        return self.emit(TokenKind::EndOfInput, skip_from);
                    }
                    trace!(
                        offset = self.start.pos,
                        text = self.token_text(),
                        "lexical fallback to single character"
                    );
                    return self.emit_symbol(skip_from);
                }
            };
        }
    }

    /// Source text of the token scanned so far.
    fn token_text(&self) -> &'a str {
        &self.input[self.start.pos..self.pos]
    }

    fn emit(&self, kind: TokenKind, skip_from: usize) -> Token {
        Token {
            kind,
            span: Span::new(self.start.pos, self.pos),
            skipped: self.input[skip_from..self.start.pos].to_string(),
            line: self.start.line,
            line_start: self.start.line_start,
        }
    }

    fn emit_symbol(&self, skip_from: usize) -> Token {
        self.emit(TokenKind::Symbol(self.token_text().to_string()), skip_from)
    }

    /// Keyword if the lowercased word is reserved, identifier otherwise.
    fn emit_word(&self, skip_from: usize) -> Token {
        let text = self.token_text();
        let lower = text.to_lowercase();
        let kind = if self.dialect.is_reserved(&lower) {
            TokenKind::Keyword(lower)
        } else {
            TokenKind::Ident(text.to_string())
        };
        self.emit(kind, skip_from)
    }

    /// Converts the scanned digits, or `None` when they do not fit.
    /// Reals that overflow to infinity do not fit either.
    fn finish_number(&self, real: bool, skip_from: usize) -> Option<Token> {
        let text = self.token_text();
        let kind = if real {
            let value: f64 = text.parse().ok().filter(|r: &f64| r.is_finite())?;
            TokenKind::RealVal(value)
        } else {
            TokenKind::IntVal(text.parse().ok()?)
        };
        Some(self.emit(kind, skip_from))
    }
}
