//! SQL Parser implementation.

use tracing::debug;

use super::error::ParseError;
use crate::ast::{Operand, OrderDirection, SortKey, Statement};
use crate::dialect::{Dialect, DialectError};
use crate::lexer::{Lexer, Token, TokenKind, DEFAULT_LOOKAHEAD};

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Depth of the lexer's push-back window. The grammar needs at least
    /// one token of push-back; smaller values are raised to one.
    pub lookahead: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

/// SQL Parser bound to one dialect.
///
/// A `Parser` keeps no per-statement state: every call to
/// [`Parser::parse`] runs on a fresh lexer, so one parser can be shared
/// between threads.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'d> {
    dialect: &'d Dialect,
    config: ParserConfig,
}

impl<'d> Parser<'d> {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new(dialect: &'d Dialect) -> Self {
        Self::with_config(dialect, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    #[must_use]
    pub const fn with_config(dialect: &'d Dialect, config: ParserConfig) -> Self {
        Self { dialect, config }
    }

    /// Returns the dialect this parser uses.
    #[must_use]
    pub const fn dialect(&self) -> &'d Dialect {
        self.dialect
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` pointing at the first token that does not fit
    /// the grammar. No partial tree is returned.
    pub fn parse(&self, sql: &str) -> Result<Statement, ParseError> {
        debug!(dialect = self.dialect.name(), len = sql.len(), "parsing statement");
        let result = StatementParser::new(sql, self.dialect, self.config.lookahead).parse_statement();
        match &result {
            Ok(statement) => debug!(command = statement.command(), "parsed statement"),
            Err(err) => debug!(
                line = err.line,
                column = err.column,
                message = %err.message,
                "parse failed"
            ),
        }
        result
    }

    /// Splits `sql` into tokens with this parser's dialect, ending with the
    /// end-of-input token.
    #[must_use]
    pub fn tokenize(&self, sql: &str) -> Vec<Token> {
        Lexer::with_lookahead(sql, self.dialect, self.config.lookahead).tokenize()
    }
}

impl Parser<'static> {
    /// Creates a parser for a built-in dialect.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unknown`] if no built-in dialect has that
    /// name. This is a configuration error, raised before any parsing.
    pub fn for_dialect(name: &str) -> Result<Self, DialectError> {
        Dialect::by_name(name).map(Self::new)
    }
}

/// Grammar state for one statement.
pub(super) struct StatementParser<'a> {
    pub(super) lexer: Lexer<'a>,
    pub(super) dialect: &'a Dialect,
    /// The token being looked at; already read from the lexer.
    pub(super) current: Token,
}

impl<'a> StatementParser<'a> {
    fn new(source: &'a str, dialect: &'a Dialect, lookahead: usize) -> Self {
        let mut lexer = Lexer::with_lookahead(source, dialect, lookahead.max(1));
        let current = lexer.next_token();
        Self {
            lexer,
            dialect,
            current,
        }
    }

    /// Dispatches on the statement verb and checks nothing follows the
    /// statement except an optional `;`.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.current.is_eof() {
            return Err(self.error("Nothing to do"));
        }
        let verb = self
            .current
            .as_keyword()
            .filter(|kw| self.dialect.is_command(kw))
            .map(str::to_owned);
        let statement = match verb.as_deref() {
            Some("select") => Statement::Select(self.parse_select()?),
            Some("insert") => Statement::Insert(self.parse_insert()?),
            Some("update") => Statement::Update(self.parse_update()?),
            Some("delete") => Statement::Delete(self.parse_delete()?),
            Some("create") => self.parse_create()?,
            Some("drop") => self.parse_drop()?,
            _ => return Err(self.error("Unknown action")),
        };
        if self.check_symbol(")") {
            return Err(self.error("Unexpected )"));
        }
        self.eat_symbol(";");
        if !self.current.is_eof() {
            return Err(self.error("Unexpected token after end of statement"));
        }
        Ok(statement)
    }

    // --- Helper methods ---

    /// Advances to the next token, returning the one just passed.
    pub(super) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        core::mem::replace(&mut self.current, next)
    }

    /// Builds an error pointing at the current token.
    pub(super) fn error(&self, message: impl Into<String>) -> ParseError {
        self.lexer.error_at(&self.current, message)
    }

    /// Checks if the current token is the given word, keyword or not.
    pub(super) fn check(&self, word: &str) -> bool {
        match &self.current.kind {
            TokenKind::Keyword(kw) => kw == word,
            TokenKind::Ident(name) => name.eq_ignore_ascii_case(word),
            _ => false,
        }
    }

    /// Checks if the current token is the given symbol.
    pub(super) fn check_symbol(&self, symbol: &str) -> bool {
        self.current.is_symbol(symbol)
    }

    /// Consumes the current token if it is the given word.
    pub(super) fn eat(&mut self, word: &str) -> bool {
        let found = self.check(word);
        if found {
            self.advance();
        }
        found
    }

    /// Consumes the current token if it is the given symbol.
    pub(super) fn eat_symbol(&mut self, symbol: &str) -> bool {
        let found = self.check_symbol(symbol);
        if found {
            self.advance();
        }
        found
    }

    /// Expects the current token to be the given word.
    pub(super) fn expect(&mut self, word: &str, message: &str) -> Result<(), ParseError> {
        if self.eat(word) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Expects the current token to be the given symbol.
    pub(super) fn expect_symbol(&mut self, symbol: &str, message: &str) -> Result<(), ParseError> {
        if self.eat_symbol(symbol) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Consumes and returns the current token if it is an identifier.
    pub(super) fn eat_ident(&mut self) -> Option<String> {
        let TokenKind::Ident(name) = &self.current.kind else {
            return None;
        };
        let name = name.clone();
        self.advance();
        Some(name)
    }

    /// Expects and returns an identifier. Reserved words are rejected.
    pub(super) fn expect_ident(&mut self, message: &str) -> Result<String, ParseError> {
        self.eat_ident().ok_or_else(|| self.error(message))
    }

    /// Expects and returns an integer literal.
    pub(super) fn expect_int(&mut self, message: &str) -> Result<i64, ParseError> {
        match self.current.kind {
            TokenKind::IntVal(n) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.error(message)),
        }
    }

    /// Returns true if the token after the current one is `symbol`.
    ///
    /// Reads one token ahead and pushes it back.
    pub(super) fn peek_symbol(&mut self, symbol: &str) -> bool {
        let next = self.lexer.next_token();
        self.lexer.push_back();
        next.is_symbol(symbol)
    }

    /// Parses a literal, identifier or `null`.
    pub(super) fn parse_value(&mut self, message: &str) -> Result<Operand, ParseError> {
        if self.eat("null") {
            return Ok(Operand::Null);
        }
        let operand = match &self.current.kind {
            TokenKind::Ident(name) => Operand::Ident(name.clone()),
            TokenKind::IntVal(n) => Operand::Int(*n),
            TokenKind::RealVal(r) => Operand::Real(*r),
            TokenKind::TextVal(text) => Operand::Text(text.clone()),
            TokenKind::SysVar(name) => Operand::SysVar(name.clone()),
            _ => return Err(self.error(message)),
        };
        self.advance();
        Ok(operand)
    }

    /// Parses `value [, value]*`.
    pub(super) fn parse_value_list(&mut self) -> Result<Vec<Operand>, ParseError> {
        let mut values = vec![self.parse_value("Expected a value")?];
        while self.eat_symbol(",") {
            values.push(self.parse_value("Expected a value")?);
        }
        Ok(values)
    }

    /// Parses `ident [, ident]*`.
    pub(super) fn parse_ident_list(&mut self, message: &str) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.expect_ident(message)?];
        while self.eat_symbol(",") {
            names.push(self.expect_ident(message)?);
        }
        Ok(names)
    }

    /// Parses the keys of an ORDER BY clause.
    pub(super) fn parse_sort_order(&mut self) -> Result<Vec<SortKey>, ParseError> {
        let mut keys = Vec::new();
        loop {
            let column = self.expect_ident("Expected a column name")?;
            let direction = self.parse_direction()?;
            keys.push(SortKey { column, direction });
            if !self.eat_symbol(",") {
                break;
            }
        }
        Ok(keys)
    }

    /// Resolves an optional direction word through the dialect's synonyms.
    /// Words without a synonym are left for the caller.
    fn parse_direction(&mut self) -> Result<OrderDirection, ParseError> {
        let Some(canonical) = self
            .current
            .word()
            .and_then(|word| self.dialect.synonym(&word))
        else {
            return Ok(OrderDirection::Asc);
        };
        let direction = match canonical {
            "asc" => OrderDirection::Asc,
            "desc" => OrderDirection::Desc,
            _ => return Err(self.error("Expected asc or desc")),
        };
        self.advance();
        Ok(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(sql: &str) -> StatementParser<'_> {
        StatementParser::new(sql, Dialect::ansi(), DEFAULT_LOOKAHEAD)
    }

    #[test]
    fn test_check_matches_keywords_and_identifiers() {
        let mut p = parser("SELECT Varying");
        assert!(p.check("select"));
        p.advance();
        assert!(p.check("varying"));
        assert!(!p.check("select"));
    }

    #[test]
    fn test_peek_symbol_does_not_consume() {
        let mut p = parser("count(*)");
        assert!(p.peek_symbol("("));
        assert!(p.check("count"));
        p.advance();
        assert!(p.check_symbol("("));
    }

    #[test]
    fn test_peek_with_zero_lookahead_still_works() {
        let mut p = StatementParser::new("count(*)", Dialect::ansi(), 0);
        assert!(p.peek_symbol("("));
        p.advance();
        assert!(p.check_symbol("("));
    }

    #[test]
    fn test_parse_value_kinds() {
        let mut p = parser("a 1 2.5 'x' _v null");
        assert_eq!(p.parse_value("v").unwrap(), Operand::Ident("a".into()));
        assert_eq!(p.parse_value("v").unwrap(), Operand::Int(1));
        assert_eq!(p.parse_value("v").unwrap(), Operand::Real(2.5));
        assert_eq!(p.parse_value("v").unwrap(), Operand::Text("x".into()));
        assert_eq!(p.parse_value("v").unwrap(), Operand::SysVar("_v".into()));
        assert_eq!(p.parse_value("v").unwrap(), Operand::Null);
        assert!(p.parse_value("v").is_err());
    }

    #[test]
    fn test_sort_order_synonyms() {
        let mut p = parser("a descending, b, c asc");
        let keys = p.parse_sort_order().unwrap();
        let directions: Vec<_> = keys.iter().map(|k| k.direction).collect();
        assert_eq!(
            directions,
            vec![OrderDirection::Desc, OrderDirection::Asc, OrderDirection::Asc]
        );
    }

    #[test]
    fn test_sort_order_rejects_other_synonyms() {
        let mut p = parser("a integer");
        let err = p.parse_sort_order().unwrap_err();
        assert_eq!(err.message, "Expected asc or desc");
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser<'static>>();
    }

    #[test]
    fn test_for_dialect() {
        assert_eq!(Parser::for_dialect("mysql").unwrap().dialect().name(), "mysql");
        assert!(Parser::for_dialect("nope").is_err());
    }
}
