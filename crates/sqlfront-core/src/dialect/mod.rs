//! SQL dialect vocabularies.
//!
//! A dialect is a named bundle of word tables: reserved words, type names,
//! function names, operators, command verbs and synonyms. The lexer uses
//! the reserved words to classify keywords; the parser consults the rest.
//! Tables are immutable once built, so one dialect can back any number of
//! parsers on any number of threads.

mod ansi;
mod mysql;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Static word lists a [`Dialect`] is built from. All entries are lowercase.
#[derive(Debug, Clone, Copy)]
pub struct DialectTables {
    /// Words the lexer reports as keywords instead of identifiers.
    pub reserved: &'static [&'static str],
    /// Column type names accepted in field definitions.
    pub types: &'static [&'static str],
    /// Names that may be called as functions.
    pub functions: &'static [&'static str],
    /// Operators accepted in search clauses.
    pub operators: &'static [&'static str],
    /// Statement verbs this dialect accepts.
    pub commands: &'static [&'static str],
    /// Alternate spellings mapped to their canonical word.
    pub synonyms: &'static [(&'static str, &'static str)],
}

/// Errors raised while selecting a dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// No built-in dialect has this name.
    #[error("Unknown SQL dialect '{0}' (expected one of: {known})", known = Dialect::NAMES.join(", "))]
    Unknown(String),
}

/// A SQL dialect: lookup sets keyed by lowercase word text.
#[derive(Debug, Clone)]
pub struct Dialect {
    name: &'static str,
    reserved: HashSet<&'static str>,
    types: HashSet<&'static str>,
    functions: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    commands: HashSet<&'static str>,
    synonyms: HashMap<&'static str, &'static str>,
}

static ANSI: LazyLock<Dialect> = LazyLock::new(|| Dialect::new("ansi", &ansi::TABLES));
static MYSQL: LazyLock<Dialect> = LazyLock::new(|| Dialect::new("mysql", &mysql::TABLES));

impl Dialect {
    /// Names of the built-in dialects.
    pub const NAMES: &'static [&'static str] = &["ansi", "mysql"];

    /// Builds a dialect from static word tables.
    #[must_use]
    pub fn new(name: &'static str, tables: &DialectTables) -> Self {
        Self {
            name,
            reserved: tables.reserved.iter().copied().collect(),
            types: tables.types.iter().copied().collect(),
            functions: tables.functions.iter().copied().collect(),
            operators: tables.operators.iter().copied().collect(),
            commands: tables.commands.iter().copied().collect(),
            synonyms: tables.synonyms.iter().copied().collect(),
        }
    }

    /// Looks up a built-in dialect by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Unknown`] if no dialect has that name.
    pub fn by_name(name: &str) -> Result<&'static Self, DialectError> {
        match name.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Self::ansi()),
            "mysql" => Ok(Self::mysql()),
            _ => Err(DialectError::Unknown(name.to_string())),
        }
    }

    /// The ANSI SQL-92 vocabulary.
    #[must_use]
    pub fn ansi() -> &'static Self {
        &ANSI
    }

    /// The MySQL vocabulary.
    #[must_use]
    pub fn mysql() -> &'static Self {
        &MYSQL
    }

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if `word` is a reserved word.
    #[must_use]
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    /// Returns true if `word` names a column type.
    #[must_use]
    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    /// Returns true if `word` names a callable function.
    #[must_use]
    pub fn is_function(&self, word: &str) -> bool {
        self.functions.contains(word)
    }

    /// Returns true if `word` is a search-clause operator.
    #[must_use]
    pub fn is_operator(&self, word: &str) -> bool {
        self.operators.contains(word)
    }

    /// Returns true if `word` is a statement verb of this dialect.
    #[must_use]
    pub fn is_command(&self, word: &str) -> bool {
        self.commands.contains(word)
    }

    /// Returns the canonical spelling for `word`, if it has one.
    #[must_use]
    pub fn synonym(&self, word: &str) -> Option<&'static str> {
        self.synonyms.get(word).copied()
    }
}
