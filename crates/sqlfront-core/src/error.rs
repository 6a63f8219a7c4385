//! Crate-level error type.

use crate::dialect::DialectError;
use crate::parser::ParseError;

/// Errors returned by [`parse`](crate::parse).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The statement does not fit the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The dialect name is not known.
    #[error(transparent)]
    Dialect(#[from] DialectError),
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
