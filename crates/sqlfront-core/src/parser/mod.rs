//! SQL Parser
//!
//! A hand-written recursive descent parser. Each statement kind has its own
//! module of grammar rules; all of them work on one token of lookahead and
//! use the lexer's push-back window when they need a second.

mod ddl;
mod dml;
mod error;
mod parser;
mod search;
mod select;

pub use error::ParseError;
pub use parser::{Parser, ParserConfig};
