//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that turns one SQL statement into tokens on demand,
//! with a bounded window for pushing tokens back.

mod span;
mod token;
mod tokenizer;
mod window;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, DEFAULT_LOOKAHEAD};
pub use window::TokenWindow;
