//! Bounded push-back window over recently produced tokens.

use std::collections::VecDeque;

use super::Token;

/// Ring buffer of the last `depth` tokens with a read cursor.
///
/// The cursor normally sits at the end of the buffer. `push_back` moves it
/// back one slot so the next read replays a buffered token instead of
/// scanning new input.
#[derive(Debug, Clone)]
pub struct TokenWindow {
    buf: VecDeque<Token>,
    depth: usize,
    cursor: usize,
}

impl TokenWindow {
    /// Creates an empty window holding at most `depth` tokens.
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(depth),
            depth,
            cursor: 0,
        }
    }

    /// Returns the maximum number of tokens kept.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the next pushed-back token, advancing the cursor.
    pub fn replay(&mut self) -> Option<Token> {
        let token = self.buf.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Appends a freshly scanned token, evicting the oldest when full.
    pub fn record(&mut self, token: Token) {
        if self.depth == 0 {
            return;
        }
        if self.buf.len() == self.depth {
            self.buf.pop_front();
        }
        self.buf.push_back(token);
        self.cursor = self.buf.len();
    }

    /// Moves the cursor back one token. Returns false when there is
    /// nothing left to rewind.
    pub fn push_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// The token most recently handed out, if still buffered.
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.cursor.checked_sub(1).and_then(|i| self.buf.get(i))
    }

    /// Returns true if a pushed-back token is waiting to be replayed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.cursor < self.buf.len()
    }
}
