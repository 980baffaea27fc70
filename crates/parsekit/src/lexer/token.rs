use std::fmt;

use parsekit_common::Position;

/// A single token produced by the lexer.
///
/// `content` borrows the exact lexeme out of the original source buffer (no
/// copy), so tokens cannot outlive the source they were scanned from.
/// `line`/`column` are the lexer's 0-based counters at the moment the token
/// was finalized. Tokens are created only by
/// [`Lexer::finalize_token`](super::Lexer::finalize_token) and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src, K> {
    pub kind: K,
    pub content: &'src str,
    pub line: u32,
    pub column: u32,
    /// Byte offset of the start of the lexeme, for diagnostic rendering.
    pub offset: usize,
}

impl<'src, K> Token<'src, K> {
    pub fn new(kind: K, content: &'src str, line: u32, column: u32, offset: usize) -> Self {
        Self {
            kind,
            content,
            line,
            column,
            offset,
        }
    }

    /// Position of the start of this token's lexeme.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }
}

impl<K: fmt::Debug> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.content)
    }
}
