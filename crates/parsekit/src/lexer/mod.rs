//! Generic lexer: a [`Scanner`] over source bytes plus line/column tracking,
//! a lexeme-start marker, and a token buffer.
//!
//! The lexer core knows nothing about any particular token set. Callers
//! supply a kind enumeration `K` and a [`Syntax`] implementation that
//! classifies one lexeme at a time using the primitives here; the provided
//! [`Lexer::lex`] driver owns the reset/loop/abort-on-error shape.

mod token;

pub use token::Token;

use std::fmt;

use parsekit_common::{LexError, Position};

use crate::scanner::Scanner;

/// Token classification rules for a particular language.
///
/// The single required method scans exactly one lexeme. By the time it is
/// called, `begin_scan` has marked the lexeme start and the first character
/// has already been popped (and counted); the implementation consumes any
/// further characters with [`Lexer::pop`]/[`Lexer::pop_while`] and either
/// finalizes a token, performs bookkeeping (whitespace, [`Lexer::new_line`]),
/// or rejects the character with [`Lexer::error`].
///
/// The lexer is byte-oriented: `first` and every peeked/popped character is
/// a single source byte cast to `char`, not a decoded code point. Rules may
/// only accept ASCII; bytes of a multibyte UTF-8 sequence arrive one at a
/// time as values `>= '\u{80}'` and must be rejected, since finalizing a
/// lexeme in the middle of such a sequence would split the source slice on a
/// non-character boundary.
pub trait Syntax {
    type Kind: Copy + Eq + fmt::Debug;

    fn scan_token<'src>(
        lexer: &mut Lexer<'src, Self::Kind>,
        first: char,
    ) -> Result<(), LexError>;
}

/// Cursor over source text with lexing state: line/column counters, the
/// offset where the current lexeme began, and the buffer of finalized
/// tokens.
///
/// Line and column are 0-based; the column resets to 0 on `new_line` and
/// advances by one for every successfully popped character. Invariant:
/// `offset >= scan_start`, and neither exceeds the source length.
///
/// The cursor runs over the raw bytes of the source, so only ASCII input is
/// classifiable; see the [`Syntax`] contract for how non-ASCII bytes must be
/// handled.
pub struct Lexer<'src, K> {
    source: &'src str,
    cursor: Scanner<'src, u8>,
    scan_start: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token<'src, K>>,
}

impl<'src, K: Copy + Eq + fmt::Debug> Lexer<'src, K> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: Scanner::new(source.as_bytes()),
            scan_start: 0,
            line: 0,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Swap in a new source buffer. All derived state is cleared; the next
    /// `lex` call scans the new text from the top.
    pub fn set_source(&mut self, source: &'src str) {
        self.source = source;
        self.cursor = Scanner::new(source.as_bytes());
        self.reset();
    }

    /// Rewind to the start of the source and clear all derived state,
    /// including the token buffer. Re-lexing after a reset is deterministic.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.scan_start = 0;
        self.line = 0;
        self.column = 0;
        self.tokens.clear();
    }

    /// Mark the current offset as the start of the next lexeme.
    pub fn begin_scan(&mut self) {
        self.scan_start = self.cursor.offset();
    }

    /// Record a line break: column back to 0, line up by one.
    pub fn new_line(&mut self) {
        self.column = 0;
        self.line += 1;
    }

    /// Peek at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek().map(|&b| b as char)
    }

    /// Consume and return the next character. The column counter advances
    /// exactly when a character was actually consumed.
    pub fn pop(&mut self) -> Option<char> {
        let popped = self.cursor.pop().map(|&b| b as char);
        popped.inspect(|_| self.column += 1)
    }

    /// Consume characters while `predicate` holds.
    pub fn pop_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.pop();
        }
    }

    /// True if there is no more input.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Line/column counters and byte offset at the current read position.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.cursor.offset())
    }

    /// Finalize the lexeme spanning `[scan_start, offset)` as a token of the
    /// given kind, tagged with the current line/column, and append it to the
    /// token buffer.
    pub fn finalize_token(&mut self, kind: K) -> Token<'src, K> {
        let content = &self.source[self.scan_start..self.cursor.offset()];
        let token = Token::new(kind, content, self.line, self.column, self.scan_start);
        self.tokens.push(token);
        token
    }

    /// A lexing failure at the current position, for rules that reject the
    /// input. Returning it from `scan_token` aborts the whole `lex` call.
    pub fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(message, self.position())
    }

    /// Run the full scan: reset, then repeatedly mark a lexeme start and let
    /// the syntax classify from the next character until the input is
    /// exhausted.
    ///
    /// On success the completed token buffer is handed to the caller. The
    /// first classification failure aborts the scan and the partial buffer
    /// is discarded.
    pub fn lex<S: Syntax<Kind = K>>(&mut self) -> Result<Vec<Token<'src, K>>, LexError> {
        self.reset();
        loop {
            self.begin_scan();
            let Some(first) = self.pop() else {
                break;
            };
            S::scan_token(self, first)?;
        }
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Scan a different source with the same lexer (the `lex(new_source)`
    /// overload).
    pub fn lex_source<S: Syntax<Kind = K>>(
        &mut self,
        source: &'src str,
    ) -> Result<Vec<Token<'src, K>>, LexError> {
        self.set_source(source);
        self.lex::<S>()
    }
}
