use thiserror::Error;

use crate::span::Position;

/// Lexing failure: an input character no classification rule accepts.
///
/// Fatal to the `lex()` call that raised it; the token buffer accumulated so
/// far is discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at {position}")]
pub struct LexError {
    pub message: String,
    /// Line/column counters at the point of failure.
    pub position: Position,
}

impl LexError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Parsing failure: a token of the wrong kind where the grammar required an
/// expression.
///
/// `position` is `None` only when the failure happened at end of input, with
/// no offending token to point at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at {}", position_or_end(.position))]
pub struct ParseError {
    pub message: String,
    pub position: Option<Position>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

fn position_or_end(position: &Option<Position>) -> String {
    match position {
        Some(pos) => pos.to_string(),
        None => "end of input".to_string(),
    }
}

/// Evaluation failure over a parsed expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero at {0}")]
    DivisionByZero(Position),

    #[error("arithmetic overflow at {0}")]
    Overflow(Position),

    #[error("invalid numeric literal '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },

    /// An operator node with a missing operand. The arithmetic parser never
    /// builds such a tree, but `Node` is a public type.
    #[error("malformed expression tree: operator at {0} is missing an operand")]
    MalformedTree(Position),
}
