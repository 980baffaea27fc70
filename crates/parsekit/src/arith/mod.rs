//! Worked example: an arithmetic-expression language built on the generic
//! toolkit.
//!
//! Pipeline: [`ArithmeticLexer`] turns source text into [`Token`]s, the
//! recursive-descent [`ExprParser`] builds a binary [`Node`] tree with the
//! usual two precedence tiers, and [`evaluate`] folds the tree into an `i64`.

mod eval;
mod lexer;
mod parser;

pub use eval::evaluate;
pub use lexer::{ArithKind, ArithmeticLexer};
pub use parser::{ExprParser, Node};

use crate::lexer::Token;

/// Token type of the arithmetic language.
pub type ArithToken<'src> = Token<'src, ArithKind>;
