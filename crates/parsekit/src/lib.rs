//! A small generic lexing/parsing toolkit.
//!
//! The pieces, leaf first: [`Scanner`] is a read-only forward cursor over any
//! in-memory slice; [`lexer::Lexer`] layers line/column tracking and a token
//! buffer on top of it, with token classification supplied through the
//! [`lexer::Syntax`] trait; the [`arith`] module exercises the whole stack
//! end to end with an arithmetic-expression lexer, recursive-descent parser,
//! and tree evaluator.
//!
//! Data flow: source text → lexer → tokens → parser → expression tree →
//! evaluator → numeric result. Everything runs to completion on the caller's
//! thread; none of the types are meant to be shared across threads.

pub mod arith;
pub mod lexer;

mod scanner;

pub use lexer::{Lexer, Syntax, Token};
pub use scanner::Scanner;
