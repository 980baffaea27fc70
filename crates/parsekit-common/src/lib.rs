pub mod errors;
pub mod span;

pub use errors::{EvalError, LexError, ParseError};
pub use span::Position;
