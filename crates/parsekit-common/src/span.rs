/// Source position as tracked by the lexer (0-based line/column, 0-based
/// byte offset).
///
/// Line and column both start at 0 and the column resets to 0 on every
/// newline, matching the lexer's counters. The byte offset exists so that
/// diagnostic renderers can point back into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column number.
    pub column: u32,
    /// 0-based byte offset from start of the source.
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
