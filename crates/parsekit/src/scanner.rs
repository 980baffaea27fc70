/// Read-only forward cursor over a borrowed slice.
///
/// The element sequence is fixed for the scanner's lifetime; the only
/// mutable state is the offset of the next unread element. Running off the
/// end is part of the normal contract (`peek`/`pop` return `None`), never an
/// error. The lexer drives one of these over source bytes and the expression
/// parser drives another over the resulting token slice.
#[derive(Debug, Clone)]
pub struct Scanner<'a, T> {
    items: &'a [T],
    /// Index of the *next* element to be consumed.
    offset: usize,
}

impl<'a, T> Scanner<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, offset: 0 }
    }

    /// The next unread position (0-based, monotonically non-decreasing).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Peek at the next element without consuming it.
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.offset)
    }

    /// Consume and return the next element, or `None` (with no advance) at
    /// the end of input.
    pub fn pop(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.offset)?;
        self.offset += 1;
        Some(item)
    }

    /// True if every element has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.items.len()
    }

    /// Rewind to the start of the sequence. Types layered on the scanner
    /// extend this to clear their own derived state.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let items = [1, 2, 3];
        let scanner = Scanner::new(&items);
        assert_eq!(scanner.peek(), Some(&1));
        assert_eq!(scanner.peek(), Some(&1));
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn pop_advances_by_one() {
        let items = [1, 2, 3];
        let mut scanner = Scanner::new(&items);
        assert_eq!(scanner.pop(), Some(&1));
        assert_eq!(scanner.pop(), Some(&2));
        assert_eq!(scanner.offset(), 2);
        assert_eq!(scanner.peek(), Some(&3));
    }

    #[test]
    fn pop_at_end_returns_none_without_advancing() {
        let items = [7];
        let mut scanner = Scanner::new(&items);
        assert_eq!(scanner.pop(), Some(&7));
        assert!(scanner.is_at_end());
        assert_eq!(scanner.pop(), None);
        assert_eq!(scanner.offset(), 1);
    }

    #[test]
    fn empty_sequence_is_immediately_at_end() {
        let items: [u8; 0] = [];
        let scanner = Scanner::new(&items);
        assert!(scanner.is_at_end());
        assert_eq!(scanner.peek(), None);
    }

    #[test]
    fn reset_rewinds_to_start() {
        let items = [1, 2];
        let mut scanner = Scanner::new(&items);
        scanner.pop();
        scanner.pop();
        assert!(scanner.is_at_end());
        scanner.reset();
        assert_eq!(scanner.offset(), 0);
        assert_eq!(scanner.pop(), Some(&1));
    }
}
