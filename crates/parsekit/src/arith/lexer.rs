use parsekit_common::LexError;

use super::ArithToken;
use crate::lexer::{Lexer, Syntax};

/// The closed token-kind set of the arithmetic language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl Syntax for ArithKind {
    type Kind = ArithKind;

    fn scan_token<'src>(
        lexer: &mut Lexer<'src, ArithKind>,
        first: char,
    ) -> Result<(), LexError> {
        match first {
            // Non-significant input.
            ' ' | '\t' | '\r' => {}
            '\n' => lexer.new_line(),

            // Number: digit run, optional single '.', digit run. A second
            // '.' is not consumed, so "1.2.3" lexes as "1.2" then ".3".
            '0'..='9' => {
                lexer.pop_while(|c| c.is_ascii_digit());
                if lexer.peek() == Some('.') {
                    lexer.pop();
                    lexer.pop_while(|c| c.is_ascii_digit());
                }
                lexer.finalize_token(ArithKind::Number);
            }

            // Fractional-only number: '.' with at least one digit after it.
            '.' if lexer.peek().is_some_and(|c| c.is_ascii_digit()) => {
                lexer.pop_while(|c| c.is_ascii_digit());
                lexer.finalize_token(ArithKind::Number);
            }

            '(' => {
                lexer.finalize_token(ArithKind::LeftParen);
            }
            ')' => {
                lexer.finalize_token(ArithKind::RightParen);
            }

            '+' => {
                lexer.finalize_token(ArithKind::Plus);
            }
            '-' => {
                lexer.finalize_token(ArithKind::Minus);
            }
            '*' => {
                lexer.finalize_token(ArithKind::Star);
            }
            '/' => {
                lexer.finalize_token(ArithKind::Slash);
            }

            _ => return Err(lexer.error("Unknown symbol")),
        }
        Ok(())
    }
}

/// Lexer for arithmetic expressions.
pub struct ArithmeticLexer<'src> {
    inner: Lexer<'src, ArithKind>,
}

impl<'src> ArithmeticLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Lexer::new(source),
        }
    }

    /// Scan the whole source into a token sequence, or fail on the first
    /// unrecognized character.
    pub fn lex(&mut self) -> Result<Vec<ArithToken<'src>>, LexError> {
        self.inner.lex::<ArithKind>()
    }

    /// Scan a different source with the same lexer.
    pub fn lex_source(&mut self, source: &'src str) -> Result<Vec<ArithToken<'src>>, LexError> {
        self.inner.lex_source::<ArithKind>(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<ArithToken<'_>> {
        ArithmeticLexer::new(source)
            .lex()
            .unwrap_or_else(|e| panic!("unexpected lex error: {e}"))
    }

    fn lex_kinds(source: &str) -> Vec<ArithKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_source() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn single_number_round_trips_its_lexeme() {
        let tokens = lex("12.5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, ArithKind::Number);
        assert_eq!(tokens[0].content, "12.5");
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(
            lex_kinds("+ - * / ( )"),
            vec![
                ArithKind::Plus,
                ArithKind::Minus,
                ArithKind::Star,
                ArithKind::Slash,
                ArithKind::LeftParen,
                ArithKind::RightParen,
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(
            lex_kinds("1 \t+\r 2"),
            vec![ArithKind::Number, ArithKind::Plus, ArithKind::Number]
        );
    }

    #[test]
    fn newline_resets_column_and_bumps_line() {
        let tokens = lex("1 +\n2");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![ArithKind::Number, ArithKind::Plus, ArithKind::Number]
        );
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[2].line, 1);
        assert!(tokens[2].column < tokens[1].column);
        assert_eq!(tokens[2].content, "2");
    }

    #[test]
    fn unknown_symbol_is_fatal() {
        let err = ArithmeticLexer::new("1@2").lex().unwrap_err();
        assert_eq!(err.message, "Unknown symbol");
        assert_eq!(err.position.line, 0);
        assert_eq!(err.position.column, 2);
    }

    #[test]
    fn double_decimal_point_lexes_as_two_numbers() {
        let tokens = lex("1.2.3");
        let contents: Vec<_> = tokens.iter().map(|t| t.content).collect();
        assert_eq!(contents, vec!["1.2", ".3"]);
        assert!(tokens.iter().all(|t| t.kind == ArithKind::Number));
    }

    #[test]
    fn trailing_decimal_point_is_kept_in_the_lexeme() {
        let tokens = lex("1.");
        assert_eq!(tokens[0].content, "1.");
    }

    #[test]
    fn bare_dot_is_unknown() {
        assert!(ArithmeticLexer::new(". ").lex().is_err());
    }

    #[test]
    fn non_ascii_input_is_rejected_at_its_first_byte() {
        // The lexer is byte-oriented; the first byte of a multibyte
        // character matches no rule and fails cleanly.
        let err = ArithmeticLexer::new("1+é2").lex().unwrap_err();
        assert_eq!(err.message, "Unknown symbol");
        assert_eq!(err.position.line, 0);
    }

    #[test]
    fn relex_same_source_is_identical() {
        let mut lexer = ArithmeticLexer::new("2+3*4");
        let first = lexer.lex().unwrap();
        let second = lexer.lex().unwrap();
        assert_eq!(first, second);
    }
}
