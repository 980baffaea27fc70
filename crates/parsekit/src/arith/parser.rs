//! Recursive-descent parser for arithmetic expressions.
//!
//! Grammar, two precedence tiers, both left-associative:
//!
//! ```text
//! Expression := Term
//! Term       := Factor ( ('+' | '-') Factor )*
//! Factor     := Primary ( ('*' | '/') Primary )*
//! Primary    := Number
//! ```
//!
//! Known gap, kept on purpose: parenthesis tokens are lexed but no grammar
//! rule consumes them, so parenthesized sub-expressions are rejected by
//! `Primary` like any other non-number token. Trailing tokens after a
//! complete expression are likewise left unconsumed rather than reported.

use parsekit_common::ParseError;

use super::{ArithKind, ArithToken};
use crate::scanner::Scanner;

/// A node of the parsed expression tree.
///
/// Leaves hold `Number` tokens; interior nodes hold operator tokens and own
/// both children. The tree is built bottom-up during parsing and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    pub token: ArithToken<'src>,
    pub left: Option<Box<Node<'src>>>,
    pub right: Option<Box<Node<'src>>>,
}

impl<'src> Node<'src> {
    pub fn leaf(token: ArithToken<'src>) -> Self {
        Self {
            token,
            left: None,
            right: None,
        }
    }

    pub fn branch(token: ArithToken<'src>, left: Node<'src>, right: Node<'src>) -> Self {
        Self {
            token,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }
}

/// Parser over a lexed token sequence, driven through the same generic
/// [`Scanner`] the lexer uses, just with tokens as the element type.
pub struct ExprParser<'t, 'src> {
    cursor: Scanner<'t, ArithToken<'src>>,
}

impl<'t, 'src> ExprParser<'t, 'src> {
    pub fn new(tokens: &'t [ArithToken<'src>]) -> Self {
        Self {
            cursor: Scanner::new(tokens),
        }
    }

    /// Parse one expression from the front of the token sequence.
    ///
    /// The first grammar violation is fatal; there is no recovery or
    /// resynchronization.
    pub fn parse(&mut self) -> Result<Node<'src>, ParseError> {
        self.expression()
    }

    fn expression(&mut self) -> Result<Node<'src>, ParseError> {
        self.term()
    }

    /// Left-associativity is encoded directly in tree shape: each operator
    /// becomes a new root with everything parsed so far as its left child.
    fn term(&mut self) -> Result<Node<'src>, ParseError> {
        let mut root = self.factor()?;
        while let Some(op) = self.pop_matching(|k| matches!(k, ArithKind::Plus | ArithKind::Minus))
        {
            let right = self.factor()?;
            root = Node::branch(op, root, right);
        }
        Ok(root)
    }

    fn factor(&mut self) -> Result<Node<'src>, ParseError> {
        let mut root = self.primary()?;
        while let Some(op) = self.pop_matching(|k| matches!(k, ArithKind::Star | ArithKind::Slash))
        {
            let right = self.primary()?;
            root = Node::branch(op, root, right);
        }
        Ok(root)
    }

    fn primary(&mut self) -> Result<Node<'src>, ParseError> {
        match self.pop_matching(|k| k == ArithKind::Number) {
            Some(token) => Ok(Node::leaf(token)),
            None => Err(ParseError::new(
                "Expected expression",
                self.cursor.peek().map(|t| t.position()),
            )),
        }
    }

    /// Consume the next token if its kind satisfies `predicate`.
    fn pop_matching(
        &mut self,
        predicate: impl Fn(ArithKind) -> bool,
    ) -> Option<ArithToken<'src>> {
        match self.cursor.peek() {
            Some(token) if predicate(token.kind) => self.cursor.pop().copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::ArithmeticLexer;

    fn parse(source: &str) -> Result<Node<'_>, ParseError> {
        let tokens = ArithmeticLexer::new(source)
            .lex()
            .unwrap_or_else(|e| panic!("unexpected lex error: {e}"));
        ExprParser::new(&tokens).parse()
    }

    fn shape(node: &Node<'_>) -> String {
        match (&node.left, &node.right) {
            (Some(l), Some(r)) => {
                format!("({} {} {})", shape(l), node.token.content, shape(r))
            }
            _ => node.token.content.to_string(),
        }
    }

    #[test]
    fn single_number_is_a_leaf() {
        let tree = parse("42").unwrap();
        assert_eq!(tree.token.kind, ArithKind::Number);
        assert!(tree.left.is_none() && tree.right.is_none());
    }

    #[test]
    fn precedence_puts_multiplication_below_addition() {
        let tree = parse("2+3*4").unwrap();
        assert_eq!(shape(&tree), "(2 + (3 * 4))");
    }

    #[test]
    fn subtraction_builds_a_left_leaning_tree() {
        let tree = parse("8-3-2").unwrap();
        assert_eq!(shape(&tree), "((8 - 3) - 2)");
    }

    #[test]
    fn mixed_tiers() {
        let tree = parse("1*2+3/4-5").unwrap();
        assert_eq!(shape(&tree), "(((1 * 2) + (3 / 4)) - 5)");
    }

    #[test]
    fn empty_input_is_an_error_with_no_position() {
        let err = parse("").unwrap_err();
        assert_eq!(err.message, "Expected expression");
        assert!(err.position.is_none());
    }

    #[test]
    fn operator_without_operand_is_an_error() {
        assert!(parse("1+").is_err());
        assert!(parse("*2").is_err());
    }

    #[test]
    fn parentheses_are_not_part_of_the_grammar() {
        // Lexes fine, but Primary rejects the '(' token.
        let err = parse("(1+2)").unwrap_err();
        assert_eq!(err.message, "Expected expression");
        assert!(err.position.is_some());
    }

    #[test]
    fn trailing_tokens_are_left_unconsumed() {
        let tree = parse("1 2").unwrap();
        assert_eq!(tree.token.content, "1");
    }
}
