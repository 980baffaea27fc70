//! Postorder tree evaluator with an explicit operand stack.
//!
//! Every call owns its own stack, so independent or reentrant evaluations
//! can never contaminate each other.

use parsekit_common::EvalError;

use super::{ArithKind, Node};

/// Evaluate a parsed expression tree to an `i64`.
///
/// The walk is postorder: both children are fully evaluated before the
/// parent operator is applied. A leaf pushes its numeric value; an operator
/// node pops the right operand first, then the left (the order matters for
/// `-` and `/`), and pushes the single result. Division truncates toward
/// zero; dividing by zero and `i64` overflow are typed failures rather than
/// panics.
pub fn evaluate(root: &Node<'_>) -> Result<i64, EvalError> {
    let mut stack = Vec::new();
    eval_node(root, &mut stack)?;
    // After the root, the stack holds exactly the final result.
    stack
        .pop()
        .ok_or_else(|| EvalError::MalformedTree(root.token.position()))
}

fn eval_node(node: &Node<'_>, stack: &mut Vec<i64>) -> Result<(), EvalError> {
    if let Some(left) = &node.left {
        eval_node(left, stack)?;
    }
    if let Some(right) = &node.right {
        eval_node(right, stack)?;
    }

    let token = &node.token;
    match token.kind {
        ArithKind::Number => {
            let value: i64 = token.content.parse().map_err(|_| EvalError::InvalidNumber {
                text: token.content.to_string(),
                position: token.position(),
            })?;
            stack.push(value);
        }

        ArithKind::Plus | ArithKind::Minus | ArithKind::Star | ArithKind::Slash => {
            let rhs = stack
                .pop()
                .ok_or(EvalError::MalformedTree(token.position()))?;
            let lhs = stack
                .pop()
                .ok_or(EvalError::MalformedTree(token.position()))?;
            let value = match token.kind {
                ArithKind::Plus => lhs.checked_add(rhs),
                ArithKind::Minus => lhs.checked_sub(rhs),
                ArithKind::Star => lhs.checked_mul(rhs),
                ArithKind::Slash => {
                    if rhs == 0 {
                        return Err(EvalError::DivisionByZero(token.position()));
                    }
                    // The divisor is a non-negative Number leaf, so the
                    // i64::MIN / -1 overflow case cannot arise.
                    Some(lhs / rhs)
                }
                _ => unreachable!(),
            };
            let value = value.ok_or(EvalError::Overflow(token.position()))?;
            stack.push(value);
        }

        // The parser never places these in a tree.
        ArithKind::LeftParen | ArithKind::RightParen => {
            return Err(EvalError::MalformedTree(token.position()));
        }
    }
    Ok(())
}
