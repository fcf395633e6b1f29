
//! Stack-based evaluation of postfix token sequences.

use crate::error::Error;
use crate::parsing::operator::Operator;
use crate::parsing::token::Token;
use crate::stack::Stack;

/// Evaluates an RPN token sequence. Numbers are pushed; each operator
/// pops its operands and pushes the result. Exactly one value must
/// remain at the end, which covers both the too-many-operands and the
/// too-few-operators shapes of malformed input.
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, Error> {
  let mut values: Stack<f64> = Stack::new();

  for token in rpn {
    match token {
      Token::Number(n) => {
        values.push(*n);
      }
      Token::Operator(Operator::Neg) => {
        let operand = values.pop().ok_or(Error::MalformedExpression)?;
        values.push(-operand);
      }
      Token::Operator(op) => {
        // Operands come off in reverse: the right one was pushed last.
        let right = values.pop().ok_or(Error::MalformedExpression)?;
        let left = values.pop().ok_or(Error::MalformedExpression)?;
        values.push(apply_binary(*op, left, right)?);
      }
      Token::LeftParen | Token::RightParen => {
        // The converter never emits parens into RPN.
        return Err(Error::MalformedExpression);
      }
    }
  }

  let result = values.pop().ok_or(Error::MalformedExpression)?;
  if !values.is_empty() {
    return Err(Error::MalformedExpression);
  }
  Ok(result)
}

fn apply_binary(op: Operator, left: f64, right: f64) -> Result<f64, Error> {
  match op {
    Operator::Add => Ok(left + right),
    Operator::Sub => Ok(left - right),
    Operator::Mul => Ok(left * right),
    Operator::Div => {
      if right == 0.0 {
        Err(Error::DivisionByZero)
      } else {
        Ok(left / right)
      }
    }
    Operator::Neg => Err(Error::MalformedExpression),
  }
}
