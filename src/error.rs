
use thiserror::Error;

/// Everything that can go wrong while evaluating an expression. The
/// enum is closed on purpose: the string boundary renders exactly
/// these four messages and nothing else.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Malformed expression")]
  MalformedExpression,
  #[error("Invalid character")]
  InvalidCharacter,
  #[error("Mismatched parentheses")]
  MismatchedParentheses,
  #[error("Division by zero")]
  DivisionByZero,
}
