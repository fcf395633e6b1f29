
use super::operator::Operator;

use std::fmt::{self, Display, Formatter};

/// A single lexical element of an expression. Tokens are immutable
/// once produced and are consumed strictly in order by the later
/// pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
  Number(f64),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{n}"),
      Token::Operator(op) => write!(f, "{op}"),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}
