
use std::fmt::{self, Display, Formatter};

/// The precedence of an operator. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

/// The five operators the calculator understands. Precedence and arity
/// are fixed facts about each operator, exposed as methods rather than
/// stored per-instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Sub,
  Mul,
  Div,
  /// Unary negation, produced by reclassifying a `Sub` that appears in
  /// prefix position. Never produced directly by the tokenizer.
  Neg,
}

impl Precedence {
  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }
}

impl Operator {

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Sub => Precedence::new(1),
      Operator::Mul | Operator::Div => Precedence::new(2),
      Operator::Neg => Precedence::new(3),
    }
  }

  /// True for `Neg`, which takes a single operand; the other four are
  /// binary.
  pub fn is_unary(self) -> bool {
    matches!(self, Operator::Neg)
  }

  pub fn display_name(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Sub => "-",
      Operator::Mul => "*",
      Operator::Div => "/",
      Operator::Neg => "neg",
    }
  }

}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_name())
  }
}
