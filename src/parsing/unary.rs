
//! Reclassifies the `-` tokens that are really negations.

use super::operator::Operator;
use super::token::Token;

/// Rewrites each `Sub` token that appears in prefix position into
/// `Neg`. A minus is unary if it is the first token or the previous
/// token is an open paren or any operator (including another minus).
/// A single left-to-right pass with one token of look-behind; all
/// other tokens pass through unchanged.
pub fn mark_unary_minus(tokens: &[Token]) -> Vec<Token> {
  let mut result = Vec::with_capacity(tokens.len());
  for (i, token) in tokens.iter().enumerate() {
    if matches!(token, Token::Operator(Operator::Sub)) {
      let is_unary = i == 0
        || matches!(tokens[i - 1], Token::LeftParen | Token::Operator(_));
      if is_unary {
        result.push(Token::Operator(Operator::Neg));
        continue;
      }
    }
    result.push(*token);
  }
  result
}
