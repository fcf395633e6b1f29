
use super::operator::Operator;
use super::token::Token;
use crate::error::Error;

use once_cell::sync::Lazy;
use regex::Regex;

/// Scanner state over a whitespace-stripped expression string.
#[derive(Debug, Clone)]
struct TokenizerState<'a> {
  input: &'a str,
}

impl<'a> TokenizerState<'a> {

  fn new(input: &'a str) -> Self {
    Self { input }
  }

  fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  /// Advances past the next `amount` bytes and returns them. `amount`
  /// must lie on a character boundary.
  fn advance(&mut self, amount: usize) -> &'a str {
    let (prefix, suffix) = self.input.split_at(amount);
    self.input = suffix;
    prefix
  }

  fn read_literal(&mut self, literal: &str) -> bool {
    if self.input.starts_with(literal) {
      self.advance(literal.len());
      true
    } else {
      false
    }
  }

  /// If the current position matches the given regex, returns the
  /// matched string and advances past it. The regex MUST be anchored
  /// at the start of the input.
  fn read_regex(&mut self, regex: &Regex) -> Option<&'a str> {
    let m = regex.find(self.input)?;
    Some(self.advance(m.end()))
  }

}

/// Scans an expression string into tokens. Whitespace is stripped up
/// front, so it can appear anywhere, including inside what then
/// becomes a single number (`1 2` scans as `12`).
///
/// Empty input is `MalformedExpression`; a character that starts no
/// token is `InvalidCharacter`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
  let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
  if stripped.is_empty() {
    return Err(Error::MalformedExpression);
  }

  let mut state = TokenizerState::new(&stripped);
  let mut tokens = Vec::new();
  while !state.is_eof() {
    tokens.push(read_one_token(&mut state)?);
  }
  Ok(tokens)
}

fn read_one_token(state: &mut TokenizerState<'_>) -> Result<Token, Error> {
  if let Some(token) = read_char_token(state) {
    Ok(token)
  } else if let Some(token) = read_number_literal(state) {
    token
  } else {
    Err(Error::InvalidCharacter)
  }
}

fn read_char_token(state: &mut TokenizerState<'_>) -> Option<Token> {
  // A '-' always scans as binary subtraction here; the unary pass
  // reclassifies it afterwards.
  if state.read_literal("(") {
    Some(Token::LeftParen)
  } else if state.read_literal(")") {
    Some(Token::RightParen)
  } else if state.read_literal("+") {
    Some(Token::Operator(Operator::Add))
  } else if state.read_literal("-") {
    Some(Token::Operator(Operator::Sub))
  } else if state.read_literal("*") {
    Some(Token::Operator(Operator::Mul))
  } else if state.read_literal("/") {
    Some(Token::Operator(Operator::Div))
  } else {
    None
  }
}

fn read_number_literal(state: &mut TokenizerState<'_>) -> Option<Result<Token, Error>> {
  // At most one '.' is consumed: a second embedded dot ends the match,
  // so "1.2.3" scans as "1.2" followed by ".3".
  static RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap()
  });
  let m = state.read_regex(&RE)?;
  match m.parse::<f64>() {
    Ok(number) => Some(Ok(Token::Number(number))),
    Err(_) => Some(Err(Error::MalformedExpression)),
  }
}
