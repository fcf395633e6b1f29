
//! The pipeline boundary: runs every stage in order and renders the
//! outcome as a string.

use crate::display::format_value;
use crate::error::Error;
use crate::eval::eval_rpn;
use crate::parsing::shunting_yard::to_rpn;
use crate::parsing::tokenizer::tokenize;
use crate::parsing::unary::mark_unary_minus;

/// Evaluates an expression string to a number. Each stage is a pure
/// function of the previous stage's output, so calls are independent
/// and reentrant.
pub fn evaluate(input: &str) -> Result<f64, Error> {
  let tokens = tokenize(input)?;
  let tokens = mark_unary_minus(&tokens);
  let rpn = to_rpn(tokens)?;
  eval_rpn(&rpn)
}

/// Evaluates an expression string to its display form. This is the
/// single string-in, string-out entry point: a success renders through
/// [`format_value`], and any failure renders as `ERROR: <message>`.
pub fn calculate(input: &str) -> String {
  match evaluate(input) {
    Ok(value) => format_value(value),
    Err(err) => format!("ERROR: {err}"),
  }
}
