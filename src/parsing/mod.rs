
//! The front half of the pipeline: scanning an expression string into
//! tokens, classifying unary minus, and reordering into postfix form.

pub mod operator;
pub mod shunting_yard;
pub mod token;
pub mod tokenizer;
pub mod unary;
