
pub mod calculator;
pub mod display;
pub mod error;
pub mod eval;
pub mod parsing;
pub mod stack;

pub use calculator::{calculate, evaluate};
pub use error::Error;
