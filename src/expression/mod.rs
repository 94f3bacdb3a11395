//! Expression parsing and evaluation split into submodules

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use eval::{EvalResult, evaluate_str};
pub use parser::parse;
