use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected trailing input at position {pos}")]
    TrailingInput { pos: usize },
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}
