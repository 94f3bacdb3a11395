//! Candidate expressions, their parenthesisation and the run-scoped seen set

mod core;
mod errors;
mod paren;
mod seen;

pub use self::core::Candidate;
pub use errors::CandidateError;
pub use paren::{DOUBLE_SPAN_MIN_LEN, ParenPlacement, Span};
pub use seen::SeenSet;

#[cfg(test)]
mod tests;
