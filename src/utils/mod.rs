//! Input validation and numeric tolerance helpers

mod errors;
mod tolerance;
mod validation;

pub use errors::UtilsError;
pub use tolerance::{MAX_VARIANCE, Tolerance};
pub use validation::{MIN_NUMBERS, format_numbers, validate_numbers};
