use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Smallest input multiset the search accepts.
pub const MIN_NUMBERS: usize = 2;

/// # Errors
///
/// Returns an error if fewer than two numbers are supplied.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.len() < MIN_NUMBERS {
        warn!(
            "Need at least {} numbers, got {}",
            MIN_NUMBERS,
            numbers.len()
        );
        return Err(UtilsError::TooFewNumbers {
            count: numbers.len(),
        });
    }

    debug!("Number validation successful");
    Ok(())
}

/// Render numbers as `(a, b, c)` for log output.
pub fn format_numbers(numbers: &[i64]) -> String {
    let inner = numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", inner)
}
