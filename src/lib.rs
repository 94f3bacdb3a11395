//! Tally - exhaustively combine integers with `+ - * /` to reach a target
//!
//! Every ordering of the input numbers is paired with every assignment of the
//! four operators to the slots between them and every supported placement of
//! parentheses. Each distinct rendering is evaluated once and compared with the
//! target inside a floating-point tolerance window.

pub mod candidate;
pub mod expression;
pub mod generators;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use candidate::{Candidate, CandidateError, ParenPlacement, SeenSet, Span};
pub use expression::{EvalResult, Expression, ExpressionError, Operator, evaluate_str, parse};
pub use solver::{
    ErrorPolicy, Evaluation, ExpressionSolver, SearchEvent, SearchReport, SearchStats,
    SkippedCandidate, SolverConfig, SolverError,
};
pub use utils::{Tolerance, UtilsError, validate_numbers};

/// Find every expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that runs a default search (five decimal
/// places of tolerance, skipping candidates that divide by zero) and returns
/// the matches in discovery order.
///
/// # Arguments
///
/// * `numbers` - At least two integers, each used exactly once per expression
/// * `target` - The value to reach
///
/// # Errors
///
/// This function will return an error if fewer than two numbers are given.
///
/// # Examples
///
/// ```
/// use tally::find_expressions;
///
/// let found = find_expressions(&[4, 4, 10, 10], 24).unwrap_or_default();
/// for m in &found {
///     println!("{}", m);
/// }
/// ```
pub fn find_expressions(numbers: &[i64], target: i64) -> Result<Vec<Evaluation>, SolverError> {
    let solver = ExpressionSolver::new(SolverConfig {
        target,
        ..SolverConfig::default()
    });
    Ok(solver.search(numbers)?.matches)
}
