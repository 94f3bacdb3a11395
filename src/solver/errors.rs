use thiserror::Error;

use crate::candidate::CandidateError;
use crate::expression::ExpressionError;
use crate::utils::UtilsError;

/// Errors that can occur during a search run
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Candidate error: {0}")]
    CandidateError(#[from] CandidateError),
    #[error("Failed to evaluate [{expression}]")]
    Evaluation {
        expression: String,
        #[source]
        source: ExpressionError,
    },
}
