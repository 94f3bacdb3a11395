use thiserror::Error;

/// Errors raised while checking search inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("must specify at least 2 numbers (got {count})")]
    TooFewNumbers { count: usize },
    #[error("Variance must be at most {max} decimal places (got {variance})")]
    VarianceTooLarge { variance: u32, max: u32 },
}
