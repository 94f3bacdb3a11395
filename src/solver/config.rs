use crate::utils::{Tolerance, UtilsError};

/// Default value the search aims for.
pub const DEFAULT_TARGET: i64 = 24;
/// Default number of decimal places of floating error tolerated.
pub const DEFAULT_VARIANCE: u32 = 5;

/// What to do when a candidate fails to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the candidate as skipped and keep searching.
    #[default]
    Skip,
    /// Stop the run with the first failure.
    Abort,
}

/// Configuration for a search run
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub target: i64,
    pub tolerance: Tolerance,
    /// Keep non-matching evaluations in the report.
    pub verbose: bool,
    pub on_error: ErrorPolicy,
    /// Shard the work by number permutation across the rayon pool.
    pub parallel: bool,
}

impl SolverConfig {
    /// # Errors
    ///
    /// Returns an error if `variance` is out of range.
    pub fn with_variance(mut self, variance: u32) -> Result<Self, UtilsError> {
        self.tolerance = Tolerance::from_variance(variance)?;
        Ok(self)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: Tolerance::default(),
            verbose: false,
            on_error: ErrorPolicy::default(),
            parallel: false,
        }
    }
}
