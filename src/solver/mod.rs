mod config;
mod core;
mod errors;
mod report;

pub use self::core::ExpressionSolver;
pub use config::{DEFAULT_TARGET, DEFAULT_VARIANCE, ErrorPolicy, SolverConfig};
pub use errors::SolverError;
pub use report::{Evaluation, SearchEvent, SearchReport, SearchStats, SkippedCandidate};
