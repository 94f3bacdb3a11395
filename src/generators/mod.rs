//! Up-front sequence generators feeding the search driver

mod permutations;
mod repetitions;

pub use permutations::permutations;
pub use repetitions::repetitions;
