use log::{debug, info, warn};
use rayon::prelude::*;

use crate::candidate::{Candidate, CandidateError, ParenPlacement, SeenSet};
use crate::expression::{EvalResult, ExpressionError, Operator};
use crate::generators::{permutations, repetitions};
use crate::solver::config::{ErrorPolicy, SolverConfig};
use crate::solver::errors::SolverError;
use crate::solver::report::{Evaluation, SearchEvent, SearchReport, SearchStats, SkippedCandidate};
use crate::utils::{format_numbers, validate_numbers};

type Outcome = Result<EvalResult, ExpressionError>;

/// Work done for one number permutation when searching in parallel
struct Shard {
    visited: usize,
    duplicates: usize,
    outcomes: Vec<(String, Outcome)>,
}

/// Exhaustive search over orderings, operator slots and paren placements
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run a full search with a fresh seen set.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than two numbers, or on the first
    /// evaluation failure when the policy is [`ErrorPolicy::Abort`].
    pub fn search(&self, numbers: &[i64]) -> Result<SearchReport, SolverError> {
        let mut seen = SeenSet::new();
        self.search_with(numbers, &mut seen)
    }

    /// Run a full search against a caller-owned seen set, collecting every
    /// event into a report.
    ///
    /// Renderings already in `seen` are neither evaluated nor reported.
    ///
    /// # Errors
    ///
    /// Same as [`ExpressionSolver::search`].
    pub fn search_with(
        &self,
        numbers: &[i64],
        seen: &mut SeenSet,
    ) -> Result<SearchReport, SolverError> {
        let mut report = SearchReport::default();
        let stats = self.search_streaming(numbers, seen, |event| report.push(event))?;
        report.stats = stats;
        Ok(report)
    }

    /// Run a full search, handing each match, skip and (when verbose) miss
    /// to `on_event` in discovery order as soon as it is recorded.
    ///
    /// Events delivered before an abort stay delivered.
    ///
    /// # Errors
    ///
    /// Same as [`ExpressionSolver::search`].
    pub fn search_streaming<F>(
        &self,
        numbers: &[i64],
        seen: &mut SeenSet,
        mut on_event: F,
    ) -> Result<SearchStats, SolverError>
    where
        F: FnMut(SearchEvent),
    {
        validate_numbers(numbers)?;

        info!(
            "Combining integers {} with target {}...",
            format_numbers(numbers),
            self.config.target
        );

        // numbers are single-use, operators may repeat
        let number_seqs = permutations(numbers);
        info!(
            "Found {} number permutations (no repetition)",
            number_seqs.len()
        );
        debug!("{:?}", number_seqs);

        let operator_seqs = repetitions(&Operator::ALL, numbers.len() - 1);
        info!(
            "Found {} operator permutations (with repetition)",
            operator_seqs.len()
        );

        let placements = ParenPlacement::enumerate(numbers.len());

        let mut stats = SearchStats {
            permutations: number_seqs.len(),
            operator_sequences: operator_seqs.len(),
            ..SearchStats::default()
        };

        if self.config.parallel {
            self.search_parallel(
                &number_seqs,
                &operator_seqs,
                &placements,
                seen,
                &mut stats,
                &mut on_event,
            )?;
        } else {
            self.search_sequential(
                &number_seqs,
                &operator_seqs,
                &placements,
                seen,
                &mut stats,
                &mut on_event,
            )?;
        }

        if stats.skipped > 0 {
            warn!(
                "Skipped {} candidates that could not be evaluated",
                stats.skipped
            );
        }
        info!(
            "Search finished: {} matches, {} evaluated, {} duplicates of {} candidates",
            stats.matches, stats.evaluated, stats.duplicates, stats.candidates
        );

        Ok(stats)
    }

    fn search_sequential<F: FnMut(SearchEvent)>(
        &self,
        number_seqs: &[Vec<i64>],
        operator_seqs: &[Vec<Operator>],
        placements: &[ParenPlacement],
        seen: &mut SeenSet,
        stats: &mut SearchStats,
        on_event: &mut F,
    ) -> Result<(), SolverError> {
        let tolerance = self.config.tolerance;

        for nums in number_seqs {
            for ops in operator_seqs {
                for &parens in placements {
                    let candidate = Candidate::new(nums, ops, parens)?;
                    stats.candidates += 1;

                    // skip renderings we've already processed
                    if candidate.check_and_mark(seen) {
                        stats.duplicates += 1;
                        continue;
                    }

                    let outcome = candidate.evaluate(tolerance);
                    self.record(stats, on_event, candidate.canonical().to_string(), outcome)?;
                }
            }
        }
        Ok(())
    }

    /// Permutations are processed one pool-sized batch at a time. Inside a
    /// batch every shard skips renderings already in `seen` (a read-only
    /// snapshot of all earlier batches) and renderings it produced itself,
    /// before evaluating. Those checks are only a pre-filter: shards of the
    /// same batch can still share renderings, so the in-order merge through
    /// `seen` is what decides which outcome gets recorded. The result is
    /// identical to a sequential run.
    fn search_parallel<F: FnMut(SearchEvent)>(
        &self,
        number_seqs: &[Vec<i64>],
        operator_seqs: &[Vec<Operator>],
        placements: &[ParenPlacement],
        seen: &mut SeenSet,
        stats: &mut SearchStats,
        on_event: &mut F,
    ) -> Result<(), SolverError> {
        let tolerance = self.config.tolerance;
        let batch_size = rayon::current_num_threads().max(1);
        info!("Sharding search across {} threads", batch_size);

        for batch in number_seqs.chunks(batch_size) {
            let snapshot: &SeenSet = seen;
            let shards = batch
                .par_iter()
                .map(|nums| -> Result<Shard, CandidateError> {
                    let mut local = SeenSet::new();
                    let mut shard = Shard {
                        visited: 0,
                        duplicates: 0,
                        outcomes: Vec::new(),
                    };

                    for ops in operator_seqs {
                        for &parens in placements {
                            let candidate = Candidate::new(nums, ops, parens)?;
                            shard.visited += 1;
                            if snapshot.contains(candidate.canonical())
                                || candidate.check_and_mark(&mut local)
                            {
                                shard.duplicates += 1;
                                continue;
                            }
                            let outcome = candidate.evaluate(tolerance);
                            shard
                                .outcomes
                                .push((candidate.canonical().to_string(), outcome));
                        }
                    }
                    Ok(shard)
                })
                .collect::<Result<Vec<_>, _>>()?;

            for shard in shards {
                stats.candidates += shard.visited;
                stats.duplicates += shard.duplicates;

                for (expression, outcome) in shard.outcomes {
                    // an earlier shard of this batch may have produced it first
                    if seen.check_and_mark(&expression) {
                        stats.duplicates += 1;
                        continue;
                    }
                    self.record(stats, on_event, expression, outcome)?;
                }
            }
        }
        Ok(())
    }

    fn record<F: FnMut(SearchEvent)>(
        &self,
        stats: &mut SearchStats,
        on_event: &mut F,
        expression: String,
        outcome: Outcome,
    ) -> Result<(), SolverError> {
        stats.evaluated += 1;

        match outcome {
            Ok(result) => {
                let evaluation = Evaluation { expression, result };
                if self.is_match(&result) {
                    debug!("Match: {}", evaluation);
                    stats.matches += 1;
                    on_event(SearchEvent::Match(evaluation));
                } else if self.config.verbose {
                    on_event(SearchEvent::Miss(evaluation));
                }
                Ok(())
            }
            Err(error) => match self.config.on_error {
                ErrorPolicy::Abort => Err(SolverError::Evaluation {
                    expression,
                    source: error,
                }),
                ErrorPolicy::Skip => {
                    debug!("Skipping [{}]: {}", expression, error);
                    stats.skipped += 1;
                    on_event(SearchEvent::Skipped(SkippedCandidate { expression, error }));
                    Ok(())
                }
            },
        }
    }

    /// Integral within the tolerance and inside the window around the target.
    fn is_match(&self, result: &EvalResult) -> bool {
        result.total.is_some()
            && self
                .config
                .tolerance
                .matches(result.float, self.config.target)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
