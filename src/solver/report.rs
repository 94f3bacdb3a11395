use std::fmt;

use crate::expression::{EvalResult, ExpressionError};

/// A rendered candidate together with its value
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expression: String,
    pub result: EvalResult,
}

impl Evaluation {
    /// `expr = total (float)`, with the float to nine places.
    pub fn detailed(&self) -> String {
        format!("{} ({:.9})", self, self.result.float)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.result.total {
            Some(total) => write!(f, "{} = {}", self.expression, total),
            None => write!(f, "{} = ?", self.expression),
        }
    }
}

/// A candidate whose rendering could not be evaluated
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedCandidate {
    pub expression: String,
    pub error: ExpressionError,
}

impl fmt::Display for SkippedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.expression, self.error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub permutations: usize,
    pub operator_sequences: usize,
    /// Every (numbers, operators, parens) triple visited.
    pub candidates: usize,
    /// Triples whose rendering had already been seen.
    pub duplicates: usize,
    pub evaluated: usize,
    pub matches: usize,
    pub skipped: usize,
}

/// One recorded outcome, handed to the caller as soon as it is known
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Match(Evaluation),
    /// Only emitted when the run is verbose.
    Miss(Evaluation),
    Skipped(SkippedCandidate),
}

/// Everything a search run produced
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub matches: Vec<Evaluation>,
    /// Only filled when the run is verbose.
    pub misses: Vec<Evaluation>,
    pub skipped: Vec<SkippedCandidate>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub(crate) fn push(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Match(evaluation) => self.matches.push(evaluation),
            SearchEvent::Miss(evaluation) => self.misses.push(evaluation),
            SearchEvent::Skipped(skipped) => self.skipped.push(skipped),
        }
    }
}
