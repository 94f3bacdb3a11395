use std::cell::OnceCell;
use std::fmt;
use std::fmt::Write as _;

use crate::candidate::errors::CandidateError;
use crate::candidate::paren::ParenPlacement;
use crate::candidate::seen::SeenSet;
use crate::expression::{EvalResult, ExpressionError, Operator, evaluate_str};
use crate::utils::Tolerance;

/// One arrangement of numbers, operators and parentheses under consideration
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    numbers: &'a [i64],
    operators: &'a [Operator],
    parens: ParenPlacement,
    canonical: OnceCell<String>,
}

impl<'a> Candidate<'a> {
    /// # Errors
    ///
    /// Returns an error if there is not exactly one operator fewer than
    /// numbers, or a span reaches past the last number.
    pub fn new(
        numbers: &'a [i64],
        operators: &'a [Operator],
        parens: ParenPlacement,
    ) -> Result<Self, CandidateError> {
        let expected = numbers.len().saturating_sub(1);
        if numbers.is_empty() || operators.len() != expected {
            return Err(CandidateError::OperatorCount {
                numbers: numbers.len(),
                expected,
                actual: operators.len(),
            });
        }
        if let Some(close) = parens.max_index()
            && close >= numbers.len()
        {
            return Err(CandidateError::SpanOutOfRange {
                close,
                len: numbers.len(),
            });
        }

        Ok(Self {
            numbers,
            operators,
            parens,
            canonical: OnceCell::new(),
        })
    }

    /// The rendered form, built on first use and reused afterwards.
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| self.render())
    }

    /// `true` if this rendering was already handled in the current run.
    pub fn check_and_mark(&self, seen: &mut SeenSet) -> bool {
        seen.check_and_mark(self.canonical())
    }

    /// # Errors
    ///
    /// Returns an error if the rendered form fails to evaluate.
    pub fn evaluate(&self, tolerance: Tolerance) -> Result<EvalResult, ExpressionError> {
        evaluate_str(self.canonical(), tolerance)
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.numbers.len() * 4);
        let last = self.numbers.len() - 1;

        for (idx, number) in self.numbers.iter().enumerate() {
            out.extend(std::iter::repeat_n('(', self.parens.opens_at(idx)));
            let _ = write!(out, "{}", number);
            out.extend(std::iter::repeat_n(')', self.parens.closes_at(idx)));
            if idx < last
                && let Some(op) = self.operators.get(idx)
            {
                out.push(op.symbol());
            }
        }
        out
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
