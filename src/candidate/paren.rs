use log::debug;

use crate::candidate::errors::CandidateError;

/// Smallest number count that gets the two-group `(a?b)?(c?...)` variant.
pub const DOUBLE_SPAN_MIN_LEN: usize = 4;

/// An open/close pair of leaf indices, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    open: usize,
    close: usize,
}

impl Span {
    /// # Errors
    ///
    /// Returns an error unless `open < close`.
    pub fn new(open: usize, close: usize) -> Result<Self, CandidateError> {
        if open >= close {
            return Err(CandidateError::InvalidSpan { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> usize {
        self.open
    }

    pub fn close(&self) -> usize {
        self.close
    }
}

/// Where parentheses go in a candidate: none, one span, or two disjoint spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParenPlacement {
    first: Option<Span>,
    second: Option<Span>,
}

impl ParenPlacement {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(span: Span) -> Self {
        Self {
            first: Some(span),
            second: None,
        }
    }

    /// # Errors
    ///
    /// Returns an error if `second` does not start after `first` closes.
    pub fn double(first: Span, second: Span) -> Result<Self, CandidateError> {
        if second.open <= first.close {
            return Err(CandidateError::OverlappingSpans {
                first_open: first.open,
                first_close: first.close,
                second_open: second.open,
                second_close: second.close,
            });
        }
        Ok(Self {
            first: Some(first),
            second: Some(second),
        })
    }

    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.first.iter().chain(self.second.iter()).copied()
    }

    pub fn opens_at(&self, index: usize) -> usize {
        self.spans().filter(|s| s.open == index).count()
    }

    pub fn closes_at(&self, index: usize) -> usize {
        self.spans().filter(|s| s.close == index).count()
    }

    /// Highest leaf index any span touches.
    pub fn max_index(&self) -> Option<usize> {
        self.spans().map(|s| s.close).max()
    }

    /// Every placement searched for `len` numbers.
    ///
    /// One span for each `(i, j)` with `0 <= i < j < len`, row by row. Right
    /// after `(0, 1)`, when there are at least four numbers, the pair
    /// `(0, 1), (2, len - 1)` is added to reach shapes like `(a+b)*(c+d)`.
    /// No other multi-group shapes are produced.
    pub fn enumerate(len: usize) -> Vec<ParenPlacement> {
        let mut placements = Vec::with_capacity(len * len.saturating_sub(1) / 2 + 1);

        for open in 0..len.saturating_sub(1) {
            for close in open + 1..len {
                let span = Span { open, close };
                placements.push(Self::single(span));

                if open == 0 && close == 1 && len >= DOUBLE_SPAN_MIN_LEN {
                    let tail = Span {
                        open: 2,
                        close: len - 1,
                    };
                    placements.push(Self {
                        first: Some(span),
                        second: Some(tail),
                    });
                }
            }
        }

        debug!(
            "Enumerated {} paren placements for {} numbers",
            placements.len(),
            len
        );
        placements
    }
}
