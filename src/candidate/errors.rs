use thiserror::Error;

/// Errors raised when assembling a candidate expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CandidateError {
    #[error("Span must open before it closes: open={open}, close={close}")]
    InvalidSpan { open: usize, close: usize },
    #[error("Second span ({second_open}..={second_close}) overlaps the first ({first_open}..={first_close})")]
    OverlappingSpans {
        first_open: usize,
        first_close: usize,
        second_open: usize,
        second_close: usize,
    },
    #[error("Expected {expected} operators for {numbers} numbers, got {actual}")]
    OperatorCount {
        numbers: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Span closes at leaf {close} but there are only {len} numbers")]
    SpanOutOfRange { close: usize, len: usize },
}
