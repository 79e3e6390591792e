use thiserror::Error;

/// Errors returned by the sort entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("digit weight {0} is not a positive power of ten")]
    InvalidWeight(u64),
    #[error("range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },
    #[error("range {start}..{end} exceeds sequence length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    /// A counting pass wrote a different number of slots than its range holds.
    #[error("bookkeeping diverged: expected {expected} slot writes, performed {actual}")]
    Bookkeeping { expected: usize, actual: usize },
}
