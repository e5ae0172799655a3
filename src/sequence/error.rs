use derive_more::{Display, Error};

/// A negative number of workers was requested for a bounded-concurrency traversal.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("worker count must not be negative, got {workers}")]
pub struct NegativeWorkers {
    #[error(not(source))]
    pub workers: isize,
}

/// The number of permutations of a sequence with `len` elements doesn't fit in an [`i64`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("{len}! permutations would overflow i64, refusing to permute")]
pub struct NotPermutable {
    #[error(not(source))]
    pub len: usize,
}
