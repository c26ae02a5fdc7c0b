// crates/domain/src/sequence.rs
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local source of increasing sequence numbers.
///
/// Values are unique for the lifetime of one generator. Nothing is persisted,
/// so a restarted process starts over at zero. The counter is 64 bits wide;
/// past `u64::MAX` it wraps to zero.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    next: AtomicU64,
}

static GLOBAL: SequenceGenerator = SequenceGenerator::new();

impl SequenceGenerator {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }

    /// Returns the current value and advances the counter in one atomic step.
    #[inline]
    pub fn next_sequence_number(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`next_sequence_number`](Self::next_sequence_number) returns,
    /// unless another thread gets there first.
    #[inline]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// Generator shared by the whole process, initialised at zero.
pub fn global() -> &'static SequenceGenerator {
    &GLOBAL
}

/// Shorthand for `global().next_sequence_number()`.
pub fn next_sequence_number() -> u64 {
    GLOBAL.next_sequence_number()
}
