// crates/domain/src/config/limits.rs
use commons_kit_shared_kernel::PrecisionTimestamp;

/// Running cap on the number of entries a single traversal may accept.
///
/// A maximum of zero means unbounded. For a positive maximum `N` the counter
/// is bumped while it is `<= N` and the entry is admitted when the bumped
/// value is still `<= N`, so exactly the first `N` entries pass and the
/// counter stops at `N + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountLimit {
    max: usize,
    count: usize,
}

impl CountLimit {
    pub const fn new(max: usize) -> Self {
        Self { max, count: 0 }
    }

    pub const fn unbounded() -> Self {
        Self::new(0)
    }

    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.max > 0
    }

    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Records one qualifying entry and reports whether it fits under the cap.
    pub fn admit(&mut self) -> bool {
        if !self.is_bounded() {
            self.count = self.count.saturating_add(1);
            return true;
        }
        if self.count <= self.max {
            self.count = self.count.saturating_add(1);
        }
        self.count <= self.max
    }

    /// Entries admitted so far.
    #[inline]
    pub fn admitted(&self) -> usize {
        if self.is_bounded() { self.count.min(self.max) } else { self.count }
    }
}

/// Optional "modified no later than" bound, compared at millisecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeCutoff(Option<PrecisionTimestamp>);

impl AgeCutoff {
    pub const fn new(cutoff: Option<PrecisionTimestamp>) -> Self {
        Self(cutoff)
    }

    pub const fn none() -> Self {
        Self(None)
    }

    pub const fn cutoff(&self) -> Option<PrecisionTimestamp> {
        self.0
    }

    /// An entry without a known modification time counts as modified at the Unix epoch.
    #[inline]
    pub fn admits(&self, modified: Option<PrecisionTimestamp>) -> bool {
        self.0.is_none_or(|cutoff| {
            modified.map_or(0, |m| m.epoch_millis()) <= cutoff.epoch_millis()
        })
    }
}
