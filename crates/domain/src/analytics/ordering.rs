// domain analytics: creation-time ordering
use std::cmp::Ordering;

use crate::model::TimestampedIdentifiable;

/// Orders records by creation time, then by id.
///
/// Earlier creation instants (millisecond resolution) sort first; equal
/// instants fall back to the lower id. `Equal` is returned only when both keys
/// match, which keeps the order total for sorted collections keyed by it.
/// `compare(a, b) as i32` yields the classic `-1 / 0 / 1` encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreationOrder;

/// Shared stateless instance.
pub const CREATION_ORDER: CreationOrder = CreationOrder;

impl CreationOrder {
    /// The `(epoch millis, id)` key this comparator orders by.
    #[inline]
    pub fn key<T: TimestampedIdentifiable + ?Sized>(record: &T) -> (i64, i64) {
        (record.created_at().timestamp_millis(), record.id())
    }

    #[inline]
    pub fn compare<T: TimestampedIdentifiable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        Self::key(a).cmp(&Self::key(b))
    }

    /// Sorts in place.
    pub fn sort<T: TimestampedIdentifiable>(&self, records: &mut [T]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted<T: TimestampedIdentifiable>(&self, mut records: Vec<T>) -> Vec<T> {
        self.sort(&mut records);
        records
    }
}

// ============================================================================
// Tests
// ============================================================================
