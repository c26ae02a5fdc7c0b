// crates/shared-kernel/src/value_objects/precision_timestamp.rs
use std::{fmt, time::SystemTime};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

const MAX_NANOS: u32 = 999_999_999;

/// Instant that keeps its full nanosecond-of-second component.
///
/// Rebuilding a timestamp from [`epoch_millis`](Self::epoch_millis) alone drops
/// everything below the millisecond; copying through this type does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct PrecisionTimestamp(DateTime<Utc>);

impl PrecisionTimestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Exact copy of `source`, sub-millisecond part included.
    pub fn copy_of(source: &Self) -> Self {
        Self(source.0)
    }

    /// Builds a timestamp from an epoch millisecond value and a nanosecond-of-second field.
    ///
    /// `nanos` replaces the sub-second part of `millis`, so `(1_500, 123_456_789)`
    /// is one second plus 123456789ns.
    ///
    /// # Errors
    /// [`DomainError::InvalidNanos`] when `nanos` exceeds 999,999,999 and
    /// [`DomainError::TimestampOutOfRange`] when `millis` cannot be represented.
    pub fn from_parts(millis: i64, nanos: u32) -> DomainResult<Self> {
        if nanos > MAX_NANOS {
            return Err(DomainError::InvalidNanos { nanos });
        }
        DateTime::from_timestamp(millis.div_euclid(1_000), nanos)
            .map(Self)
            .ok_or(DomainError::TimestampOutOfRange { millis })
    }

    /// Builds a timestamp from epoch milliseconds only; the nanosecond field
    /// carries the millisecond remainder.
    ///
    /// # Errors
    /// [`DomainError::TimestampOutOfRange`] when `millis` cannot be represented.
    pub fn from_epoch_millis(millis: i64) -> DomainResult<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or(DomainError::TimestampOutOfRange { millis })
    }

    #[inline]
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    #[inline]
    #[must_use]
    pub fn nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for PrecisionTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl From<SystemTime> for PrecisionTimestamp {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Utc>::from(time))
    }
}

impl From<PrecisionTimestamp> for DateTime<Utc> {
    fn from(timestamp: PrecisionTimestamp) -> Self {
        timestamp.0
    }
}

impl fmt::Display for PrecisionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.9f"))
    }
}
