// crates/domain/src/model/record.rs
use chrono::{DateTime, Utc};

/// A record that carries its creation instant and a store-unique numeric id.
///
/// Creation instants are compared at millisecond resolution; ties are legal
/// and resolved by id.
pub trait TimestampedIdentifiable {
    fn created_at(&self) -> DateTime<Utc>;

    fn id(&self) -> i64;
}

impl<T: TimestampedIdentifiable + ?Sized> TimestampedIdentifiable for &T {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn id(&self) -> i64 {
        (**self).id()
    }
}

impl<T: TimestampedIdentifiable + ?Sized> TimestampedIdentifiable for Box<T> {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn id(&self) -> i64 {
        (**self).id()
    }
}
