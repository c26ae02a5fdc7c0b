// crates/shared-kernel/src/value_objects/mod.rs
pub mod precision_timestamp;
pub mod tuples;

pub use precision_timestamp::PrecisionTimestamp;
pub use tuples::{Tuple2, Tuple3, Tuple4};
