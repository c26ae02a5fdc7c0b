// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CommonsError, DomainError, DomainResult, ErrorContext, InfrastructureError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{PrecisionTimestamp, Tuple2, Tuple3, Tuple4};
