//! # commons_kit
//!
//! Small helpers shared across the framework:
//!
//! - [`CreationOrder`]: orders records by creation time, then id
//! - [`FileExtensionFilter`] / [`BoundedAgeFileFilter`]: file selection predicates
//! - [`Tuple2`] / [`Tuple3`] / [`Tuple4`]: fixed-arity value holders
//! - [`SequenceGenerator`]: in-process increasing numbers
//! - [`ListToMapConverter`]: list-to-map conversion contract
//! - [`ResourceCloser`] / [`ReleaseGuard`]: best-effort release
//! - [`PrecisionTimestamp`]: timestamp that keeps its nanoseconds
#![allow(clippy::multiple_crate_versions)]

pub use commons_kit_domain::{
    AgeCutoff, BoundedAgeSettings, CREATION_ORDER, CountLimit, CreationOrder, ExtensionSettings, IdKeyed,
    KeyedConverter, ListToMapConverter, SequenceGenerator, TimestampedIdentifiable,
    sequence::{self, next_sequence_number},
};
pub use commons_kit_infra::{
    BoundedAgeFileFilter, Closeable, EntryFilter, FileExtensionFilter, HostFilesystem, JPG_FILTER, LogDiagnostics,
    PathFilter, ReleaseGuard, ResourceCloser, close_quietly, list_accepted, list_matching,
};
pub use commons_kit_ports::{CloseDiagnostics, EntryInspector, EntryMeta};
pub use commons_kit_shared_kernel::{
    CommonsError, DomainError, DomainResult, ErrorContext, InfrastructureError, PrecisionTimestamp,
    Result, Tuple2, Tuple3, Tuple4,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
