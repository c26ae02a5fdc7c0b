// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod filters;
pub mod resource;

pub use filesystem::{HostFilesystem, list_accepted, list_matching};
pub use filters::{BoundedAgeFileFilter, EntryFilter, FileExtensionFilter, JPG_FILTER, PathFilter};
pub use resource::{Closeable, LogDiagnostics, ReleaseGuard, ResourceCloser, close_quietly};
