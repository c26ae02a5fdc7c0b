//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: read-only entry metadata queries used by the file filters
//! - [`diagnostics`]: sink receiving failures that helpers swallow on purpose
//!
//! Adapters live in `commons_kit_infra`; tests substitute their own.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod filesystem;

pub use diagnostics::CloseDiagnostics;
pub use filesystem::{EntryInspector, EntryMeta};
