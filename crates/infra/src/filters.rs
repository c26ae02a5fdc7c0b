//! File selection predicates.
//!
//! [`PathFilter`] judges a full path and is stateless; [`EntryFilter`] is fed
//! `(directory, name)` pairs during one listing and may keep state, which is
//! why it takes `&mut self`.

// crates/infra/src/filters.rs
use std::{ffi::OsStr, path::Path};

pub mod bounded_age;
pub mod extension;

pub use bounded_age::BoundedAgeFileFilter;
pub use extension::{FileExtensionFilter, JPG_FILTER};

pub trait PathFilter {
    fn accept(&self, path: &Path) -> bool;
}

pub trait EntryFilter {
    fn accept(&mut self, dir: &Path, name: &OsStr) -> bool;
}

impl<F: PathFilter + ?Sized> PathFilter for &F {
    fn accept(&self, path: &Path) -> bool {
        (**self).accept(path)
    }
}
