// crates/infra/src/filters/extension.rs
use std::{borrow::Cow, ffi::OsStr, path::Path};

use commons_kit_domain::ExtensionSettings;
use commons_kit_ports::filesystem::EntryInspector;
use log::debug;

use super::{EntryFilter, PathFilter};
use crate::filesystem::HostFilesystem;

/// Accepts regular files whose name ends with `.jpg`, in any letter case.
pub const JPG_FILTER: FileExtensionFilter = FileExtensionFilter::from_static(".jpg");

/// Accepts regular files whose lower-cased name ends with the configured extension.
///
/// The extension includes its leading dot and is expected in lower case.
/// Directories never match, whatever their name.
#[derive(Debug, Clone)]
pub struct FileExtensionFilter<I = HostFilesystem> {
    extension: Cow<'static, str>,
    inspector: I,
}

impl FileExtensionFilter {
    /// # Panics
    /// If `extension` is empty.
    pub fn new(extension: impl Into<Cow<'static, str>>) -> Self {
        Self::with_inspector(extension, HostFilesystem)
    }

    /// # Panics
    /// If `extension` is empty; in a `const` this fails the build instead.
    pub const fn from_static(extension: &'static str) -> Self {
        assert!(!extension.is_empty(), "file extension filter needs a non-empty extension");
        Self { extension: Cow::Borrowed(extension), inspector: HostFilesystem }
    }

    pub fn from_settings(settings: &ExtensionSettings) -> Self {
        Self::new(settings.extension.clone())
    }
}

impl<I: EntryInspector> FileExtensionFilter<I> {
    /// # Panics
    /// If `extension` is empty.
    pub fn with_inspector(extension: impl Into<Cow<'static, str>>, inspector: I) -> Self {
        let extension = extension.into();
        assert!(!extension.is_empty(), "file extension filter needs a non-empty extension");
        Self { extension, inspector }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Name-only half of the check.
    #[inline]
    pub fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&*self.extension)
    }
}

impl<I: EntryInspector> PathFilter for FileExtensionFilter<I> {
    fn accept(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if !self.matches_name(&name.to_string_lossy()) {
            return false;
        }
        match self.inspector.inspect(path) {
            Ok(meta) => meta.is_file,
            Err(err) => {
                debug!("cannot inspect {}: {err}", path.display());
                false
            }
        }
    }
}

impl<I: EntryInspector> EntryFilter for FileExtensionFilter<I> {
    fn accept(&mut self, dir: &Path, name: &OsStr) -> bool {
        PathFilter::accept(&*self, &dir.join(name))
    }
}
