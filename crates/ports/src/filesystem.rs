// crates/ports/src/filesystem.rs
use std::{io, path::Path};

use commons_kit_shared_kernel::PrecisionTimestamp;

/// The metadata the file filters look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_dir: bool,
    pub is_file: bool,
    /// `None` when the platform does not report modification times.
    pub modified: Option<PrecisionTimestamp>,
}

/// Port for querying entry metadata.
pub trait EntryInspector: Send + Sync {
    fn inspect(&self, path: &Path) -> io::Result<EntryMeta>;
}

impl<T: EntryInspector + ?Sized> EntryInspector for &T {
    fn inspect(&self, path: &Path) -> io::Result<EntryMeta> {
        (**self).inspect(path)
    }
}
