// crates/infra/src/filesystem.rs
use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use commons_kit_ports::filesystem::{EntryInspector, EntryMeta};
use commons_kit_shared_kernel::{InfrastructureError, PrecisionTimestamp, Result};

use crate::filters::{EntryFilter, PathFilter};

/// Filesystem adapter implementing the `EntryInspector` port against the host OS.
///
/// Symlinks are followed, so a link to a directory reports as a directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostFilesystem;

impl EntryInspector for HostFilesystem {
    fn inspect(&self, path: &Path) -> io::Result<EntryMeta> {
        let metadata = std::fs::metadata(path)?;
        Ok(EntryMeta {
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
            modified: metadata.modified().ok().map(PrecisionTimestamp::from),
        })
    }
}

/// Lists `dir` through a name filter and returns the accepted paths.
///
/// Entry names are visited in sorted order so stateful filters behave the same
/// from run to run. Names are passed through as raw OS strings, so entries whose
/// names are not valid UTF-8 are still offered to the filter.
pub fn list_accepted<F>(dir: &Path, filter: &mut F) -> Result<Vec<PathBuf>>
where
    F: EntryFilter + ?Sized,
{
    let accepted = sorted_names(dir)?
        .into_iter()
        .filter(|name| filter.accept(dir, name))
        .map(|name| dir.join(&name))
        .collect();
    Ok(accepted)
}

/// Lists `dir` through a path filter and returns the accepted paths, sorted by name.
pub fn list_matching<F>(dir: &Path, filter: &F) -> Result<Vec<PathBuf>>
where
    F: PathFilter + ?Sized,
{
    let matching = sorted_names(dir)?
        .into_iter()
        .map(|name| dir.join(&name))
        .filter(|path| filter.accept(path))
        .collect();
    Ok(matching)
}

fn sorted_names(dir: &Path) -> Result<Vec<OsString>> {
    let read_error = |source: io::Error| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        names.push(entry.map_err(read_error)?.file_name());
    }
    names.sort_unstable();
    Ok(names)
}
