// crates/infra/src/filters/bounded_age.rs
use std::{ffi::OsStr, path::Path};

use commons_kit_domain::{AgeCutoff, BoundedAgeSettings, CountLimit};
use commons_kit_ports::filesystem::EntryInspector;
use commons_kit_shared_kernel::PrecisionTimestamp;
use log::{debug, trace};

use super::EntryFilter;
use crate::filesystem::HostFilesystem;

/// Name filter for one directory pass that caps both entry age and entry count.
///
/// Directories are rejected. With a cutoff, entries modified after it are
/// rejected. With a positive `max_count`, only the first `max_count` remaining
/// entries are accepted (see [`CountLimit`]); zero lifts the cap.
///
/// The counter lives in the filter and is never reset: build a new filter for
/// each pass.
#[derive(Debug, Clone)]
pub struct BoundedAgeFileFilter<I = HostFilesystem> {
    limit: CountLimit,
    cutoff: AgeCutoff,
    inspector: I,
}

impl BoundedAgeFileFilter {
    pub fn new(max_count: usize, cutoff: Option<PrecisionTimestamp>) -> Self {
        Self::from_settings(&BoundedAgeSettings::new(max_count, cutoff))
    }

    pub fn from_settings(settings: &BoundedAgeSettings) -> Self {
        Self::with_inspector(settings, HostFilesystem)
    }
}

impl<I: EntryInspector> BoundedAgeFileFilter<I> {
    pub fn with_inspector(settings: &BoundedAgeSettings, inspector: I) -> Self {
        Self { limit: settings.count_limit(), cutoff: settings.age_cutoff(), inspector }
    }

    /// Entries accepted so far.
    pub fn accepted_count(&self) -> usize {
        self.limit.admitted()
    }

    pub fn max_count(&self) -> usize {
        self.limit.max()
    }

    pub fn cutoff(&self) -> Option<PrecisionTimestamp> {
        self.cutoff.cutoff()
    }
}

impl<I: EntryInspector> EntryFilter for BoundedAgeFileFilter<I> {
    fn accept(&mut self, dir: &Path, name: &OsStr) -> bool {
        let path = dir.join(name);
        let meta = match self.inspector.inspect(&path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!("cannot inspect {}: {err}", path.display());
                return false;
            }
        };
        if meta.is_dir {
            trace!("rejecting directory {}", path.display());
            return false;
        }
        if !self.cutoff.admits(meta.modified) {
            trace!("rejecting {}: modified after cutoff", path.display());
            return false;
        }
        self.limit.admit()
    }
}
