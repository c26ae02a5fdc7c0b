// crates/domain/src/config/settings.rs
use commons_kit_shared_kernel::{DomainError, DomainResult, PrecisionTimestamp};
use serde::{Deserialize, Serialize};

use super::{AgeCutoff, CountLimit};

/// Bounds for one bounded-age directory pass.
///
/// ```json
/// { "max_count": 20, "cutoff": "2024-05-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundedAgeSettings {
    /// Zero means unbounded.
    #[serde(default)]
    pub max_count: usize,
    #[serde(default)]
    pub cutoff: Option<PrecisionTimestamp>,
}

impl BoundedAgeSettings {
    pub const fn new(max_count: usize, cutoff: Option<PrecisionTimestamp>) -> Self {
        Self { max_count, cutoff }
    }

    /// # Errors
    /// [`DomainError::InvalidSettings`] when the document is malformed.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn count_limit(&self) -> CountLimit {
        CountLimit::new(self.max_count)
    }

    pub fn age_cutoff(&self) -> AgeCutoff {
        AgeCutoff::new(self.cutoff)
    }
}

/// Extension matched by an extension filter, leading dot included (`.jpg`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionSettings {
    pub extension: String,
}

impl ExtensionSettings {
    /// Parses and lower-cases the extension.
    ///
    /// # Errors
    /// [`DomainError::InvalidSettings`] when the document is malformed or the extension is empty.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        let mut settings: Self = serde_json::from_str(input)?;
        if settings.extension.is_empty() {
            return Err(DomainError::InvalidSettings { reason: "extension must not be empty".into() });
        }
        settings.extension.make_ascii_lowercase();
        Ok(settings)
    }
}
