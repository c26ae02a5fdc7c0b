#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod conversion;
pub mod model;
pub mod sequence;

pub use analytics::{CREATION_ORDER, CreationOrder};
pub use config::{AgeCutoff, BoundedAgeSettings, CountLimit, ExtensionSettings};
pub use conversion::{IdKeyed, KeyedConverter, ListToMapConverter};
pub use model::TimestampedIdentifiable;
pub use sequence::SequenceGenerator;
