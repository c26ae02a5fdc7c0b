pub mod limits;
pub mod settings;

pub use limits::{AgeCutoff, CountLimit};
pub use settings::{BoundedAgeSettings, ExtensionSettings};
