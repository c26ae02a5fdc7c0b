pub mod record;

pub use record::TimestampedIdentifiable;
