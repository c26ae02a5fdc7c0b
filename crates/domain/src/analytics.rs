pub mod ordering;

pub use ordering::{CREATION_ORDER, CreationOrder};
