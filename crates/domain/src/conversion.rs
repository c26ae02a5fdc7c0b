// crates/domain/src/conversion.rs
use std::{collections::HashMap, hash::Hash};

use crate::model::TimestampedIdentifiable;

/// Turns an ordered list of `L` into a map from `K` to `V`.
///
/// Implementations may move the input elements into the map as values or
/// derive new values from them; callers must not rely on either.
pub trait ListToMapConverter<L, K, V> {
    fn convert(&self, items: Vec<L>) -> HashMap<K, V>;
}

/// Keys each element with a caller-supplied function and stores the element
/// itself as the value. Later elements win on duplicate keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyedConverter<F> {
    key_of: F,
}

impl<F> KeyedConverter<F> {
    pub const fn new(key_of: F) -> Self {
        Self { key_of }
    }
}

impl<L, K, F> ListToMapConverter<L, K, L> for KeyedConverter<F>
where
    F: Fn(&L) -> K,
    K: Eq + Hash,
{
    fn convert(&self, items: Vec<L>) -> HashMap<K, L> {
        items.into_iter().map(|item| ((self.key_of)(&item), item)).collect()
    }
}

/// Keys records by their [`TimestampedIdentifiable::id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IdKeyed;

impl<L: TimestampedIdentifiable> ListToMapConverter<L, i64, L> for IdKeyed {
    fn convert(&self, items: Vec<L>) -> HashMap<i64, L> {
        items.into_iter().map(|item| (item.id(), item)).collect()
    }
}
