// crates/shared-kernel/src/value_objects/tuples.rs
//! Fixed-arity heterogeneous value holders.
//!
//! Equality, ordering and hashing are structural and follow declaration order.
//! Use `Option<T>` for slots that may be empty.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple2<X, Y> {
    first: X,
    second: Y,
}

impl<X, Y> Tuple2<X, Y> {
    pub const fn new(first: X, second: Y) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &X {
        &self.first
    }

    pub fn second(&self) -> &Y {
        &self.second
    }

    /// Appends one slot, producing the three-element shape.
    pub fn extend<Z>(self, third: Z) -> Tuple3<X, Y, Z> {
        Tuple3::new(self.first, self.second, third)
    }

    pub fn into_inner(self) -> (X, Y) {
        (self.first, self.second)
    }
}

impl<X, Y> From<(X, Y)> for Tuple2<X, Y> {
    fn from((first, second): (X, Y)) -> Self {
        Self::new(first, second)
    }
}

impl<X: fmt::Display, Y: fmt::Display> fmt::Display for Tuple2<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple3<X, Y, Z> {
    first: X,
    second: Y,
    third: Z,
}

impl<X, Y, Z> Tuple3<X, Y, Z> {
    pub const fn new(first: X, second: Y, third: Z) -> Self {
        Self { first, second, third }
    }

    pub fn first(&self) -> &X {
        &self.first
    }

    pub fn second(&self) -> &Y {
        &self.second
    }

    pub fn third(&self) -> &Z {
        &self.third
    }

    /// Borrowed view of the leading pair.
    pub fn init(&self) -> Tuple2<&X, &Y> {
        Tuple2::new(&self.first, &self.second)
    }

    pub fn split_last(self) -> (Tuple2<X, Y>, Z) {
        (Tuple2::new(self.first, self.second), self.third)
    }

    pub fn extend<W>(self, fourth: W) -> Tuple4<X, Y, Z, W> {
        Tuple4::new(self.first, self.second, self.third, fourth)
    }

    pub fn into_inner(self) -> (X, Y, Z) {
        (self.first, self.second, self.third)
    }
}

impl<X, Y, Z> From<(X, Y, Z)> for Tuple3<X, Y, Z> {
    fn from((first, second, third): (X, Y, Z)) -> Self {
        Self::new(first, second, third)
    }
}

impl<X: fmt::Display, Y: fmt::Display, Z: fmt::Display> fmt::Display for Tuple3<X, Y, Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.first, self.second, self.third)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple4<X, Y, Z, W> {
    first: X,
    second: Y,
    third: Z,
    fourth: W,
}

impl<X, Y, Z, W> Tuple4<X, Y, Z, W> {
    pub const fn new(first: X, second: Y, third: Z, fourth: W) -> Self {
        Self { first, second, third, fourth }
    }

    pub fn first(&self) -> &X {
        &self.first
    }

    pub fn second(&self) -> &Y {
        &self.second
    }

    pub fn third(&self) -> &Z {
        &self.third
    }

    pub fn fourth(&self) -> &W {
        &self.fourth
    }

    /// Borrowed view of the leading triple.
    pub fn init(&self) -> Tuple3<&X, &Y, &Z> {
        Tuple3::new(&self.first, &self.second, &self.third)
    }

    pub fn split_last(self) -> (Tuple3<X, Y, Z>, W) {
        (Tuple3::new(self.first, self.second, self.third), self.fourth)
    }

    pub fn into_inner(self) -> (X, Y, Z, W) {
        (self.first, self.second, self.third, self.fourth)
    }
}

impl<X, Y, Z, W> From<(X, Y, Z, W)> for Tuple4<X, Y, Z, W> {
    fn from((first, second, third, fourth): (X, Y, Z, W)) -> Self {
        Self::new(first, second, third, fourth)
    }
}

impl<X, Y, Z, W> fmt::Display for Tuple4<X, Y, Z, W>
where
    X: fmt::Display,
    Y: fmt::Display,
    Z: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.first, self.second, self.third, self.fourth)
    }
}
