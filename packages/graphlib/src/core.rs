//! core small types

use std::fmt::{Debug, Display};

/// Typed node/edge identifiers. Both are dense insertion indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Which incident edges an adjacency query follows.
///
/// Undirected graphs ignore this and always answer as `Both`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

/// Minimal numeric weight trait
pub trait Weight:
    Copy + PartialOrd + std::ops::Add<Output = Self> + Debug + Display + Send + Sync + 'static
{
    fn zero() -> Self;

    /// Addition that clamps at the type's bounds instead of overflowing.
    /// Floats already saturate to infinity.
    fn saturating_add(self, other: Self) -> Self;

    /// False for values that do not compare with themselves (NaN).
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                0.0
            }

            fn saturating_add(self, other: Self) -> Self {
                self + other
            }
        }
    )*};
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                0
            }

            fn saturating_add(self, other: Self) -> Self {
                <$t>::saturating_add(self, other)
            }
        }
    )*};
}

float_weight!(f32, f64);
int_weight!(i32, i64, u32, u64);
