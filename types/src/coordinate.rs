//! Numeric types usable as point components.

use std::fmt::{Debug, Display};
use std::ops::Add;

/// A scalar that can sit on either axis of a [`Point`](crate::Point).
///
/// Implemented for every primitive integer and float type. Integer addition
/// keeps Rust's native overflow behavior; use [`Coordinate::checked_sum`] to
/// observe overflow instead.
pub trait Coordinate: Copy + PartialEq + Debug + Display + Add<Output = Self> {
    /// Additive identity.
    const ZERO: Self;

    /// Add `rhs`, returning `None` if the sum does not fit in `Self`.
    ///
    /// Floats always succeed: IEEE-754 infinities are valid sums.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coordinate for $ty {
                const ZERO: Self = 0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coordinate for $ty {
                const ZERO: Self = 0.0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_integer_coordinate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_coordinate!(f32, f64);
