//! The two-dimensional point value.
//!
//! A `Point` is a plain `Copy` value. Nothing here mutates an existing point:
//! every operation hands back a fresh one and leaves its operands untouched.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::{Axis, Coordinate, PointError};

/// A position in two-dimensional space.
///
/// Generic over the coordinate type; `Point` alone means `Point<i32>`.
///
/// ```
/// use planar_types::Point;
///
/// let p = Point::new(1, 2).add(Point::new(3, 4));
/// assert_eq!(p, Point::new(4, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T: Coordinate> Point<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The point `(0, 0)`, identity for [`Point::add`].
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// Component-wise vector addition.
    ///
    /// Uses the native `+` of `T`, so integer overflow panics in debug builds
    /// and wraps in release builds. See [`Point::try_add`] for the checked form.
    ///
    /// ```
    /// use planar_types::Point;
    ///
    /// let sum = Point::new(-1, 5).add(Point::new(1, -5));
    /// assert_eq!(sum, Point::origin());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // `Add` is implemented too and delegates here
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise addition that reports overflow instead of panicking or
    /// wrapping. The x axis is checked first.
    ///
    /// ```
    /// use planar_types::{Axis, Point};
    ///
    /// let err = Point::new(i8::MAX, 0).try_add(Point::new(1, 0)).unwrap_err();
    /// assert_eq!(err.axis(), Axis::X);
    /// ```
    pub fn try_add(self, other: Self) -> Result<Self, PointError> {
        let x = self
            .x
            .checked_sum(other.x)
            .ok_or_else(|| overflow(Axis::X, self.x, other.x))?;
        let y = self
            .y
            .checked_sum(other.y)
            .ok_or_else(|| overflow(Axis::Y, self.y, other.y))?;
        Ok(Self::new(x, y))
    }
}

fn overflow<T: fmt::Display>(axis: Axis, lhs: T, rhs: T) -> PointError {
    PointError::Overflow {
        axis,
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    }
}

impl<T: Coordinate> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Point::add(self, rhs)
    }
}

impl<T: Coordinate> Add<&Point<T>> for &Point<T> {
    type Output = Point<T>;

    fn add(self, rhs: &Point<T>) -> Point<T> {
        Point::add(*self, *rhs)
    }
}

impl<T: Coordinate> Sum for Point<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::origin(), Point::add)
    }
}

impl<'a, T: Coordinate + 'a> Sum<&'a Point<T>> for Point<T> {
    fn sum<I: Iterator<Item = &'a Point<T>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<T: Coordinate> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Coordinate> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
