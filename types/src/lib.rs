//! Core geometry types for Planar.
//!
//! This crate contains pure value types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod coordinate;
mod error;
mod point;

pub use coordinate::Coordinate;
pub use error::{Axis, PointError};
pub use point::Point;
