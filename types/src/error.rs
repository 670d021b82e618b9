use std::fmt;

use thiserror::Error;

/// One of the two point axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    /// Operands are kept as rendered text so the error stays independent of
    /// the coordinate type.
    #[error("{axis} coordinate overflowed adding {lhs} and {rhs}")]
    Overflow {
        axis: Axis,
        lhs: String,
        rhs: String,
    },
}

impl PointError {
    #[must_use]
    pub fn axis(&self) -> Axis {
        match self {
            PointError::Overflow { axis, .. } => *axis,
        }
    }
}
