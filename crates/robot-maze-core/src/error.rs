//! Error types for maze construction and robot movement.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors raised by the grid and the navigator.
///
/// Every variant is terminal for the call that produced it. Nothing in
/// the core retries; the state observed before the call is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A grid dimension was zero or negative at construction.
    InvalidDimension {
        /// Which dimension was rejected (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A move targeted a blocked or out-of-bounds cell.
    Impassable {
        /// The cell the move would have entered.
        target: Coord,
    },
    /// A raw direction value outside the enumerated set.
    UndefinedDirection {
        /// The rejected input, as received.
        value: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::Impassable { target } => {
                write!(f, "the robot cannot move to {target}: cell is not passable")
            }
            Self::UndefinedDirection { value } => {
                write!(f, "direction '{value}' is not defined")
            }
        }
    }
}

impl Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let e = MazeError::InvalidDimension {
            name: "height",
            value: -2,
        };
        assert_eq!(e.to_string(), "height must be > 0, got -2");

        let e = MazeError::Impassable {
            target: Coord::new(-1, 0),
        };
        assert!(e.to_string().contains("(-1, 0)"));
    }
}
