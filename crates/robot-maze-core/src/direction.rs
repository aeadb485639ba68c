//! Movement directions.

use crate::error::MazeError;
use std::fmt;
use std::str::FromStr;

/// A movement request for the robot.
///
/// The four compass variants displace the robot by one cell. `None` is
/// a degenerate "stay" request: it resolves to the robot's own cell and
/// is only ever a no-op move.
///
/// The enum is closed, so every `Direction` value is defined. Raw values
/// arriving from outside (wire bytes, user text) are rejected with
/// [`MazeError::UndefinedDirection`] by the `TryFrom<u8>` and `FromStr`
/// conversions before they can reach the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Move one cell north (y - 1).
    North = 0,
    /// Move one cell east (x + 1).
    East = 1,
    /// Move one cell south (y + 1).
    South = 2,
    /// Move one cell west (x - 1).
    West = 3,
    /// Stay in place.
    None = 4,
}

impl Direction {
    /// The four physical directions, in generation scan order (N, S, E, W).
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` displacement for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::None => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::None => "none",
        };
        f.write_str(name)
    }
}

impl TryFrom<u8> for Direction {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            4 => Ok(Direction::None),
            other => Err(MazeError::UndefinedDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    /// Accepts full names or single-letter abbreviations, case-insensitively.
    /// `"stay"` is an alias for [`Direction::None`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "south" | "s" => Ok(Direction::South),
            "west" | "w" => Ok(Direction::West),
            "none" | "stay" => Ok(Direction::None),
            _ => Err(MazeError::UndefinedDirection {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_screen_axes() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::South.offset(), (0, 1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::West.offset(), (-1, 0));
        assert_eq!(Direction::None.offset(), (0, 0));
    }

    #[test]
    fn discriminants_round_trip() {
        for d in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::None,
        ] {
            assert_eq!(Direction::try_from(d as u8).unwrap(), d);
        }
    }

    #[test]
    fn out_of_range_byte_is_undefined() {
        let err = Direction::try_from(5).unwrap_err();
        assert_eq!(
            err,
            MazeError::UndefinedDirection {
                value: "5".to_string()
            }
        );
        assert!(Direction::try_from(u8::MAX).is_err());
    }

    #[test]
    fn parse_names_and_abbreviations() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" w ".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("stay".parse::<Direction>().unwrap(), Direction::None);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(MazeError::UndefinedDirection { .. })
        ));
    }
}
