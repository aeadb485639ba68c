//! The [`Coord`] value type.

use std::fmt;

/// An immutable 2D integer grid coordinate.
///
/// `x` grows eastward and `y` grows southward, so `(0, 0)` is the
/// north-west corner of every grid. Equality and hashing are structural
/// over both components; there is no identity beyond the two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    /// The origin `(0, 0)`: robot start cell and generation root.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column component.
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Row component.
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Return the coordinate displaced by `(dx, dy)`.
    ///
    /// Saturates at the `i32` range instead of overflowing. A saturated
    /// result is never inside a grid whose sides fit in `i32`, so bounds
    /// checks downstream still reject it.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Sum of the components. Generation ranks cells by this value when
    /// choosing a goal.
    pub const fn depth(self) -> i64 {
        self.x as i64 + self.y as i64
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
