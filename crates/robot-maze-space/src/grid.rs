//! The passability grid: open/blocked cells, robot position, and goal.

use robot_maze_core::{Coord, Direction, MazeError};
use smallvec::SmallVec;

/// A fixed-size matrix of passable/blocked cells with a robot on it.
///
/// Cells are addressed by [`Coord`] with `0 <= x < width` and
/// `0 <= y < height`. `(0, 0)` is always passable and is where the robot
/// starts.
///
/// # Lifecycle
///
/// [`new()`](PassabilityGrid::new) yields the pre-generation state: every
/// cell passable and the goal at the origin. Generation then carves the
/// cells and assigns the goal once. From that point on only the robot
/// position changes, and only through [`move_robot()`](PassabilityGrid::move_robot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassabilityGrid {
    width: i32,
    height: i32,
    /// Row-major: index `y * width + x`.
    cells: Vec<bool>,
    robot: Coord,
    goal: Coord,
}

impl PassabilityGrid {
    /// Create a fully-passable `width × height` grid with the robot at `(0, 0)`.
    ///
    /// Returns `Err(MazeError::InvalidDimension)` if either dimension is
    /// zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use robot_maze_core::Coord;
    /// use robot_maze_space::PassabilityGrid;
    ///
    /// let grid = PassabilityGrid::new(4, 3).unwrap();
    /// assert_eq!(grid.cell_count(), 12);
    /// assert_eq!(grid.robot_position(), Coord::ORIGIN);
    /// assert!(grid.passable(Coord::new(3, 2)));
    /// assert!(!grid.exists(Coord::new(4, 0)));
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;
        Ok(Self::unchecked(width, height))
    }

    /// Pre-generation grid for dimensions the caller has already validated.
    pub(crate) fn unchecked(width: i32, height: i32) -> Self {
        let n = (width.max(1) as usize) * (height.max(1) as usize);
        Self {
            width,
            height,
            cells: vec![true; n],
            robot: Coord::ORIGIN,
            goal: Coord::ORIGIN,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells, passable or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// `true` iff `c` lies inside the grid.
    pub fn exists(&self, c: Coord) -> bool {
        c.x() >= 0 && c.x() < self.width && c.y() >= 0 && c.y() < self.height
    }

    /// `true` iff `c` lies inside the grid and is open.
    pub fn passable(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.cells[i])
    }

    /// The cell reached from `position` by one step in `direction`.
    ///
    /// `Direction::None` yields `position` itself. The result may lie
    /// outside the grid; callers check it with [`exists()`](Self::exists)
    /// or [`passable()`](Self::passable).
    pub fn target_for(&self, position: Coord, direction: Direction) -> Coord {
        let (dx, dy) = direction.offset();
        position.offset(dx, dy)
    }

    /// Move the robot one step in `direction`.
    ///
    /// Returns the new position. Fails with [`MazeError::Impassable`] if
    /// the target is blocked or out of bounds, in which case the robot
    /// does not move.
    pub fn move_robot(&mut self, direction: Direction) -> Result<Coord, MazeError> {
        let target = self.target_for(self.robot, direction);
        if !self.passable(target) {
            return Err(MazeError::Impassable { target });
        }
        if direction == Direction::None {
            log::warn!("robot elected to stay put at {target}");
        }
        self.robot = target;
        Ok(target)
    }

    /// Current robot position.
    pub fn robot_position(&self) -> Coord {
        self.robot
    }

    /// The goal cell assigned by generation.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// `true` iff the robot stands exactly on the goal.
    pub fn at_goal(&self) -> bool {
        self.robot == self.goal
    }

    /// In-bounds 4-connected neighbours of `c`, in N, S, E, W order.
    ///
    /// Passability is not considered.
    pub fn neighbours(&self, c: Coord) -> SmallVec<[Coord; 4]> {
        Direction::CARDINALS
            .iter()
            .map(|&d| self.target_for(c, d))
            .filter(|&n| self.exists(n))
            .collect()
    }

    /// Flat row-major index of `c`, or `None` if it is out of bounds.
    fn index(&self, c: Coord) -> Option<usize> {
        if self.exists(c) {
            Some((c.y() as usize) * (self.width as usize) + (c.x() as usize))
        } else {
            None
        }
    }

    // ── Generation hooks ────────────────────────────────────────

    /// Block every cell except the origin.
    pub(crate) fn block_all(&mut self) {
        self.cells.fill(false);
        self.cells[0] = true;
    }

    /// Open an in-bounds cell. Out-of-bounds coordinates are ignored.
    pub(crate) fn open(&mut self, c: Coord) {
        if let Some(i) = self.index(c) {
            self.cells[i] = true;
        }
    }

    pub(crate) fn set_goal(&mut self, goal: Coord) {
        debug_assert!(self.passable(goal), "goal {goal} must be open");
        self.goal = goal;
    }
}

/// Reject zero or negative grid dimensions.
pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<(), MazeError> {
    if width <= 0 {
        return Err(MazeError::InvalidDimension {
            name: "width",
            value: width,
        });
    }
    if height <= 0 {
        return Err(MazeError::InvalidDimension {
            name: "height",
            value: height,
        });
    }
    Ok(())
}
