//! Randomized backtracking maze generation.
//!
//! [`MazeGenerator`] carves a [`PassabilityGrid`] with an iterative
//! depth-first traversal:
//!
//! 1. Collect the unvisited in-bounds neighbours of the current cell.
//! 2. Keep only those whose other neighbours (all except the current
//!    cell) are still blocked. Opening such a cell cannot join two
//!    open regions, so no cycle forms.
//! 3. If any remain, pick one uniformly at random, push the current cell,
//!    open and enter the pick.
//! 4. Otherwise pop the stack and continue from there.
//! 5. Stop when there is nothing to pick and the stack is empty.
//!
//! The goal is the first opened cell with maximal `x + y`. Cells that
//! never pass the filter in step 2 stay blocked; generation makes no
//! attempt to cover the whole grid. [`GenerationReport`] records what
//! was opened so callers can measure coverage.
//!
//! The RNG is borrowed, never created here. Feeding the same seeded
//! generator produces the same maze.

use crate::grid::{check_dimensions, PassabilityGrid};
use crate::visited::VisitedMarks;
use rand::Rng;
use robot_maze_core::{Coord, MazeError};
use smallvec::SmallVec;

/// One cell opened during generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenedCell {
    /// The cell that was opened.
    pub cell: Coord,
    /// The open cell it was entered from.
    pub from: Coord,
}

/// Diagnostic record of a single generation run.
///
/// Purely observational: nothing in the grid depends on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Grid width.
    pub width: i32,
    /// Grid height.
    pub height: i32,
    /// Cells opened after the origin, in the order they were opened.
    pub opened: Vec<OpenedCell>,
    /// The goal assigned at the end of the run.
    pub goal: Coord,
    /// Number of loop iterations until termination.
    pub iterations: u64,
    /// Cells left blocked, in row-major order.
    pub unopened: Vec<Coord>,
}

impl GenerationReport {
    /// Number of open cells, including the origin.
    pub fn opened_count(&self) -> usize {
        self.opened.len() + 1
    }

    /// Total cells in the grid.
    pub fn total_cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Fraction of cells opened, in `(0, 1]`.
    pub fn coverage(&self) -> f64 {
        self.opened_count() as f64 / self.total_cells() as f64
    }

    /// `true` if every cell in the grid was opened.
    pub fn is_fully_open(&self) -> bool {
        self.unopened.is_empty()
    }
}

/// A freshly generated grid and the report of the run that carved it.
#[derive(Clone, Debug)]
pub struct GeneratedMaze {
    /// The carved grid, robot at `(0, 0)`, goal assigned.
    pub grid: PassabilityGrid,
    /// Diagnostics for the run.
    pub report: GenerationReport,
}

/// Carves mazes of a fixed size.
///
/// Dimensions are validated once by [`new()`](MazeGenerator::new); each
/// [`generate()`](MazeGenerator::generate) call then builds an entirely
/// new grid, so a grid is never carved twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    width: i32,
    height: i32,
}

impl MazeGenerator {
    /// Create a generator for `width × height` mazes.
    ///
    /// Returns `Err(MazeError::InvalidDimension)` if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    /// Carve a new maze, drawing choices from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedMaze {
        let mut grid = PassabilityGrid::unchecked(self.width, self.height);
        grid.block_all();

        let mut visited = VisitedMarks::new(self.width, self.height);
        let mut stack: Vec<Coord> = Vec::new();
        let mut opened: Vec<OpenedCell> = Vec::new();
        let mut current = Coord::ORIGIN;
        let mut deepest = Coord::ORIGIN;
        let mut iterations: u64 = 0;

        visited.mark(current);

        loop {
            iterations += 1;
            let options = valid_options(&grid, &visited, current);

            if !options.is_empty() {
                let next = options[rng.random_range(0..options.len())];
                stack.push(current);
                grid.open(next);
                visited.mark(next);
                opened.push(OpenedCell {
                    cell: next,
                    from: current,
                });
                current = next;
                if current.depth() > deepest.depth() {
                    deepest = current;
                }
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        grid.set_goal(deepest);

        let unopened: Vec<Coord> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Coord::new(x, y)))
            .filter(|&c| !grid.passable(c))
            .collect();

        log::debug!(
            "generated {}x{} maze: {} cells open, goal {}, {} iterations",
            self.width,
            self.height,
            visited.count(),
            deepest,
            iterations,
        );
        if !unopened.is_empty() {
            log::debug!(
                "generation left {} of {} cells blocked",
                unopened.len(),
                grid.cell_count(),
            );
        }

        GeneratedMaze {
            grid,
            report: GenerationReport {
                width: self.width,
                height: self.height,
                opened,
                goal: deepest,
                iterations,
                unopened,
            },
        }
    }
}

/// Unvisited neighbours of `current` that can be opened without touching
/// any open cell other than `current`.
fn valid_options(
    grid: &PassabilityGrid,
    visited: &VisitedMarks,
    current: Coord,
) -> SmallVec<[Coord; 4]> {
    grid.neighbours(current)
        .into_iter()
        .filter(|&n| !visited.is_marked(n))
        .filter(|&n| {
            grid.neighbours(n)
                .into_iter()
                .all(|m| m == current || !grid.passable(m))
        })
        .collect()
}
