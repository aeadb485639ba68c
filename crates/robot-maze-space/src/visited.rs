//! Per-run visited marks for maze generation.

use robot_maze_core::Coord;

/// A `width × height` boolean matrix scoped to one generation run.
///
/// A cell is marked when the generator enters it. Marks are never
/// cleared; a fresh run builds a fresh matrix.
#[derive(Clone, Debug)]
pub struct VisitedMarks {
    width: i32,
    height: i32,
    marks: Vec<bool>,
    count: usize,
}

impl VisitedMarks {
    /// Create an all-unmarked matrix. Non-positive dimensions yield an
    /// empty matrix in which nothing can be marked.
    pub fn new(width: i32, height: i32) -> Self {
        let n = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            marks: vec![false; n],
            count: 0,
        }
    }

    /// Mark `c` as visited. Out-of-bounds coordinates are ignored.
    pub fn mark(&mut self, c: Coord) {
        if let Some(i) = self.index(c) {
            if !self.marks[i] {
                self.marks[i] = true;
                self.count += 1;
            }
        }
    }

    /// Whether `c` has been marked. Out-of-bounds coordinates never are.
    pub fn is_marked(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.marks[i])
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.count
    }

    fn index(&self, c: Coord) -> Option<usize> {
        let (x, y) = (c.x(), c.y());
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}
