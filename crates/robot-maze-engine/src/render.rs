//! Text rendering of a passability grid.
//!
//! Purely observational. The grid is indexed `(x, y)`; the text is
//! row-major, so the transposition to lines of `y` happens here and
//! nowhere else.

use robot_maze_core::Coord;
use robot_maze_space::PassabilityGrid;

/// Character for a passable cell.
pub const OPEN: char = 'o';
/// Character for a blocked cell.
pub const BLOCKED: char = 'x';

/// Render `grid` as one line per row, `o` for open and `x` for blocked.
///
/// Every line, including the last, ends in `'\n'`.
pub fn render(grid: &PassabilityGrid) -> String {
    let width = grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(if grid.passable(Coord::new(x, y)) {
                OPEN
            } else {
                BLOCKED
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use robot_maze_space::new_maze;
    use robot_maze_test_utils::seeded_rng;

    #[test]
    fn fresh_grid_is_all_open() {
        let g = PassabilityGrid::new(3, 2).unwrap();
        assert_eq!(render(&g), "ooo\nooo\n");
    }

    #[test]
    fn two_by_two_maze_has_one_wall() {
        let g = new_maze(2, 2, &mut seeded_rng(0)).unwrap();
        let text = render(&g);
        assert_eq!(text.matches(BLOCKED).count(), 1);
        assert!(text.starts_with(OPEN));
    }

    #[test]
    fn lines_are_rows() {
        let g = new_maze(7, 3, &mut seeded_rng(2)).unwrap();
        let text = render(&g);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 7));
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let open = g.passable(Coord::new(x as i32, y as i32));
                assert_eq!(ch == OPEN, open);
            }
        }
    }
}
