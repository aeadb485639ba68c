//! Structural checks for carved mazes.

use robot_maze_core::{Coord, Direction};
use std::collections::{HashMap, HashSet, VecDeque};

fn in_bounds(width: i32, height: i32, c: Coord) -> bool {
    c.x() >= 0 && c.x() < width && c.y() >= 0 && c.y() < height
}

fn neighbours(width: i32, height: i32, c: Coord) -> impl Iterator<Item = Coord> {
    Direction::CARDINALS.into_iter().filter_map(move |d| {
        let (dx, dy) = d.offset();
        let n = c.offset(dx, dy);
        in_bounds(width, height, n).then_some(n)
    })
}

/// Replay an ordered carving log and panic on the first cycle-forming open.
///
/// `opened` lists `(cell, from)` pairs in opening order, starting from a
/// grid where only `(0, 0)` is open. Each step must enter an in-bounds,
/// still-blocked cell adjacent to an already-open `from`. At that moment,
/// none of the cell's other neighbours may be open.
pub fn assert_tree_carving(width: i32, height: i32, opened: &[(Coord, Coord)]) {
    let mut open: HashSet<Coord> = HashSet::new();
    open.insert(Coord::ORIGIN);

    for (step, &(cell, from)) in opened.iter().enumerate() {
        assert!(
            in_bounds(width, height, cell),
            "step {step}: {cell} is outside {width}x{height}"
        );
        assert!(
            open.contains(&from),
            "step {step}: entered {cell} from {from}, which is not open"
        );
        assert!(
            neighbours(width, height, from).any(|n| n == cell),
            "step {step}: {cell} is not adjacent to {from}"
        );
        assert!(!open.contains(&cell), "step {step}: {cell} opened twice");
        let others: Vec<Coord> = neighbours(width, height, cell)
            .filter(|&n| n != from && open.contains(&n))
            .collect();
        assert!(
            others.is_empty(),
            "step {step}: opening {cell} from {from} joins open cells {others:?}"
        );
        open.insert(cell);
    }
}

/// Flood fill over passable cells, starting at `(0, 0)`.
///
/// Returns the empty set if the origin itself is not passable.
pub fn reachable_from_origin(
    width: i32,
    height: i32,
    passable: impl Fn(Coord) -> bool,
) -> HashSet<Coord> {
    let mut seen = HashSet::new();
    if !in_bounds(width, height, Coord::ORIGIN) || !passable(Coord::ORIGIN) {
        return seen;
    }
    let mut queue = VecDeque::new();
    seen.insert(Coord::ORIGIN);
    queue.push_back(Coord::ORIGIN);
    while let Some(c) = queue.pop_front() {
        for n in neighbours(width, height, c) {
            if passable(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Directions leading from `(0, 0)` to `target` through a carving log.
///
/// Follows `from` links back from `target` to the origin. Returns `None`
/// if `target` was never opened.
pub fn path_through_carving(opened: &[(Coord, Coord)], target: Coord) -> Option<Vec<Direction>> {
    let parent: HashMap<Coord, Coord> = opened.iter().copied().collect();
    let mut path = Vec::new();
    let mut at = target;
    while at != Coord::ORIGIN {
        let from = *parent.get(&at)?;
        let step = Direction::CARDINALS.into_iter().find(|d| {
            let (dx, dy) = d.offset();
            from.offset(dx, dy) == at
        })?;
        path.push(step);
        at = from;
    }
    path.reverse();
    Some(path)
}
