use std::collections::{HashMap, HashSet};

use crate::maze::{Grid, Position};

/// A maze-solving strategy. Implementations never mutate the grid and must
/// terminate on any finite grid; each documents its own `visited` semantics
/// and termination guarantee.
///
/// `solve` takes `&mut self` because some strategies (the random walk) own a
/// seeded random source that advances across calls.
pub trait Solver {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult;

    fn name(&self) -> &'static str;
}

/// Outcome of one solver invocation. When `reached` is true the path runs
/// from start to goal inclusive over open, 4-adjacent cells; otherwise it is
/// empty and `visited` holds whatever the strategy examined before giving up.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub path: Vec<Position>,
    pub visited: HashSet<Position>,
    pub reached: bool,
}

impl SolveResult {
    pub(crate) fn from_search(
        parent: &HashMap<Position, Option<Position>>,
        visited: HashSet<Position>,
        goal: Position,
        reached: bool,
    ) -> Self {
        let path = if reached {
            reconstruct_path(parent, goal)
        } else {
            Vec::new()
        };
        Self {
            path,
            visited,
            reached,
        }
    }
}

/// Walks the parent map back from `goal` and reverses. The start maps to
/// `None`, terminating the walk.
fn reconstruct_path(parent: &HashMap<Position, Option<Position>>, goal: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(pos) = current {
        path.push(pos);
        current = parent.get(&pos).copied().flatten();
    }
    path.reverse();
    path
}

/// Asserts the path invariant shared by every strategy: endpoints match and
/// consecutive cells are open and 4-adjacent.
#[cfg(test)]
pub(crate) fn assert_path_valid(grid: &Grid, start: Position, goal: Position, result: &SolveResult) {
    assert!(result.reached, "expected the goal to be reached");
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&goal));
    for pair in result.path.windows(2) {
        assert!(grid.is_open(pair[0]) && grid.is_open(pair[1]));
        assert_eq!(pair[0].manhattan_distance(pair[1]), 1, "{pair:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_follows_parents_to_the_root() {
        let parent = HashMap::from([
            (Position::new(0, 0), None),
            (Position::new(1, 0), Some(Position::new(0, 0))),
            (Position::new(2, 0), Some(Position::new(1, 0))),
        ]);
        let path = reconstruct_path(&parent, Position::new(2, 0));
        assert_eq!(
            path,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ]
        );
    }
}
