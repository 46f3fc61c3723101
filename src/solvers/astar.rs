use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::maze::{Grid, Position};

use super::traits::{SolveResult, Solver};

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    f_score: usize,
    g_score: usize,
    position: Position,
    parent: Option<Position>,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on f, then g, then row/col so the pop order is
        // reproducible. With a consistent heuristic the tie-break carries no
        // meaning beyond determinism of the visited trace.
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.g_score.cmp(&self.g_score))
            .then_with(|| self.position.row.cmp(&other.position.row))
            .then_with(|| self.position.col.cmp(&other.position.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with the Manhattan heuristic, admissible and consistent on 4-connected
/// unit-cost grids, so path length always matches BFS. Coordinates may sit in
/// the heap several times at different costs; a popped coordinate that is
/// already finalized is skipped (lazy deletion). `visited` holds the
/// finalized (popped) coordinates, and a coordinate's parent is the one it
/// was finalized from.
pub struct AStar;

impl Solver for AStar {
    fn solve(&mut self, grid: &Grid, start: Position, goal: Position) -> SolveResult {
        let mut open_set = BinaryHeap::new();
        let mut g_scores: HashMap<Position, usize> = HashMap::from([(start, 0)]);
        let mut parent: HashMap<Position, Option<Position>> = HashMap::new();
        let mut visited: HashSet<Position> = HashSet::new();

        open_set.push(State {
            f_score: start.manhattan_distance(goal),
            g_score: 0,
            position: start,
            parent: None,
        });

        while let Some(State {
            g_score,
            position,
            parent: from,
            ..
        }) = open_set.pop()
        {
            if !visited.insert(position) {
                continue;
            }
            parent.insert(position, from);
            if position == goal {
                break;
            }

            for (neighbor, _) in grid.neighbors(position) {
                let tentative_g = g_score + 1;
                if tentative_g < g_scores.get(&neighbor).copied().unwrap_or(usize::MAX) {
                    g_scores.insert(neighbor, tentative_g);
                    open_set.push(State {
                        f_score: tentative_g + neighbor.manhattan_distance(goal),
                        g_score: tentative_g,
                        position: neighbor,
                        parent: Some(position),
                    });
                }
            }
        }

        // The goal gets a parent entry only when it was popped.
        let reached = parent.contains_key(&goal);
        SolveResult::from_search(&parent, visited, goal, reached)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::builder;
    use crate::solvers::Bfs;
    use crate::solvers::traits::assert_path_valid;

    #[test]
    fn matches_bfs_path_length_on_generated_mazes() {
        for seed in 0..8 {
            let grid = builder::generate(17, 17, seed);
            let (start, goal) = builder::find_entrance_exit(&grid).unwrap();

            let astar = AStar.solve(&grid, start, goal);
            let bfs = Bfs.solve(&grid, start, goal);
            assert_path_valid(&grid, start, goal, &astar);
            assert_eq!(astar.path.len(), bfs.path.len(), "seed {seed}");
        }
    }

    #[test]
    fn heuristic_prunes_the_dead_end_branch() {
        let grid = Grid::parse(
            "#.###
             #.###
             #...#
             #.###
             #.###",
        )
        .unwrap();
        let start = Position::new(0, 1);
        let goal = Position::new(4, 1);
        let result = AStar.solve(&grid, start, goal);
        assert_path_valid(&grid, start, goal, &result);
        assert_eq!(result.path.len(), 5);
        // The lateral branch carries a strictly larger f than anything on the
        // corridor, so it is pushed at most but never finalized.
        for cell in [Position::new(2, 2), Position::new(2, 3)] {
            assert!(!result.path.contains(&cell));
            assert!(!result.visited.contains(&cell));
        }
    }

    #[test]
    fn unreachable_goal_is_a_normal_outcome() {
        let grid = Grid::parse(
            ".#.
             .#.
             .#.",
        )
        .unwrap();
        let result = AStar.solve(&grid, Position::new(0, 0), Position::new(2, 2));
        assert!(!result.reached);
        assert!(result.path.is_empty());
    }
}
