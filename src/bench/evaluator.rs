use crate::maze::{Grid, Position};
use crate::solvers::{SolveResult, Solver};

/// Comparable scoring of one solver run. `efficiency` is `1 - visited/open`:
/// higher means less wasted exploration.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub solver: &'static str,
    pub reached: bool,
    pub visited: usize,
    pub open_cells: usize,
    pub visited_ratio: f64,
    pub efficiency: f64,
    /// Path cell count; `f64::INFINITY` when the goal was not reached.
    pub path_length: f64,
}

impl Metrics {
    pub fn from_result(solver: &'static str, result: &SolveResult, open_cells: usize) -> Self {
        let visited = result.visited.len();
        let visited_ratio = visited as f64 / open_cells.max(1) as f64;
        Self {
            solver,
            reached: result.reached,
            visited,
            open_cells,
            visited_ratio,
            efficiency: 1.0 - visited_ratio,
            path_length: if result.reached {
                result.path.len() as f64
            } else {
                f64::INFINITY
            },
        }
    }
}

/// Runs `solver` once on the maze and scores the trace. Deterministic apart
/// from the solver's own seeded source, if any.
pub fn evaluate(
    grid: &Grid,
    solver: &mut dyn Solver,
    start: Position,
    goal: Position,
) -> Metrics {
    let result = solver.solve(grid, start, goal);
    Metrics::from_result(solver.name(), &result, grid.open_cells())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{AStar, Bfs};

    const CORRIDOR: &str = "###.###
                            ###.###
                            ###.###
                            ###.###
                            ###.###
                            ###.###
                            ###.###";

    #[test]
    fn corridor_ratio_is_exactly_path_over_open() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        let start = Position::new(0, 3);
        let goal = Position::new(6, 3);

        let (mut bfs, mut astar) = (Bfs, AStar);
        for solver in [&mut bfs as &mut dyn Solver, &mut astar] {
            let metrics = evaluate(&grid, solver, start, goal);
            assert!(metrics.reached);
            assert_eq!(metrics.path_length, 7.0);
            assert_eq!(metrics.open_cells, 7);
            assert_eq!(metrics.visited_ratio, 7.0 / 7.0);
            assert_eq!(metrics.efficiency, 0.0);
        }
    }

    #[test]
    fn efficiency_complements_the_ratio() {
        let grid = crate::maze::builder::generate(11, 11, 1);
        let (start, goal) = crate::maze::builder::find_entrance_exit(&grid).unwrap();
        let metrics = evaluate(&grid, &mut Bfs, start, goal);

        assert!(metrics.visited_ratio > 0.0 && metrics.visited_ratio <= 1.0);
        assert_eq!(metrics.efficiency, 1.0 - metrics.visited_ratio);
    }

    #[test]
    fn unreached_goal_scores_an_infinite_path() {
        let grid = Grid::parse(
            ".#.
             .#.
             .#.",
        )
        .unwrap();
        let metrics = evaluate(&grid, &mut Bfs, Position::new(0, 0), Position::new(0, 2));
        assert!(!metrics.reached);
        assert!(metrics.path_length.is_infinite());
        assert!(metrics.efficiency > 0.0);
    }
}
