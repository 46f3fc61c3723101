use std::fmt;

use super::error::MazeError;
use super::position::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Immutable binary cell field. Dimensions are fixed at construction and the
/// open-cell count is computed once; solvers only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    open_cells: usize,
}

impl Grid {
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        let open_cells = cells.iter().filter(|cell| cell.is_open()).count();
        Self {
            cells,
            width,
            height,
            open_cells,
        }
    }

    /// Builds a grid from a row-major 0/1 matrix (0 = wall, 1 = open).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::Format("empty maze matrix".into()));
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(MazeError::Format(format!(
                    "ragged maze matrix: expected {} columns, got {}",
                    width,
                    row.len()
                )));
            }
            for &value in row {
                cells.push(match value {
                    0 => Cell::Wall,
                    1 => Cell::Open,
                    other => {
                        return Err(MazeError::Format(format!("invalid cell value {}", other)));
                    }
                });
            }
        }
        Ok(Self::from_cells(height, width, cells))
    }

    /// Builds a grid from an ASCII map: `#` is a wall, `.` is open.
    pub fn parse(map: &str) -> Result<Self, MazeError> {
        let rows: Vec<Vec<u8>> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '#' => Ok(0),
                        '.' => Ok(1),
                        other => Err(MazeError::Format(format!("invalid map char {:?}", other))),
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total cell count, walls included.
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    pub fn open_cells(&self) -> usize {
        self.open_cells
    }

    /// False for any out-of-range coordinate.
    pub fn is_open(&self, pos: Position) -> bool {
        pos.row < self.height
            && pos.col < self.width
            && self.cells[pos.to_index(self.width)].is_open()
    }

    /// Open 4-neighbors, enumerated up, down, left, right. The order is
    /// stable; equal-priority solvers rely on it for tie-breaking.
    pub fn neighbors(&self, pos: Position) -> Vec<(Position, Direction)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|&(p, _)| self.is_open(p))
            .collect()
    }

    /// Renders the grid, overlaying `path` cells with `*`.
    pub fn render(&self, path: &[Position]) -> String {
        let on_path: std::collections::HashSet<Position> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                out.push(if on_path.contains(&pos) {
                    '*'
                } else if self.is_open(pos) {
                    '.'
                } else {
                    '#'
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_counts_open_cells_once() {
        let grid = Grid::parse(
            "###
             #.#
             #.#
             ###",
        )
        .unwrap();
        assert_eq!(grid.bounds(), (4, 3));
        assert_eq!(grid.open_cells(), 2);
        assert_eq!(grid.size(), 12);
    }

    #[test]
    fn out_of_range_is_never_open() {
        let grid = Grid::parse("...").unwrap();
        assert!(grid.is_open(Position::new(0, 2)));
        assert!(!grid.is_open(Position::new(0, 3)));
        assert!(!grid.is_open(Position::new(1, 0)));
    }

    #[test]
    fn neighbors_skip_walls_and_keep_order() {
        let grid = Grid::parse(
            ".#.
             ...
             .#.",
        )
        .unwrap();
        let dirs: Vec<Direction> = grid
            .neighbors(Position::new(1, 1))
            .into_iter()
            .map(|(_, dir)| dir)
            .collect();
        // (0,1) and (2,1) are walls, so only the lateral moves remain.
        assert_eq!(dirs, vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn from_rows_rejects_ragged_and_non_binary_input() {
        assert!(matches!(
            Grid::from_rows(&[vec![1, 1], vec![1]]),
            Err(MazeError::Format(_))
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![1, 2]]),
            Err(MazeError::Format(_))
        ));
        assert!(matches!(Grid::from_rows(&[]), Err(MazeError::Format(_))));
    }

    #[test]
    fn render_overlays_path() {
        let grid = Grid::parse("..#").unwrap();
        let rendered = grid.render(&[Position::new(0, 0)]);
        assert_eq!(rendered, "*.#\n");
    }
}
