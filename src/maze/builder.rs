//! Seed-driven perfect-maze generator.
//!
//! Depth-first carve over odd cell centers: the open cells of the result form
//! a spanning tree, so exactly one simple path exists between any two of
//! them. One entrance is opened on the top row and one exit on the bottom
//! row, each nearest the horizontal center.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::MazeError;
use super::grid::{Cell, Grid};
use super::position::Position;

pub fn ensure_odd(n: usize) -> usize {
    if n % 2 == 1 { n } else { n + 1 }
}

/// Generates a maze. Dimensions are coerced up to the next odd value with a
/// minimum of 5; the same (height, width, seed) triple always yields a
/// bit-identical grid.
pub fn generate(height: usize, width: usize, seed: u64) -> Grid {
    let height = ensure_odd(height.max(5));
    let width = ensure_odd(width.max(5));
    let mut rng = StdRng::seed_from_u64(seed);

    let idx = |row: usize, col: usize| row * width + col;
    let mut cells = vec![Cell::Wall; height * width];
    cells[idx(1, 1)] = Cell::Open;
    let mut stack = vec![(1usize, 1usize)];

    while let Some(&(row, col)) = stack.last() {
        // Unvisited cell centers two steps away, in up/down/left/right order.
        let mut carvable = Vec::with_capacity(4);
        for (dr, dc) in [(-2isize, 0isize), (2, 0), (0, -2), (0, 2)] {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr >= 1
                && nc >= 1
                && (nr as usize) < height - 1
                && (nc as usize) < width - 1
                && cells[idx(nr as usize, nc as usize)] == Cell::Wall
            {
                carvable.push((nr as usize, nc as usize));
            }
        }

        match carvable.is_empty() {
            true => {
                stack.pop();
            }
            false => {
                let (nr, nc) = carvable[rng.random_range(0..carvable.len())];
                cells[idx((row + nr) / 2, (col + nc) / 2)] = Cell::Open;
                cells[idx(nr, nc)] = Cell::Open;
                stack.push((nr, nc));
            }
        }
    }

    let entrance = nearest_open_to_center(&cells, width, 1).unwrap_or(1);
    let exit = nearest_open_to_center(&cells, width, height - 2).unwrap_or(width - 2);
    cells[idx(0, entrance)] = Cell::Open;
    cells[idx(height - 1, exit)] = Cell::Open;

    Grid::from_cells(height, width, cells)
}

/// Open column of `row` nearest `width / 2`; ties go to the smaller column
/// because the scan keeps only strict improvements.
fn nearest_open_to_center(cells: &[Cell], width: usize, row: usize) -> Option<usize> {
    let mid = width / 2;
    let mut best: Option<usize> = None;
    for col in 1..width - 1 {
        if cells[row * width + col].is_open()
            && best.is_none_or(|b| col.abs_diff(mid) < b.abs_diff(mid))
        {
            best = Some(col);
        }
    }
    best
}

/// Locates the entrance (top row) and exit (bottom row). When a row carries
/// several openings the middle one is taken.
pub fn find_entrance_exit(grid: &Grid) -> Result<(Position, Position), MazeError> {
    let bottom_row = grid.height() - 1;
    let open_columns = |row: usize| -> Vec<usize> {
        (0..grid.width())
            .filter(|&col| grid.is_open(Position::new(row, col)))
            .collect()
    };

    let top = open_columns(0);
    if top.is_empty() {
        return Err(MazeError::MissingOpening { row: 0 });
    }
    let bottom = open_columns(bottom_row);
    if bottom.is_empty() {
        return Err(MazeError::MissingOpening { row: bottom_row });
    }

    Ok((
        Position::new(0, top[top.len() / 2]),
        Position::new(bottom_row, bottom[bottom.len() / 2]),
    ))
}
