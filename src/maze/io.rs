//! Parser for the persisted maze text format: five metadata lines followed by
//! a nested list-of-integers matrix (rows outer, 0 = wall, 1 = open).
//!
//! The header width/height record the size that was *requested* from the
//! generator, which coerces dimensions to odd after the header is written, so
//! they are not cross-checked against the matrix.

use super::error::MazeError;
use super::grid::Grid;

/// A border-relative opening: `side` 0-3 (bottom, right, left, top) and a
/// 0.0-1.0 position along that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideAnchor {
    pub side: u8,
    pub relative: f64,
}

#[derive(Debug, Clone)]
pub struct MazeFile {
    pub algorithm: String,
    pub width: usize,
    pub height: usize,
    pub start: SideAnchor,
    pub end: SideAnchor,
    pub grid: Grid,
}

pub fn parse_maze(text: &str) -> Result<MazeFile, MazeError> {
    let mut lines = text.lines();
    let mut header = |key: &str| -> Result<String, MazeError> {
        let line = lines
            .next()
            .ok_or_else(|| MazeError::Format(format!("missing `{key}` header line")))?;
        line.strip_prefix(key)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(|rest| rest.trim().to_string())
            .ok_or_else(|| MazeError::Format(format!("expected `{key}:` header, got {line:?}")))
    };

    let algorithm = header("algorithm")?;
    let width = parse_int(&header("width")?)?;
    let height = parse_int(&header("height")?)?;
    let start = parse_anchor(&header("start")?)?;
    let end = parse_anchor(&header("end")?)?;

    let body: String = lines.collect::<Vec<_>>().join("\n");
    let grid = Grid::from_rows(&parse_matrix(&body)?)?;

    Ok(MazeFile {
        algorithm,
        width,
        height,
        start,
        end,
        grid,
    })
}

fn parse_int(value: &str) -> Result<usize, MazeError> {
    value
        .parse()
        .map_err(|_| MazeError::Format(format!("invalid integer {value:?}")))
}

/// Parses `side <int>, relative <float>`.
fn parse_anchor(value: &str) -> Result<SideAnchor, MazeError> {
    let malformed = || MazeError::Format(format!("invalid anchor {value:?}"));
    let (side_part, rel_part) = value.split_once(',').ok_or_else(malformed)?;
    let side = side_part
        .trim()
        .strip_prefix("side")
        .ok_or_else(malformed)?
        .trim()
        .parse()
        .map_err(|_| malformed())?;
    let relative = rel_part
        .trim()
        .strip_prefix("relative")
        .ok_or_else(malformed)?
        .trim()
        .parse()
        .map_err(|_| malformed())?;
    Ok(SideAnchor { side, relative })
}

fn parse_matrix(text: &str) -> Result<Vec<Vec<u8>>, MazeError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut depth = 0u32;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '[' => {
                depth += 1;
                if depth > 2 {
                    return Err(MazeError::Format("matrix nested deeper than rows".into()));
                }
            }
            ']' => {
                if depth == 0 {
                    return Err(MazeError::Format("unbalanced brackets".into()));
                }
                if depth == 2 {
                    rows.push(std::mem::take(&mut current));
                }
                depth -= 1;
            }
            ',' => {}
            c if c.is_whitespace() => {}
            c if c.is_ascii_digit() => {
                if depth != 2 {
                    return Err(MazeError::Format("cell value outside a row".into()));
                }
                let mut value = c.to_digit(10).unwrap();
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value.saturating_mul(10).saturating_add(digit);
                    chars.next();
                }
                if value > 1 {
                    return Err(MazeError::Format(format!("invalid cell value {value}")));
                }
                current.push(value as u8);
            }
            other => {
                return Err(MazeError::Format(format!(
                    "unexpected {other:?} in maze matrix"
                )));
            }
        }
    }

    if depth != 0 {
        return Err(MazeError::Format("unbalanced brackets".into()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "algorithm: backtracking\n\
                          width: 4\n\
                          height: 4\n\
                          start: side 3, relative 0.5\n\
                          end: side 0, relative 0.5\n\
                          [[0, 1, 0, 0, 0],\n [0, 1, 1, 1, 0],\n [0, 0, 0, 1, 0],\n [0, 1, 1, 1, 0],\n [0, 1, 0, 0, 0]]";

    #[test]
    fn parses_header_and_matrix() {
        let maze = parse_maze(SAMPLE).unwrap();
        assert_eq!(maze.algorithm, "backtracking");
        assert_eq!((maze.width, maze.height), (4, 4));
        assert_eq!(maze.start.side, 3);
        assert_eq!(maze.end.relative, 0.5);
        // Matrix dims come from the matrix itself, not the header.
        assert_eq!(maze.grid.bounds(), (5, 5));
        assert_eq!(maze.grid.open_cells(), 9);
    }

    #[test]
    fn rejects_missing_or_misnamed_header() {
        assert!(matches!(parse_maze(""), Err(MazeError::Format(_))));

        let swapped = SAMPLE.replace("width:", "depth:");
        assert!(matches!(parse_maze(&swapped), Err(MazeError::Format(_))));
    }

    #[test]
    fn rejects_malformed_anchor() {
        let broken = SAMPLE.replace("side 3, relative 0.5", "side three");
        assert!(matches!(parse_maze(&broken), Err(MazeError::Format(_))));
    }

    #[test]
    fn rejects_broken_matrix() {
        for (from, to) in [("]]", "]"), ("[[", "[[2, "), ("[0, 1, 0, 0, 0]", "7")] {
            let broken = SAMPLE.replacen(from, to, 1);
            assert!(
                matches!(parse_maze(&broken), Err(MazeError::Format(_))),
                "{from:?} -> {to:?} should not parse"
            );
        }
    }
}
