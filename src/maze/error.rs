use thiserror::Error;

/// Structural maze failures. Failing to find a path is never an error; see
/// [`crate::solvers::SolveResult::reached`].
#[derive(Debug, Error)]
pub enum MazeError {
    /// A border row that must carry an opening (entrance or exit) is solid.
    #[error("no open cell in row {row}")]
    MissingOpening { row: usize },

    /// Persisted maze text that cannot be parsed into a grid.
    #[error("malformed maze file: {0}")]
    Format(String),
}
