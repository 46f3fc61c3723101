pub mod builder;
mod error;
mod grid;
mod io;
mod position;

pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use io::{MazeFile, SideAnchor, parse_maze};
pub use position::{Direction, Position};
