//! Compares maze-solving strategies on generated grid mazes: each strategy
//! is scored by how much of the open area it explored before reaching the
//! goal (`efficiency = 1 - visited / open`).

pub mod bench;
pub mod maze;
pub mod solvers;
