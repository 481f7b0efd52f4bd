use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("a {rows}x{cols} grid is empty or too large")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {coord} is outside a {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("cells {a} and {b} are not 4-adjacent")]
    NotAdjacent { a: Coord, b: Coord },
    #[error("no maze has been generated yet")]
    NoMaze,
    #[error("a solve is already in progress")]
    Busy,
    #[error("no path from {start} to {goal}")]
    Unsolvable { start: Coord, goal: Coord },
}
