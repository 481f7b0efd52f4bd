pub mod maker;

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::{constants::MAX_CELLS, error::MazeError};

pub use maker::{MazeMaker, generate};

const WALL_SYMBOL: &str = "██";
const SPACE_SYMBOL: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four sides of a cell. Iteration order is top, bottom, left, right,
/// which is the order breadth-first search expands neighbors in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row and column deltas.
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The side of `from` that faces `to`, if they are 4-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        if !from.is_adjacent(&to) {
            return None;
        }

        Direction::iter().find(|dir| {
            let (dr, dc) = dir.offset();
            from.row.checked_add_signed(dr) == Some(to.row)
                && from.col.checked_add_signed(dc) == Some(to.col)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Cell {
    pub const WALLED: Cell = Cell {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn wall_mut(&mut self, side: Direction) -> &mut bool {
        match side {
            Direction::Top => &mut self.top,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

/// A rows × cols rectangle of cells stored row-major, so the cell at
/// `(row, col)` lives at `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every wall of every cell closed. Either dimension being
    /// zero, or more than [`MAX_CELLS`] cells in total, is rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let cell_count = rows
            .checked_mul(cols)
            .filter(|&count| count > 0 && count <= MAX_CELLS)
            .ok_or(MazeError::InvalidDimensions { rows, cols })?;

        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::WALLED; cell_count],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn check(&self, coord: Coord) -> Result<(), MazeError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "cell coordinates are out of bounds");
        coord.row * self.cols + coord.col
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.index_of(coord)])
        } else {
            None
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|index| self.coord_of(index))
    }

    /// The in-bounds cell on the given side of `coord`, walls ignored.
    pub fn neighbor(&self, coord: Coord, side: Direction) -> Option<Coord> {
        let (dr, dc) = side.offset();
        let row = coord.row.checked_add_signed(dr)?;
        let col = coord.col.checked_add_signed(dc)?;
        let neighbor = Coord::new(row, col);

        self.contains(neighbor).then_some(neighbor)
    }

    /// Whether one can step from `coord` through its `side` into an in-bounds
    /// neighbor.
    pub fn is_open(&self, coord: Coord, side: Direction) -> bool {
        match self.cell(coord) {
            Some(cell) => !cell.has_wall(side) && self.neighbor(coord, side).is_some(),
            None => false,
        }
    }

    /// Clears the wall pair between two 4-adjacent cells.
    pub fn open_wall(&mut self, a: Coord, b: Coord) -> Result<(), MazeError> {
        self.check(a)?;
        self.check(b)?;
        let side = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;

        let index_a = self.index_of(a);
        let index_b = self.index_of(b);
        *self.cells[index_a].wall_mut(side) = false;
        *self.cells[index_b].wall_mut(side.opposite()) = false;

        Ok(())
    }

    /// Number of open wall pairs. Each interior wall is counted once, from
    /// the cell above or to the left of it.
    pub fn opened_wall_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&side| self.is_open(coord, side))
                    .count()
            })
            .sum()
    }

    pub fn log(&self) -> String {
        let height = 2 * self.rows + 1;
        let width = 2 * self.cols + 1;
        let mut blocks = vec![vec![true; width]; height];

        for coord in self.coords() {
            let z = 2 * coord.row + 1;
            let x = 2 * coord.col + 1;
            blocks[z][x] = false;

            if self.is_open(coord, Direction::Right) {
                blocks[z][x + 1] = false;
            }
            if self.is_open(coord, Direction::Bottom) {
                blocks[z + 1][x] = false;
            }
        }

        blocks
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&wall| if wall { WALL_SYMBOL } else { SPACE_SYMBOL })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
