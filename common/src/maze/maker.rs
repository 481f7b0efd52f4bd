pub mod algorithms;

use log::debug;
use rand::{Rng, seq::SliceRandom};
use strum::IntoEnumIterator;

use super::{Coord, Direction, Grid};
use crate::error::MazeError;
use algorithms::backtrack::Backtrack;

/// Carves a perfect maze into a fully walled `grid`, starting from `start`.
/// Afterwards every cell is reachable from every other by exactly one simple
/// path.
pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    rng: &mut R,
) -> Result<(), MazeError> {
    debug_assert!(
        grid.opened_wall_count() == 0,
        "mazes are carved into fully walled grids"
    );

    let mut maker = MazeMaker::new(grid, rng);
    maker.backtrack(start)?;

    debug!(
        "carved {}x{} maze from {}: {} passages",
        grid.rows(),
        grid.cols(),
        start,
        grid.opened_wall_count()
    );
    Ok(())
}

pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut R,
    visited: Vec<bool>,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        let visited = vec![false; grid.cell_count()];
        MazeMaker { grid, rng, visited }
    }

    /// The four sides in a fresh, uniformly random order.
    fn shuffled_sides(&mut self) -> Vec<Direction> {
        let mut sides: Vec<Direction> = Direction::iter().collect();
        sides.shuffle(&mut *self.rng);
        sides
    }

    fn visit_cell(&mut self, cell: Coord) {
        let index = self.grid.index_of(cell);
        self.visited[index] = true;
    }

    fn is_visited(&self, cell: Coord) -> bool {
        self.visited[self.grid.index_of(cell)]
    }

    fn unvisited_neighbor(&self, cell: Coord, side: Direction) -> Option<Coord> {
        self.grid
            .neighbor(cell, side)
            .filter(|&neighbor| !self.is_visited(neighbor))
    }

    fn remove_wall_between(&mut self, cell_1: Coord, cell_2: Coord) -> Result<(), MazeError> {
        self.grid.open_wall(cell_1, cell_2)
    }
}
