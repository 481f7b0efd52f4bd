use std::collections::VecDeque;

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use strum::IntoEnumIterator;

use super::{Path, Strategy};
use crate::{
    error::MazeError,
    maze::{Coord, Direction, Grid},
};

/// One cell taken off the frontier, with the cell it was first reached from.
/// `from` is `None` only for the start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub cell: Coord,
    pub from: Option<Coord>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    Visited(Visit),
    Found(Visit, Path),
    Exhausted,
}

/// A breadth-first or depth-first search that advances one frontier pop per
/// call to [`Search::step`]. Visitation and predecessor state are flat arrays
/// indexed by `row * cols + col`.
#[derive(Clone, Debug)]
pub struct Search {
    strategy: Strategy,
    start: Coord,
    goal: Coord,
    rows: usize,
    cols: usize,
    frontier: VecDeque<Coord>,
    visited: Vec<bool>,
    parent: Vec<Option<Coord>>,
    visit_count: usize,
    finished: bool,
}

impl Search {
    pub fn new(
        grid: &Grid,
        start: Coord,
        goal: Coord,
        strategy: Strategy,
    ) -> Result<Self, MazeError> {
        grid.check(start)?;
        grid.check(goal)?;

        let mut visited = vec![false; grid.cell_count()];
        visited[grid.index_of(start)] = true;

        Ok(Search {
            strategy,
            start,
            goal,
            rows: grid.rows(),
            cols: grid.cols(),
            frontier: VecDeque::from([start]),
            visited,
            parent: vec![None; grid.cell_count()],
            visit_count: 0,
            finished: false,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn visit_count(&self) -> usize {
        self.visit_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pops one cell and expands it. Returns `None` once the search has
    /// already found the goal or run out of cells.
    ///
    /// # Panics
    ///
    /// If `grid` is not the size of the grid the search was created for.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Option<SearchStep> {
        assert!(
            grid.rows() == self.rows && grid.cols() == self.cols,
            "search over a {}x{} grid stepped with a {}x{} one",
            self.rows,
            self.cols,
            grid.rows(),
            grid.cols()
        );

        if self.finished {
            return None;
        }

        let popped = match self.strategy {
            Strategy::Bfs => self.frontier.pop_front(),
            Strategy::Dfs => self.frontier.pop_back(),
        };
        let Some(cell) = popped else {
            self.finished = true;
            warn!(
                "{} exhausted after {} visits without reaching {}",
                self.strategy, self.visit_count, self.goal
            );
            return Some(SearchStep::Exhausted);
        };

        self.visit_count += 1;
        let visit = Visit {
            cell,
            from: self.parent[self.index_of(cell)],
        };

        if cell == self.goal {
            self.finished = true;
            let path = self.reconstruct_path();
            debug!(
                "{} reached {} after {} visits, path has {} edges",
                self.strategy,
                self.goal,
                self.visit_count,
                path.edge_count()
            );
            return Some(SearchStep::Found(visit, path));
        }

        let mut sides: Vec<Direction> = Direction::iter().collect();
        if self.strategy == Strategy::Dfs {
            sides.shuffle(rng);
        }

        for side in sides {
            if !grid.is_open(cell, side) {
                continue;
            }
            let Some(next) = grid.neighbor(cell, side) else {
                continue;
            };

            let index = self.index_of(next);
            if !self.visited[index] {
                self.visited[index] = true;
                self.parent[index] = Some(cell);
                self.frontier.push_back(next);
            }
        }

        Some(SearchStep::Visited(visit))
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    fn reconstruct_path(&self) -> Path {
        let mut waypoints = vec![self.goal];
        let mut current = self.goal;

        while let Some(previous) = self.parent[self.index_of(current)] {
            waypoints.push(previous);
            current = previous;
        }

        debug_assert_eq!(current, self.start, "predecessor chain ends at the start");
        waypoints.reverse();
        Path::new(waypoints)
    }
}
