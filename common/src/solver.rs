pub mod search;

use rand::Rng;
use strum::{Display, EnumIter, EnumString};

use crate::{
    error::MazeError,
    maze::{Coord, Grid},
};

pub use search::{Search, SearchStep, Visit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// FIFO frontier; finds a shortest path.
    #[default]
    Bfs,
    /// LIFO frontier with neighbor order reshuffled on every pop; finds some
    /// simple path.
    Dfs,
}

/// Waypoints from the start cell to the goal, each consecutive pair
/// 4-adjacent with no wall between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    waypoints: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(waypoints: Vec<Coord>) -> Self {
        Path { waypoints }
    }

    pub fn waypoints(&self) -> &[Coord] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<Coord> {
        self.waypoints.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.waypoints.last().copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.waypoints.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A finished search: the path found and every cell in the order it came
/// off the frontier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Path,
    pub visits: Vec<Visit>,
}

pub fn solve<R: Rng + ?Sized>(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Path, MazeError> {
    trace(grid, start, goal, strategy, rng).map(|solution| solution.path)
}

/// Runs a search to completion, keeping the visitation order.
pub fn trace<R: Rng + ?Sized>(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Solution, MazeError> {
    let mut search = Search::new(grid, start, goal, strategy)?;
    let mut visits = Vec::new();

    while let Some(step) = search.step(grid, rng) {
        match step {
            SearchStep::Visited(visit) => visits.push(visit),
            SearchStep::Found(visit, path) => {
                visits.push(visit);
                return Ok(Solution { path, visits });
            }
            SearchStep::Exhausted => break,
        }
    }

    Err(MazeError::Unsolvable { start, goal })
}
