use std::collections::VecDeque;

use glam::Vec2;

use crate::{
    animation::{Stroke, Surface},
    maze::{Coord, Direction, Grid},
    solver::Path,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
    Clear,
    Wall(Vec2, Vec2),
    Path(Vec2, Vec2, Stroke),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub drawn: Vec<Drawn>,
}

impl RecordingSurface {
    pub fn walls(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.drawn.iter().filter_map(|drawn| match drawn {
            Drawn::Wall(from, to) => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (Vec2, Vec2, Stroke)> + '_ {
        self.drawn.iter().filter_map(|drawn| match drawn {
            Drawn::Path(from, to, stroke) => Some((*from, *to, *stroke)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.drawn.push(Drawn::Clear);
    }

    fn draw_wall_segment(&mut self, from: Vec2, to: Vec2) {
        self.drawn.push(Drawn::Wall(from, to));
    }

    fn draw_path_segment(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.drawn.push(Drawn::Path(from, to, stroke));
    }
}

/// Edge distances from `start` through open walls, indexed like the grid.
/// Unreachable cells are `None`.
pub fn distances_from(grid: &Grid, start: Coord) -> Vec<Option<usize>> {
    let mut distances = vec![None; grid.cell_count()];
    let mut queue = VecDeque::from([start]);
    distances[grid.index_of(start)] = Some(0);

    while let Some(cell) = queue.pop_front() {
        let distance = distances[grid.index_of(cell)].unwrap_or_default();
        for side in [
            Direction::Top,
            Direction::Bottom,
            Direction::Left,
            Direction::Right,
        ] {
            if !grid.is_open(cell, side) {
                continue;
            }
            let next = grid.neighbor(cell, side).expect("open sides have a neighbor");
            let index = grid.index_of(next);
            if distances[index].is_none() {
                distances[index] = Some(distance + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

pub fn assert_perfect_maze(grid: &Grid) {
    for coord in grid.coords() {
        for side in [Direction::Right, Direction::Bottom] {
            if let Some(next) = grid.neighbor(coord, side) {
                assert_eq!(
                    grid.is_open(coord, side),
                    grid.is_open(next, side.opposite()),
                    "wall between {coord} and {next} should match on both sides:\n{grid}"
                );
            }
        }
    }

    let reachable = distances_from(grid, Coord::new(0, 0))
        .iter()
        .filter(|distance| distance.is_some())
        .count();
    assert_eq!(
        reachable,
        grid.cell_count(),
        "all cells should be connected:\n{grid}"
    );
    assert_eq!(
        grid.opened_wall_count(),
        grid.cell_count() - 1,
        "a spanning tree has one passage fewer than it has cells:\n{grid}"
    );
}

pub fn assert_valid_path(grid: &Grid, path: &Path, start: Coord, goal: Coord) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));

    for (from, to) in path.segments() {
        let side = Direction::between(from, to)
            .unwrap_or_else(|| panic!("{from} and {to} should be adjacent"));
        assert!(
            grid.is_open(from, side),
            "path should not cross the wall between {from} and {to}"
        );
    }
}
