use rand::Rng;

use super::super::{Coord, Direction, MazeMaker};
use crate::error::MazeError;

pub trait Backtrack {
    fn backtrack(&mut self, start: Coord) -> Result<(), MazeError>;
}

// A cell on the carving path and the sides it has yet to try.
struct Frame {
    cell: Coord,
    sides: Vec<Direction>,
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self, start: Coord) -> Result<(), MazeError> {
        self.grid.check(start)?;

        self.visit_cell(start);
        let sides = self.shuffled_sides();
        let mut stack = vec![Frame { cell: start, sides }];

        while let Some(frame) = stack.last_mut() {
            let curr = frame.cell;
            let Some(side) = frame.sides.pop() else {
                stack.pop();
                continue;
            };

            if let Some(next) = self.unvisited_neighbor(curr, side) {
                self.remove_wall_between(curr, next)?;
                self.visit_cell(next);
                let sides = self.shuffled_sides();
                stack.push(Frame { cell: next, sides });
            }
        }

        Ok(())
    }
}
