use glam::{Vec2, vec2};

use crate::{
    maze::{Coord, Direction, Grid},
    solver::{Path, Visit},
};

/// Which kind of stroke a path segment belongs to. Frontier strokes trace the
/// live search; path strokes replay the solution on top of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Frontier,
    Path,
}

/// Whatever the maze is drawn on. Coordinates are pixels, origin top-left.
pub trait Surface {
    fn clear(&mut self);
    fn draw_wall_segment(&mut self, from: Vec2, to: Vec2);
    fn draw_path_segment(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
}

impl Layout {
    pub fn new(cell_size: f32) -> Self {
        Layout { cell_size }
    }

    pub fn corner(&self, coord: Coord) -> Vec2 {
        vec2(coord.col as f32, coord.row as f32) * self.cell_size
    }

    pub fn center(&self, coord: Coord) -> Vec2 {
        self.corner(coord) + Vec2::splat(self.cell_size / 2.0)
    }

    pub fn canvas_size(&self, rows: usize, cols: usize) -> Vec2 {
        vec2(cols as f32, rows as f32) * self.cell_size
    }
}

/// Clears the surface and draws every closed wall. Shared walls are drawn
/// from both sides.
pub fn draw_maze(grid: &Grid, layout: &Layout, surface: &mut dyn Surface) {
    surface.clear();

    let size = layout.cell_size;
    for coord in grid.coords() {
        let Some(cell) = grid.cell(coord) else {
            continue;
        };
        let top_left = layout.corner(coord);
        let top_right = top_left + vec2(size, 0.0);
        let bottom_right = top_left + vec2(size, size);
        let bottom_left = top_left + vec2(0.0, size);

        for (side, from, to) in [
            (Direction::Top, top_left, top_right),
            (Direction::Right, top_right, bottom_right),
            (Direction::Bottom, bottom_right, bottom_left),
            (Direction::Left, bottom_left, top_left),
        ] {
            if cell.has_wall(side) {
                surface.draw_wall_segment(from, to);
            }
        }
    }
}

/// Draws the frontier stroke joining a visited cell to the cell it was
/// reached from. The start cell has nothing to join.
pub fn draw_visit(visit: &Visit, layout: &Layout, surface: &mut dyn Surface) {
    if let Some(from) = visit.from {
        surface.draw_path_segment(
            layout.center(from),
            layout.center(visit.cell),
            Stroke::Frontier,
        );
    }
}

/// Sub-steps used to sweep a segment: one per `step_pixels` of length,
/// at least one.
pub fn sub_steps(from: Vec2, to: Vec2, step_pixels: f32) -> usize {
    ((from.distance(to) / step_pixels).floor() as usize).max(1)
}

/// Replays a solved path one frame at a time. Each segment between
/// consecutive waypoints is swept in [`sub_steps`] frames; frame `t` of `n`
/// strokes from the segment start to `t / n` of the way along it.
#[derive(Clone, Debug)]
pub struct PathReplay {
    points: Vec<Vec2>,
    step_pixels: f32,
    segment: usize,
    sub_step: usize,
}

impl PathReplay {
    pub fn new(path: &Path, layout: &Layout, step_pixels: f32) -> Self {
        debug_assert!(step_pixels > 0.0, "step length must be positive");

        PathReplay {
            points: path
                .waypoints()
                .iter()
                .map(|&coord| layout.center(coord))
                .collect(),
            step_pixels,
            segment: 0,
            sub_step: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.segment + 1 >= self.points.len()
    }

    /// Frames still to be drawn.
    pub fn frames_left(&self) -> usize {
        if self.is_done() {
            return 0;
        }

        let current = sub_steps(
            self.points[self.segment],
            self.points[self.segment + 1],
            self.step_pixels,
        ) - self.sub_step;
        let rest: usize = self.points[self.segment + 1..]
            .windows(2)
            .map(|pair| sub_steps(pair[0], pair[1], self.step_pixels))
            .sum();

        current + rest
    }

    /// Draws the next frame. Returns `false` once there is nothing left.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> bool {
        if self.is_done() {
            return false;
        }

        let from = self.points[self.segment];
        let to = self.points[self.segment + 1];
        let steps = sub_steps(from, to, self.step_pixels);

        self.sub_step += 1;
        let reached = from.lerp(to, self.sub_step as f32 / steps as f32);
        surface.draw_path_segment(from, reached, Stroke::Path);

        if self.sub_step >= steps {
            self.segment += 1;
            self.sub_step = 0;
        }

        true
    }
}
