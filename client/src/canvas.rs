use macroquad::prelude::*;

use common::{
    animation::{Stroke, Surface},
    constants::{FRONTIER_WIDTH, PATH_WIDTH, WALL_WIDTH},
    glam,
};

pub const BACKGROUND_COLOR: Color = Color::new(0.125, 0.129, 0.141, 1.0); // #202124
const WALL_COLOR: Color = Color::new(0.910, 0.918, 0.929, 1.0); // #e8eaed
const FRONTIER_COLOR: Color = Color::new(0.925, 0.251, 0.494, 1.0); // #ec407e
const PATH_COLOR: Color = Color::new(0.667, 0.780, 1.0, 1.0); // #aac7ff

/// An offscreen texture that keeps everything drawn on it until cleared, so
/// the search can be painted one stroke per tick.
pub struct Canvas {
    camera: Camera2D,
    size: Vec2,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        let render_target = render_target(width.ceil() as u32, height.ceil() as u32);
        render_target.texture.set_filter(FilterMode::Linear);

        let mut camera = Camera2D {
            render_target: Some(render_target),
            zoom: vec2(2.0 / width, 2.0 / height),
            target: vec2(width / 2.0, height / 2.0),
            ..Default::default()
        };
        camera.zoom.y *= -1.0;

        let canvas = Canvas {
            camera,
            size: vec2(width, height),
        };
        canvas.with_camera(|| clear_background(BACKGROUND_COLOR));
        canvas
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Blits the canvas onto the screen with its top-left corner at `(x, y)`.
    pub fn draw(&self, x: f32, y: f32) {
        let Some(render_target) = &self.camera.render_target else {
            return;
        };

        draw_texture_ex(
            &render_target.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                flip_y: true,
                ..Default::default()
            },
        );
    }

    fn with_camera(&self, draw: impl FnOnce()) {
        push_camera_state();
        set_camera(&self.camera);
        draw();
        pop_camera_state();
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.with_camera(|| clear_background(BACKGROUND_COLOR));
    }

    fn draw_wall_segment(&mut self, from: glam::Vec2, to: glam::Vec2) {
        self.with_camera(|| draw_line(from.x, from.y, to.x, to.y, WALL_WIDTH, WALL_COLOR));
    }

    fn draw_path_segment(&mut self, from: glam::Vec2, to: glam::Vec2, stroke: Stroke) {
        let (thickness, color) = match stroke {
            Stroke::Frontier => (FRONTIER_WIDTH, FRONTIER_COLOR),
            Stroke::Path => (PATH_WIDTH, PATH_COLOR),
        };
        self.with_camera(|| {
            draw_square_capped_line(vec2(from.x, from.y), vec2(to.x, to.y), thickness, color)
        });
    }
}

// Macroquad lines end flush with their endpoints. Pushing both ends out by
// half the thickness closes the gaps at corners between consecutive strokes.
fn draw_square_capped_line(from: Vec2, to: Vec2, thickness: f32, color: Color) {
    let direction = (to - from).normalize_or_zero();
    if direction == Vec2::ZERO {
        let half = thickness / 2.0;
        draw_rectangle(from.x - half, from.y - half, thickness, thickness, color);
        return;
    }

    let overhang = direction * (thickness / 2.0);
    let start = from - overhang;
    let end = to + overhang;
    draw_line(start.x, start.y, end.x, end.y, thickness, color);
}
