// Grid:
pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLS: usize = 16;
pub const DEFAULT_CELL_SIZE: f32 = 40.0; // Pixels.
pub const MAX_CELLS: usize = 1 << 24;
pub const MAX_CANVAS_SIDE: f32 = 16384.0; // Pixels.

// Animation:
pub const SEARCH_INTERVAL_MILLIS: u64 = 100; // One frontier pop per interval.
pub const REPLAY_STEP_PIXELS: f32 = 15.0; // Roughly how far the path advances per frame.

// Stroke widths, in pixels.
pub const WALL_WIDTH: f32 = 2.0;
pub const FRONTIER_WIDTH: f32 = 5.0;
pub const PATH_WIDTH: f32 = 10.0;
