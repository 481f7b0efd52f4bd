pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod maze;
pub mod session;
pub mod solver;
pub mod time;

// Re-exported so front ends can name the pixel type the surface is drawn with.
pub use glam;

#[cfg(test)]
mod test_helpers;
