use std::{env, str::FromStr, time::Duration};

use glam::Vec2;
use thiserror::Error;

use crate::{
    animation::Layout,
    constants::{
        DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_ROWS, MAX_CANVAS_SIDE, MAX_CELLS,
        REPLAY_STEP_PIXELS, SEARCH_INTERVAL_MILLIS,
    },
    maze::Coord,
};

pub const ROWS_VAR: &str = "MAZE_ROWS";
pub const COLS_VAR: &str = "MAZE_COLS";
pub const CELL_SIZE_VAR: &str = "MAZE_CELL_SIZE";
pub const SEARCH_INTERVAL_VAR: &str = "MAZE_SEARCH_INTERVAL_MS";
pub const REPLAY_STEP_VAR: &str = "MAZE_REPLAY_STEP_PIXELS";
pub const SEED_VAR: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid {expected}")]
    Unparsable {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{key} must be greater than zero")]
    NotPositive { key: &'static str },
    #[error("{rows}x{cols} cells of {cell_size}px make too large a maze")]
    TooLarge {
        rows: usize,
        cols: usize,
        cell_size: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32, // Pixels.
    pub search_interval: Duration,
    pub replay_step_pixels: f32,
    pub seed: Option<u64>,
    pub start: Coord,
    pub goal: Coord,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Config {
    /// Default settings for a rows × cols maze solved from the top-left cell
    /// to the bottom-right one.
    pub fn new(rows: usize, cols: usize) -> Self {
        Config {
            rows,
            cols,
            cell_size: DEFAULT_CELL_SIZE,
            search_interval: Duration::from_millis(SEARCH_INTERVAL_MILLIS),
            replay_step_pixels: REPLAY_STEP_PIXELS,
            seed: None,
            start: Coord::new(0, 0),
            goal: Coord::new(rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }

    /// Reads settings from the process environment, after loading `.env` if
    /// there is one. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rows = parse_var(&lookup, ROWS_VAR, "row count")?.unwrap_or(DEFAULT_ROWS);
        let cols = parse_var(&lookup, COLS_VAR, "column count")?.unwrap_or(DEFAULT_COLS);
        let mut config = Config::new(rows, cols);

        if let Some(cell_size) = parse_var(&lookup, CELL_SIZE_VAR, "pixel size")? {
            config.cell_size = cell_size;
        }
        if let Some(millis) = parse_var(&lookup, SEARCH_INTERVAL_VAR, "millisecond count")? {
            config.search_interval = Duration::from_millis(millis);
        }
        if let Some(pixels) = parse_var(&lookup, REPLAY_STEP_VAR, "pixel length")? {
            config.replay_step_pixels = pixels;
        }
        config.seed = parse_var(&lookup, SEED_VAR, "64-bit seed")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NotPositive { key: ROWS_VAR });
        }
        if self.cols == 0 {
            return Err(ConfigError::NotPositive { key: COLS_VAR });
        }
        if !(self.cell_size > 0.0 && self.cell_size.is_finite()) {
            return Err(ConfigError::NotPositive { key: CELL_SIZE_VAR });
        }
        if !(self.replay_step_pixels > 0.0 && self.replay_step_pixels.is_finite()) {
            return Err(ConfigError::NotPositive {
                key: REPLAY_STEP_VAR,
            });
        }

        let fits_grid = self
            .rows
            .checked_mul(self.cols)
            .is_some_and(|count| count <= MAX_CELLS);
        if !fits_grid || self.canvas_size().max_element() > MAX_CANVAS_SIDE {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.cell_size)
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.layout().canvas_size(self.rows, self.cols)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Unparsable {
            key,
            value,
            expected,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_reference_board() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!((config.rows, config.cols), (16, 16));
        assert_eq!(config.cell_size, 40.0);
        assert_eq!(config.search_interval, Duration::from_millis(100));
        assert_eq!(config.goal, Coord::new(15, 15));
        assert_eq!(config.canvas_size(), Vec2::new(640.0, 640.0));
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ROWS_VAR, "8"),
            (COLS_VAR, " 12 "),
            (CELL_SIZE_VAR, "25.5"),
            (SEARCH_INTERVAL_VAR, "40"),
            (REPLAY_STEP_VAR, "5"),
            (SEED_VAR, "1234"),
        ]))
        .unwrap();

        assert_eq!((config.rows, config.cols), (8, 12));
        assert_eq!(config.goal, Coord::new(7, 11));
        assert_eq!(config.cell_size, 25.5);
        assert_eq!(config.search_interval, Duration::from_millis(40));
        assert_eq!(config.replay_step_pixels, 5.0);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_unparsable_value_is_reported() {
        let result = Config::from_lookup(lookup_from(&[(ROWS_VAR, "lots")]));

        assert_eq!(
            result,
            Err(ConfigError::Unparsable {
                key: ROWS_VAR,
                value: "lots".to_string(),
                expected: "row count",
            })
        );
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[(COLS_VAR, "0")])),
            Err(ConfigError::NotPositive { key: COLS_VAR })
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[(CELL_SIZE_VAR, "0")])),
            Err(ConfigError::NotPositive { key: CELL_SIZE_VAR })
        );
    }

    #[test]
    fn test_oversized_mazes_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[(ROWS_VAR, "100000"), (COLS_VAR, "100000")])),
            Err(ConfigError::TooLarge {
                rows: 100_000,
                cols: 100_000,
                cell_size: 40.0,
            })
        );

        let huge = usize::MAX.to_string();
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ROWS_VAR, &huge), (COLS_VAR, "2")])),
            Err(ConfigError::TooLarge { .. })
        ));

        // Few cells, but too wide a window.
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(COLS_VAR, "20"), (CELL_SIZE_VAR, "1000")])),
            Err(ConfigError::TooLarge { .. })
        ));
        assert!(Config::from_lookup(lookup_from(&[(ROWS_VAR, "400"), (COLS_VAR, "400")])).is_ok());
    }
}
