use log::error;
use macroquad::prelude::*;

use client::run::{run_maze_loop, window_size};
use common::config::Config;

fn window_conf() -> Conf {
    // The window opens before `main` runs, so a bad config falls back to
    // defaults here and is reported once logging is up.
    let config = Config::from_env().unwrap_or_default();
    let (window_width, window_height) = window_size(&config);

    Conf {
        window_title: "Ariadne".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}; using default settings");
            Config::default()
        }
    };

    run_maze_loop(config).await;
}
