use log::{error, info};
use macroquad::prelude::*;

use common::{
    config::Config,
    error::MazeError,
    session::{Phase, Session},
    time::{Pace, Ticker},
};

use crate::{
    canvas::{BACKGROUND_COLOR, Canvas},
    controls::{self, Trigger},
};

pub const MARGIN: f32 = 20.0;
pub const HUD_HEIGHT: f32 = 72.0;
const FONT_SIZE: f32 = 20.0;
const TEXT_COLOR: Color = Color::new(0.910, 0.918, 0.929, 1.0);
const ERROR_COLOR: Color = Color::new(0.949, 0.545, 0.510, 1.0);

/// Window size that fits the maze, its margin and the control strip below it.
pub fn window_size(config: &Config) -> (i32, i32) {
    let canvas = config.canvas_size();
    let width = canvas.x + 2.0 * MARGIN;
    let height = canvas.y + 2.0 * MARGIN + HUD_HEIGHT;
    (width.ceil() as i32, height.ceil() as i32)
}

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Ready,
    Failed(String),
}

/// What the status line says about the running animation, if anything.
fn progress(phase: &Phase) -> Option<String> {
    match phase {
        Phase::Idle => None,
        Phase::Searching(search) => Some(format!(
            "Solving with {}: {} cells visited",
            search.strategy(),
            search.visit_count()
        )),
        Phase::Replaying(replay) => Some(format!(
            "Tracing the path: {} frames to go",
            replay.frames_left()
        )),
    }
}

pub struct MazeRunner {
    session: Session,
    canvas: Canvas,
    ticker: Ticker,
    status: Status,
}

impl MazeRunner {
    pub fn new(config: Config) -> Self {
        let size = config.canvas_size();
        MazeRunner {
            canvas: Canvas::new(size.x, size.y),
            session: Session::new(config),
            ticker: Ticker::new(),
            status: Status::Ready,
        }
    }

    fn handle(&mut self, trigger: Trigger) {
        let result = match trigger {
            Trigger::NewMaze => self.session.request_new_maze(&mut self.canvas).map(|()| {
                self.status = Status::Ready;
            }),
            Trigger::Solve(strategy) => {
                self.session
                    .request_solve(strategy, &mut self.canvas)
                    .map(|pace| {
                        self.ticker.schedule(get_time(), pace);
                        self.status = Status::Ready;
                    })
            }
        };

        if let Err(e) = result {
            self.fail(e);
        }
    }

    fn advance(&mut self) {
        let now = get_time();
        if !self.ticker.is_due(now) {
            return;
        }

        match self.session.tick(&mut self.canvas) {
            Ok(pace) => {
                self.ticker.schedule(now, pace);
                if pace == Pace::Idle {
                    self.status = Status::Ready;
                }
            }
            Err(e) => {
                self.ticker.schedule(now, Pace::Idle);
                self.fail(e);
            }
        }
    }

    fn fail(&mut self, e: MazeError) {
        error!("{e}");
        self.status = Status::Failed(e.to_string());
    }

    fn draw(&self) {
        clear_background(BACKGROUND_COLOR);
        self.canvas.draw(MARGIN, MARGIN);

        let hud_top = MARGIN * 2.0 + self.canvas.size().y;
        let (message, color) = match (progress(self.session.phase()), &self.status) {
            (Some(progress), _) => (progress, TEXT_COLOR),
            (None, Status::Ready) => ("Ready.".to_string(), TEXT_COLOR),
            (None, Status::Failed(message)) => (message.clone(), ERROR_COLOR),
        };
        draw_text(&message, MARGIN, hud_top + HUD_HEIGHT - FONT_SIZE, FONT_SIZE, color);
    }

    fn frame(&mut self) {
        let hud_top = MARGIN * 2.0 + self.canvas.size().y;
        let enabled = !self.session.is_busy();
        if let Some(trigger) = controls::poll(vec2(MARGIN, hud_top), enabled) {
            self.handle(trigger);
        }

        self.advance();
        self.draw();
    }
}

pub async fn run_maze_loop(config: Config) {
    let mut runner = MazeRunner::new(config);
    let config = runner.session.config();
    info!(
        "{}x{} maze, {}px cells, solving {} to {}",
        config.rows, config.cols, config.cell_size, config.start, config.goal
    );
    runner.handle(Trigger::NewMaze);

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        runner.frame();

        next_frame().await;
    }
}
