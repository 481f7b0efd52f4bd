use std::mem;

use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    animation::{Layout, PathReplay, Surface, draw_maze, draw_visit},
    config::Config,
    error::MazeError,
    maze::{Grid, generate},
    solver::{Search, SearchStep, Strategy},
    time::Pace,
};

#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching(Search),
    Replaying(PathReplay),
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// Owns the maze and sequences generation, search animation and path replay.
/// While a solve is animating, both triggers are refused with
/// [`MazeError::Busy`]; they are accepted again once replay has finished.
#[derive(Debug)]
pub struct Session {
    config: Config,
    layout: Layout,
    grid: Option<Grid>,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Session {
            layout: config.layout(),
            config,
            grid: None,
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Replaces the maze with a freshly generated one and draws it.
    pub fn request_new_maze(&mut self, surface: &mut dyn Surface) -> Result<(), MazeError> {
        if self.is_busy() {
            warn!("new maze refused: a solve is still animating");
            return Err(MazeError::Busy);
        }

        let mut grid = Grid::new(self.config.rows, self.config.cols)?;
        generate(&mut grid, self.config.start, &mut self.rng)?;
        draw_maze(&grid, &self.layout, surface);

        info!("new {}x{} maze", grid.rows(), grid.cols());
        self.grid = Some(grid);
        Ok(())
    }

    /// Redraws the maze and starts animating a search from the configured
    /// start to the goal. The returned pace says when to call [`Session::tick`]
    /// first.
    pub fn request_solve(
        &mut self,
        strategy: Strategy,
        surface: &mut dyn Surface,
    ) -> Result<Pace, MazeError> {
        if self.is_busy() {
            warn!("{strategy} solve refused: a solve is still animating");
            return Err(MazeError::Busy);
        }
        let grid = self.grid.as_ref().ok_or(MazeError::NoMaze)?;

        let search = Search::new(grid, self.config.start, self.config.goal, strategy)?;
        draw_maze(grid, &self.layout, surface);

        info!(
            "solving from {} to {} with {strategy}",
            self.config.start, self.config.goal
        );
        self.phase = Phase::Searching(search);
        Ok(Pace::NextFrame)
    }

    /// Advances the current animation by one step.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Result<Pace, MazeError> {
        match mem::take(&mut self.phase) {
            Phase::Idle => Ok(Pace::Idle),
            Phase::Searching(search) => self.advance_search(search, surface),
            Phase::Replaying(replay) => Ok(self.advance_replay(replay, surface)),
        }
    }

    fn advance_search(
        &mut self,
        mut search: Search,
        surface: &mut dyn Surface,
    ) -> Result<Pace, MazeError> {
        let grid = self.grid.as_ref().ok_or(MazeError::NoMaze)?;

        match search.step(grid, &mut self.rng) {
            Some(SearchStep::Visited(visit)) => {
                draw_visit(&visit, &self.layout, surface);
                self.phase = Phase::Searching(search);
                Ok(Pace::After(self.config.search_interval))
            }
            Some(SearchStep::Found(visit, path)) => {
                draw_visit(&visit, &self.layout, surface);
                info!(
                    "{} found a {}-edge path after {} visits",
                    search.strategy(),
                    path.edge_count(),
                    search.visit_count()
                );

                let replay = PathReplay::new(&path, &self.layout, self.config.replay_step_pixels);
                if replay.is_done() {
                    return Ok(Pace::Idle);
                }
                self.phase = Phase::Replaying(replay);
                Ok(Pace::NextFrame)
            }
            Some(SearchStep::Exhausted) | None => Err(MazeError::Unsolvable {
                start: self.config.start,
                goal: self.config.goal,
            }),
        }
    }

    fn advance_replay(&mut self, mut replay: PathReplay, surface: &mut dyn Surface) -> Pace {
        replay.tick(surface);

        if replay.is_done() {
            info!("path replay finished");
            Pace::Idle
        } else {
            self.phase = Phase::Replaying(replay);
            Pace::NextFrame
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::Stroke;
    use crate::maze::Coord;
    use crate::test_helpers::{Drawn, RecordingSurface};

    fn seeded(rows: usize, cols: usize, seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::new(rows, cols)
        }
    }

    fn run_to_idle(session: &mut Session, surface: &mut RecordingSurface) -> Vec<Pace> {
        let mut paces = Vec::new();
        loop {
            let pace = session.tick(surface).expect("a generated maze is solvable");
            paces.push(pace);
            if pace == Pace::Idle {
                return paces;
            }
        }
    }

    #[test]
    fn test_solve_before_maze_is_rejected() {
        let mut session = Session::new(seeded(4, 4, 1));
        let mut surface = RecordingSurface::default();

        assert_eq!(
            session.request_solve(Strategy::Bfs, &mut surface),
            Err(MazeError::NoMaze)
        );
        assert!(!session.is_busy());
        assert!(surface.drawn.is_empty());
    }

    #[test]
    fn test_new_maze_is_drawn() {
        let mut session = Session::new(seeded(5, 5, 2));
        let mut surface = RecordingSurface::default();

        session.request_new_maze(&mut surface).unwrap();

        let grid = session.grid().expect("maze was generated");
        assert_eq!(grid.opened_wall_count(), 24);
        assert_eq!(surface.drawn.first(), Some(&Drawn::Clear));
        assert!(surface.walls().count() > 0);
    }

    #[test]
    fn test_triggers_are_refused_while_solving() {
        let mut session = Session::new(seeded(6, 6, 3));
        let mut surface = RecordingSurface::default();
        session.request_new_maze(&mut surface).unwrap();
        let before = session.grid().cloned();

        assert_eq!(
            session.request_solve(Strategy::Dfs, &mut surface),
            Ok(Pace::NextFrame)
        );
        assert!(session.is_busy());

        assert_eq!(
            session.request_solve(Strategy::Bfs, &mut surface),
            Err(MazeError::Busy)
        );
        assert_eq!(session.request_new_maze(&mut surface), Err(MazeError::Busy));
        assert_eq!(session.grid().cloned(), before);

        run_to_idle(&mut session, &mut surface);
        assert!(!session.is_busy());
        assert!(session.request_new_maze(&mut surface).is_ok());
        assert!(session.request_solve(Strategy::Bfs, &mut surface).is_ok());
    }

    #[test]
    fn test_search_ticks_are_timed_and_replay_ticks_follow_frames() {
        let mut session = Session::new(seeded(8, 8, 4));
        let mut surface = RecordingSurface::default();
        session.request_new_maze(&mut surface).unwrap();
        session.request_solve(Strategy::Bfs, &mut surface).unwrap();

        let paces = run_to_idle(&mut session, &mut surface);
        let interval = Pace::After(Duration::from_millis(100));

        let searching = paces.iter().take_while(|&&pace| pace == interval).count();
        assert!(searching > 0);
        assert!(
            paces[searching..paces.len() - 1]
                .iter()
                .all(|&pace| pace == Pace::NextFrame)
        );
        assert_eq!(paces.last(), Some(&Pace::Idle));
    }

    #[test]
    fn test_path_strokes_come_after_frontier_strokes() {
        let mut session = Session::new(seeded(7, 9, 5));
        let mut surface = RecordingSurface::default();
        session.request_new_maze(&mut surface).unwrap();
        surface.drawn.clear();

        session.request_solve(Strategy::Dfs, &mut surface).unwrap();
        assert_eq!(surface.drawn.first(), Some(&Drawn::Clear));
        run_to_idle(&mut session, &mut surface);

        let strokes: Vec<Stroke> = surface.strokes().map(|(_, _, stroke)| stroke).collect();
        let first_path = strokes
            .iter()
            .position(|&stroke| stroke == Stroke::Path)
            .expect("the path is replayed");
        assert!(first_path > 0);
        assert!(strokes[first_path..].iter().all(|&stroke| stroke == Stroke::Path));

        let layout = *session.layout();
        let goal = layout.center(Coord::new(6, 8));
        assert_eq!(surface.strokes().last().map(|(_, to, _)| to), Some(goal));
    }

    #[test]
    fn test_single_cell_session_finishes_without_replay() {
        let mut session = Session::new(seeded(1, 1, 6));
        let mut surface = RecordingSurface::default();
        session.request_new_maze(&mut surface).unwrap();
        session.request_solve(Strategy::Bfs, &mut surface).unwrap();

        assert_eq!(session.tick(&mut surface), Ok(Pace::Idle));
        assert!(!session.is_busy());
        assert_eq!(surface.strokes().count(), 0);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut session = Session::new(seeded(3, 3, 7));
        let mut surface = RecordingSurface::default();

        assert_eq!(session.tick(&mut surface), Ok(Pace::Idle));
        assert!(surface.drawn.is_empty());
    }
}
