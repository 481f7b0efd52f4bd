use macroquad::prelude::*;
use macroquad::ui::root_ui;

use common::solver::Strategy;

pub const BUTTON_GAP: f32 = 12.0;
const BUTTON_WIDTH: f32 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    NewMaze,
    Solve(Strategy),
}

impl Trigger {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::N => Some(Trigger::NewMaze),
            KeyCode::B => Some(Trigger::Solve(Strategy::Bfs)),
            KeyCode::D => Some(Trigger::Solve(Strategy::Dfs)),
            _ => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            Trigger::NewMaze => "New maze (N)".to_string(),
            Trigger::Solve(strategy) => {
                let name = strategy.to_string().to_uppercase();
                format!("Solve {name} ({})", &name[..1])
            }
        }
    }
}

pub fn triggers() -> [Trigger; 3] {
    [
        Trigger::NewMaze,
        Trigger::Solve(Strategy::Bfs),
        Trigger::Solve(Strategy::Dfs),
    ]
}

/// Keyboard first, then the button row. Buttons are only drawn while the
/// session accepts triggers.
pub fn poll(origin: Vec2, enabled: bool) -> Option<Trigger> {
    if !enabled {
        return None;
    }

    let pressed = get_last_key_pressed().and_then(Trigger::from_key);

    let mut clicked = None;
    for (i, trigger) in triggers().into_iter().enumerate() {
        let position = origin + vec2(i as f32 * (BUTTON_WIDTH + BUTTON_GAP), 0.0);
        if root_ui().button(position, trigger.label().as_str()) {
            clicked = Some(trigger);
        }
    }

    pressed.or(clicked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_triggers() {
        assert_eq!(Trigger::from_key(KeyCode::N), Some(Trigger::NewMaze));
        assert_eq!(
            Trigger::from_key(KeyCode::B),
            Some(Trigger::Solve(Strategy::Bfs))
        );
        assert_eq!(
            Trigger::from_key(KeyCode::D),
            Some(Trigger::Solve(Strategy::Dfs))
        );
        assert_eq!(Trigger::from_key(KeyCode::G), None);
        assert_eq!(Trigger::from_key(KeyCode::Space), None);
    }

    #[test]
    fn labels_name_the_shortcut() {
        assert_eq!(Trigger::NewMaze.label(), "New maze (N)");
        assert_eq!(Trigger::Solve(Strategy::Bfs).label(), "Solve BFS (B)");
        assert_eq!(Trigger::Solve(Strategy::Dfs).label(), "Solve DFS (D)");
    }
}
