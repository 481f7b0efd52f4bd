use std::time::Duration;

/// When the next tick of an animation should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// After a fixed delay (search progress).
    After(Duration),
    /// On the next display refresh (path replay).
    NextFrame,
    /// Nothing is animating.
    Idle,
}

/// Turns [`Pace`] requests into due times on an external monotonic clock,
/// measured in seconds. The caller polls [`Ticker::is_due`] once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ticker {
    due: Option<f64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: f64, pace: Pace) {
        self.due = match pace {
            Pace::After(delay) => Some(now + delay.as_secs_f64()),
            Pace::NextFrame => Some(now),
            Pace::Idle => None,
        };
    }

    pub fn is_due(&self, now: f64) -> bool {
        self.due.is_some_and(|due| now >= due)
    }

    pub fn is_idle(&self) -> bool {
        self.due.is_none()
    }
}
