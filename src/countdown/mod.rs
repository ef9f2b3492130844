//! Countdown domain: a once-a-second countdown to a fixed instant.

mod clock;
mod systems;

#[cfg(test)]
mod tests;

pub use clock::{TARGET_UNIX_MS, format_remaining, remaining_ms};

use bevy::prelude::*;

use crate::countdown::systems::{await_display_font, setup_countdown, tick_countdown};

/// Marker for the countdown display text.
#[derive(Component, Debug)]
pub struct CountdownText;

/// Display font handle plus whether its load has settled (loaded or
/// failed, either way the countdown may start painting).
#[derive(Resource, Debug)]
pub struct CountdownFont {
    pub handle: Handle<Font>,
    pub settled: bool,
}

/// Update cadence and terminal flag for the countdown.
#[derive(Resource, Debug)]
pub struct CountdownState {
    pub timer: Timer,
    pub painted_once: bool,
    pub finished: bool,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
            painted_once: false,
            finished: false,
        }
    }
}

impl CountdownState {
    /// Record a paint of the given remaining span. At or past the target
    /// the state becomes terminal; nothing ever clears the flag, so no
    /// further update is scheduled.
    pub fn record_paint(&mut self, remaining_ms: i64) {
        self.painted_once = true;
        if remaining_ms <= 0 {
            self.finished = true;
        }
    }

    /// Whether the tick systems still do any work.
    pub fn is_active(&self) -> bool {
        !self.finished
    }
}

pub struct CountdownPlugin;

impl Plugin for CountdownPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CountdownState>()
            .add_systems(Startup, setup_countdown)
            .add_systems(Update, (await_display_font, tick_countdown).chain());
    }
}
