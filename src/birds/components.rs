//! Birds domain: components carried by a spawned bird for its one flight.

use bevy::prelude::*;

/// Which way a bird crosses the screen. Most fly left-to-right; a quarter
/// of spawns are mirrored and fly the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// One full traversal of the display area.
///
/// The flight owns its own completion: once `elapsed` passes `duration`
/// the bird is despawned, and any frame timers on the entity go with it.
#[derive(Component, Debug)]
pub struct Flight {
    /// World position at takeoff (off-screen).
    pub start: Vec2,
    /// World position at the end of the glide (off-screen, far side).
    pub end: Vec2,
    pub scale: f32,
    pub rotation_degrees: f32,
    pub duration_secs: f32,
    pub elapsed_secs: f32,
    pub direction: FlightDirection,
    finished: bool,
}

impl Flight {
    pub fn new(
        start: Vec2,
        end: Vec2,
        scale: f32,
        rotation_degrees: f32,
        duration_secs: f32,
        direction: FlightDirection,
    ) -> Self {
        Self {
            start,
            end,
            scale,
            rotation_degrees,
            duration_secs,
            elapsed_secs: 0.0,
            direction,
            finished: false,
        }
    }

    /// Advance the flight clock. Returns true exactly once, on the tick
    /// the declared duration elapses.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed_secs += delta_secs;
        if self.elapsed_secs >= self.duration_secs {
            self.finished = true;
            return true;
        }
        false
    }

    /// Normalized progress through the glide, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Current world position along the glide.
    pub fn position(&self) -> Vec2 {
        self.start.lerp(self.end, self.progress())
    }

    /// Opacity ramps in over the first 5% of the flight, then holds at 1.
    pub fn opacity(&self) -> f32 {
        (self.progress() / 0.05).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Marker for a bird built from the toucan template descriptor.
#[derive(Component, Debug)]
pub struct CloneBird;

/// Sprite-sheet bird: a repeating flap timer walks the 8 frames of the
/// selected row by moving the atlas index.
#[derive(Component, Debug)]
pub struct FlapCycle {
    pub timer: Timer,
    /// Atlas index of the row's first frame (`row * cols`).
    pub base_index: usize,
    pub frames_per_row: usize,
    pub frame: usize,
}

impl FlapCycle {
    /// `cycle_secs` is one full pass over the row's frames.
    pub fn new(cycle_secs: f32, row: usize, frames_per_row: usize) -> Self {
        // A row always has at least one frame; manifest validation rejects
        // zero-sized grids upstream.
        let frames_per_row = frames_per_row.max(1);
        Self {
            timer: Timer::from_seconds(cycle_secs / frames_per_row as f32, TimerMode::Repeating),
            base_index: row * frames_per_row,
            frames_per_row,
            frame: 0,
        }
    }

    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1) % self.frames_per_row;
        self.atlas_index()
    }

    pub fn atlas_index(&self) -> usize {
        self.base_index + self.frame
    }
}

/// Frame-sequence bird: a repeating timer swaps the sprite image through
/// an ordered list of still frames, wrapping at the end. Independent of
/// the glide duration.
#[derive(Component, Debug)]
pub struct FrameCycle {
    pub timer: Timer,
    pub frames: Vec<Handle<Image>>,
    pub index: usize,
}

impl FrameCycle {
    pub fn new(interval_secs: f32, frames: Vec<Handle<Image>>) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            frames,
            index: 0,
        }
    }

    /// Step to the next frame, wrapping, and return its handle.
    pub fn advance(&mut self) -> Handle<Image> {
        self.index = (self.index + 1) % self.frames.len();
        self.frames[self.index].clone()
    }
}
