//! Birds domain: motion tuning data.
//!
//! Every sampling range lives here. The defaults are the reference
//! behavior; `assets/data/motion.ron` may override them and is entirely
//! optional.

use bevy::prelude::*;
use rand::Rng;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const TUNING_PATH: &str = "assets/data/motion.ron";

/// An inclusive sampling range.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-kind sampling ranges; the kinds differ only slightly.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct KindTuning {
    pub scale: Span,
    pub duration_secs: Span,
}

/// Click-burst behavior.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClickTuning {
    /// Birds per click.
    pub burst: u32,
    /// Click height is clamped to this viewport-percentage band.
    pub min_percent: f32,
    pub max_percent: f32,
    /// Per-bird jitter around the clamped height, symmetric.
    pub jitter_percent: f32,
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Vertical offset at takeoff, px (screen-down positive).
    pub vertical_start_px: Span,
    /// Vertical offset at the end of the glide, px.
    pub vertical_end_px: Span,
    pub rotation_degrees: Span,
    /// Vertical placement band, percent of viewport height from the top.
    pub top_percent: Span,
    /// Probability a spawn flies right-to-left.
    pub rtl_chance: f64,
    pub clone: KindTuning,
    pub sheet: KindTuning,
    pub frame: KindTuning,
    /// Sheet birds: seconds for one full 8-frame flap cycle.
    pub flap_cycle_secs: Span,
    /// Frame birds: milliseconds between frame swaps.
    pub frame_interval_ms: Span,
    /// Delay between ambient spawns, milliseconds.
    pub spawn_delay_ms: Span,
    pub click: ClickTuning,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            vertical_start_px: Span::new(-30.0, 30.0),
            vertical_end_px: Span::new(-60.0, 60.0),
            rotation_degrees: Span::new(-5.0, 5.0),
            top_percent: Span::new(10.0, 70.0),
            rtl_chance: 0.25,
            clone: KindTuning {
                scale: Span::new(0.7, 1.3),
                duration_secs: Span::new(10.0, 20.0),
            },
            sheet: KindTuning {
                scale: Span::new(0.8, 1.3),
                duration_secs: Span::new(10.0, 18.0),
            },
            frame: KindTuning {
                scale: Span::new(0.85, 1.35),
                duration_secs: Span::new(10.0, 18.0),
            },
            flap_cycle_secs: Span::new(0.6, 1.0),
            frame_interval_ms: Span::new(70.0, 190.0),
            spawn_delay_ms: Span::new(2000.0, 4000.0),
            click: ClickTuning {
                burst: 3,
                min_percent: 10.0,
                max_percent: 85.0,
                jitter_percent: 3.0,
            },
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `rtl_chance` is a probability and is
/// clamped into [0, 1]; an out-of-range value in the file must not turn
/// into a panic on every spawn tick.
pub(crate) fn parse_motion_tuning(contents: &str) -> Result<MotionTuning, String> {
    let mut tuning: MotionTuning = ron_options()
        .from_str(contents)
        .map_err(|e| format!("parse error: {e}"))?;
    if !(0.0..=1.0).contains(&tuning.rtl_chance) {
        warn!(
            "rtl_chance {} out of range, clamping to [0, 1]",
            tuning.rtl_chance
        );
        tuning.rtl_chance = tuning.rtl_chance.clamp(0.0, 1.0);
    }
    Ok(tuning)
}

/// Replace the default tuning with the data file, when one exists.
pub(crate) fn load_motion_tuning(mut tuning: ResMut<MotionTuning>) {
    let path = Path::new(TUNING_PATH);
    if !path.exists() {
        return;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read {}: {}", TUNING_PATH, e);
            return;
        }
    };

    match parse_motion_tuning(&contents) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("Loaded motion tuning from {}", TUNING_PATH);
        }
        Err(e) => error!("Failed to load {}: {}", TUNING_PATH, e),
    }
}
