//! Birds domain: the shared randomized-motion sampler.
//!
//! All three bird kinds draw from the same algorithm; only the scale and
//! duration bands differ per kind. Everything samples through an injected
//! `Rng` so tests can drive a seeded generator.

use rand::Rng;

use super::components::FlightDirection;
use super::tuning::{ClickTuning, KindTuning, MotionTuning};

/// Which renderer a spawn uses. Motion-wise they differ only in tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdKind {
    Clone,
    Sheet,
    Frame,
}

/// One spawn's worth of motion parameters, drawn independently per spawn.
#[derive(Debug, Clone, Copy)]
pub struct MotionParams {
    pub vertical_start_px: f32,
    pub vertical_end_px: f32,
    pub scale: f32,
    pub rotation_degrees: f32,
    pub duration_secs: f32,
    /// Placement, percent of viewport height from the top.
    pub top_percent: f32,
    pub direction: FlightDirection,
    /// Sheet birds only: one full flap cycle, seconds.
    pub flap_cycle_secs: Option<f32>,
    /// Frame birds only: per-frame swap interval, milliseconds.
    pub frame_interval_ms: Option<f32>,
}

fn kind_tuning(tuning: &MotionTuning, kind: BirdKind) -> &KindTuning {
    match kind {
        BirdKind::Clone => &tuning.clone,
        BirdKind::Sheet => &tuning.sheet,
        BirdKind::Frame => &tuning.frame,
    }
}

/// Draw a fresh parameter set. `top_override` bypasses the placement band
/// (the click handler supplies its own height).
pub fn sample_motion(
    rng: &mut impl Rng,
    tuning: &MotionTuning,
    kind: BirdKind,
    top_override: Option<f32>,
) -> MotionParams {
    let kt = kind_tuning(tuning, kind);
    let direction = if rng.random_bool(tuning.rtl_chance) {
        FlightDirection::RightToLeft
    } else {
        FlightDirection::LeftToRight
    };

    MotionParams {
        vertical_start_px: tuning.vertical_start_px.sample(rng),
        vertical_end_px: tuning.vertical_end_px.sample(rng),
        scale: kt.scale.sample(rng),
        rotation_degrees: tuning.rotation_degrees.sample(rng),
        duration_secs: kt.duration_secs.sample(rng),
        top_percent: top_override.unwrap_or_else(|| tuning.top_percent.sample(rng)),
        direction,
        flap_cycle_secs: (kind == BirdKind::Sheet).then(|| tuning.flap_cycle_secs.sample(rng)),
        frame_interval_ms: (kind == BirdKind::Frame).then(|| tuning.frame_interval_ms.sample(rng)),
    }
}

/// Map a click's vertical pixel position to a placement percentage,
/// clamped to the click band.
pub fn click_top_percent(click_y: f32, viewport_height: f32, click: &ClickTuning) -> f32 {
    let percent = click_y / viewport_height * 100.0;
    percent.clamp(click.min_percent, click.max_percent)
}

/// Jitter a burst bird's placement around the click height.
pub fn jittered_percent(rng: &mut impl Rng, base: f32, click: &ClickTuning) -> f32 {
    base + rng.random_range(-click.jitter_percent..=click.jitter_percent)
}
