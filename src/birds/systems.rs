//! Birds domain: spawn cadence, click bursts, and per-flight bookkeeping.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;
use std::time::Duration;

use crate::aviary::{FrameSequences, SpriteSheet};
use crate::core::Sky;

use super::components::{FlapCycle, Flight, FrameCycle};
use super::motion::{BirdKind, click_top_percent, jittered_percent, sample_motion};
use super::spawn::{
    FlightPaths, ToucanTemplate, build_flight, spawn_clone_bird, spawn_frame_bird,
    spawn_sheet_bird,
};
use super::tuning::MotionTuning;

const TOUCAN_PATH: &str = "birds/toucan.png";

/// The ambient spawn loop's timer. One-shot, re-armed with a fresh random
/// delay after every spawn; it never stops.
#[derive(Resource, Debug)]
pub struct SpawnCadence {
    pub timer: Timer,
}

impl Default for SpawnCadence {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(2.0, TimerMode::Once),
        }
    }
}

impl SpawnCadence {
    pub fn re_arm(&mut self, delay_ms: f32) {
        self.timer.set_duration(Duration::from_secs_f32(delay_ms / 1000.0));
        self.timer.reset();
    }
}

pub(crate) fn load_toucan_template(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(ToucanTemplate {
        image: asset_server.load(TOUCAN_PATH),
        size: Vec2::new(220.0, 160.0),
    });
}

fn viewport_of(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    let window = windows.single().ok()?;
    Some(Vec2::new(window.width(), window.height()))
}

/// Spawn one frame-sequence bird with a random sequence. No-ops (and
/// reports false) when the registry is empty or nothing is preloaded.
fn spawn_one_frame_bird(
    commands: &mut Commands,
    rng: &mut impl Rng,
    sky: Entity,
    sequences: &FrameSequences,
    tuning: &MotionTuning,
    paths: &mut FlightPaths,
    viewport: Vec2,
    top_override: Option<f32>,
) -> bool {
    if sequences.is_empty() {
        return false;
    }
    let Some(sequence) = sequences.get(rng.random_range(0..sequences.len())) else {
        return false;
    };

    let params = sample_motion(rng, tuning, BirdKind::Frame, top_override);
    let flight = build_flight(&params, viewport, paths);
    let interval_secs = params.frame_interval_ms.unwrap_or(100.0) / 1000.0;
    spawn_frame_bird(commands, sky, sequence, interval_secs, flight).is_some()
}

/// The ambient loop: spawn one frame bird, then wait a fresh 2-4 s.
pub(crate) fn tick_spawn_loop(
    time: Res<Time>,
    mut commands: Commands,
    mut cadence: ResMut<SpawnCadence>,
    mut paths: ResMut<FlightPaths>,
    tuning: Res<MotionTuning>,
    sequences: Option<Res<FrameSequences>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sky: Query<Entity, With<Sky>>,
) {
    cadence.timer.tick(time.delta());
    if !cadence.timer.just_finished() {
        return;
    }

    let mut rng = rand::rng();
    // The loop keeps running even when a spawn has nothing to attach to.
    if let (Some(sequences), Some(viewport), Ok(sky)) =
        (sequences, viewport_of(&windows), sky.single())
    {
        spawn_one_frame_bird(
            &mut commands,
            &mut rng,
            sky,
            &sequences,
            &tuning,
            &mut paths,
            viewport,
            None,
        );
    }
    let delay = tuning.spawn_delay_ms.sample(&mut rng);
    cadence.re_arm(delay);
}

/// Click anywhere: a burst of three frame birds at the click height,
/// additive to the ambient loop.
pub(crate) fn click_burst(
    mouse: Res<ButtonInput<MouseButton>>,
    mut commands: Commands,
    mut paths: ResMut<FlightPaths>,
    tuning: Res<MotionTuning>,
    sequences: Option<Res<FrameSequences>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sky: Query<Entity, With<Sky>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (Some(sequences), Ok(sky)) = (sequences, sky.single()) else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let base = click_top_percent(cursor.y, viewport.y, &tuning.click);

    let mut rng = rand::rng();
    for _ in 0..tuning.click.burst {
        let top = jittered_percent(&mut rng, base, &tuning.click);
        spawn_one_frame_bird(
            &mut commands,
            &mut rng,
            sky,
            &sequences,
            &tuning,
            &mut paths,
            viewport,
            Some(top),
        );
    }
}

/// Demo keys: T = toucan clone, B = sheet bird (once the sheet is ready),
/// F = frame bird.
pub(crate) fn demo_spawn_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut paths: ResMut<FlightPaths>,
    tuning: Res<MotionTuning>,
    template: Option<Res<ToucanTemplate>>,
    sheet: Option<Res<SpriteSheet>>,
    sequences: Option<Res<FrameSequences>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sky: Query<Entity, With<Sky>>,
) {
    let any_pressed = [KeyCode::KeyT, KeyCode::KeyB, KeyCode::KeyF]
        .iter()
        .any(|key| keyboard.just_pressed(*key));
    if !any_pressed {
        return;
    }
    let (Some(viewport), Ok(sky)) = (viewport_of(&windows), sky.single()) else {
        return;
    };

    let mut rng = rand::rng();

    if keyboard.just_pressed(KeyCode::KeyT) {
        if let Some(template) = template {
            let params = sample_motion(&mut rng, &tuning, BirdKind::Clone, None);
            let flight = build_flight(&params, viewport, &mut paths);
            spawn_clone_bird(&mut commands, sky, &template, flight);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyB) {
        // Sheet birds wait for the descriptor; silently skipped until then.
        if let Some(sheet) = sheet.filter(|s| s.ready) {
            if let Some(layout) = sheet.layout.clone() {
                let params = sample_motion(&mut rng, &tuning, BirdKind::Sheet, None);
                let flight = build_flight(&params, viewport, &mut paths);
                let row = rng.random_range(0..sheet.rows as usize);
                let flap = params.flap_cycle_secs.unwrap_or(0.8);
                spawn_sheet_bird(&mut commands, sky, &sheet, layout, row, flap, flight);
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyF) {
        if let Some(sequences) = sequences {
            spawn_one_frame_bird(
                &mut commands,
                &mut rng,
                sky,
                &sequences,
                &tuning,
                &mut paths,
                viewport,
                None,
            );
        }
    }
}

/// Advance every flight; move, fade, and finally despawn. The despawn
/// removes the bird's frame timers with it, so no periodic work outlives
/// the flight.
pub(crate) fn advance_flights(
    time: Res<Time>,
    mut commands: Commands,
    mut birds: Query<(Entity, &mut Flight, &mut Transform, &mut Sprite)>,
) {
    for (entity, mut flight, mut transform, mut sprite) in &mut birds {
        if flight.advance(time.delta_secs()) {
            commands.entity(entity).despawn();
            continue;
        }
        let position = flight.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        sprite.color.set_alpha(flight.opacity());
    }
}

/// Walk sheet birds through their row on the flap timer.
pub(crate) fn advance_flap_cycles(
    time: Res<Time>,
    mut birds: Query<(&mut FlapCycle, &mut Sprite)>,
) {
    for (mut flap, mut sprite) in &mut birds {
        flap.timer.tick(time.delta());
        if !flap.timer.just_finished() {
            continue;
        }
        let index = flap.advance();
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = index;
        }
    }
}

/// Swap frame birds to their next still image on the frame timer.
pub(crate) fn advance_frame_cycles(
    time: Res<Time>,
    mut birds: Query<(&mut FrameCycle, &mut Sprite)>,
) {
    for (mut cycle, mut sprite) in &mut birds {
        cycle.timer.tick(time.delta());
        if cycle.timer.just_finished() {
            sprite.image = cycle.advance();
        }
    }
}
