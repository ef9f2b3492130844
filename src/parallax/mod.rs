//! Parallax domain: pointer/tilt input mapped to a backdrop displacement.
//!
//! The most recent pointer or tilt event wins outright; there is no
//! smoothing and no history. Backdrop layers consume the offset scaled by
//! their own depth.

#[cfg(test)]
mod tests;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

/// Damping divisor for pointer-driven displacement.
const POINTER_FACTOR: f32 = 15.0;
/// Multipliers for the tilt axes (gamma drives x, beta drives y).
const GAMMA_FACTOR: f32 = 1.2;
const BETA_FACTOR: f32 = 0.8;
/// Full stick deflection maps to this many degrees of tilt.
const TILT_RANGE_DEGREES: f32 = 45.0;

/// Current displacement, in logical pixels. Overwritten wholesale by each
/// input event.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ParallaxOffset {
    pub x: f32,
    pub y: f32,
}

/// A backdrop entity displaced by the shared offset.
#[derive(Component, Debug)]
pub struct ParallaxLayer {
    /// How strongly this layer follows the offset (1.0 = full).
    pub depth: f32,
    /// Resting world position the displacement is applied around.
    pub base: Vec2,
}

impl ParallaxLayer {
    pub fn new(depth: f32, base: Vec2) -> Self {
        Self { depth, base }
    }
}

/// Offset from a pointer position within a viewport: centered, then damped.
pub fn pointer_offset(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x - viewport.x / 2.0) / POINTER_FACTOR,
        (cursor.y - viewport.y / 2.0) / POINTER_FACTOR,
    )
}

/// Offset from tilt axes in degrees; absent axes read as zero.
pub fn tilt_offset(gamma: Option<f32>, beta: Option<f32>) -> Vec2 {
    Vec2::new(
        gamma.unwrap_or(0.0) * GAMMA_FACTOR,
        beta.unwrap_or(0.0) * BETA_FACTOR,
    )
}

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParallaxOffset>().add_systems(
            Update,
            (read_pointer_input, read_tilt_input, apply_offset_to_layers).chain(),
        );
    }
}

fn read_pointer_input(
    mut cursor_moved: MessageReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut offset: ResMut<ParallaxOffset>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    // Only the last event of the frame matters.
    if let Some(moved) = cursor_moved.read().last() {
        let next = pointer_offset(moved.position, viewport);
        offset.x = next.x;
        offset.y = next.y;
    }
}

/// Desktop stand-in for device orientation: the left stick acts as the
/// tilt sensor, scaled so full deflection reads as 45 degrees.
fn read_tilt_input(gamepads: Query<&Gamepad>, mut offset: ResMut<ParallaxOffset>) {
    for gamepad in &gamepads {
        let gamma = gamepad
            .get(GamepadAxis::LeftStickX)
            .map(|v| v * TILT_RANGE_DEGREES);
        let beta = gamepad
            .get(GamepadAxis::LeftStickY)
            .map(|v| v * TILT_RANGE_DEGREES);
        if gamma.is_none() && beta.is_none() {
            continue;
        }
        // Ignore a centered stick so it doesn't fight the pointer.
        let next = tilt_offset(gamma, beta);
        if next.length_squared() > 0.01 {
            offset.x = next.x;
            offset.y = next.y;
        }
    }
}

fn apply_offset_to_layers(
    offset: Res<ParallaxOffset>,
    mut layers: Query<(&ParallaxLayer, &mut Transform)>,
) {
    for (layer, mut transform) in &mut layers {
        transform.translation.x = layer.base.x + offset.x * layer.depth;
        // Screen y grows downward, world y grows upward.
        transform.translation.y = layer.base.y - offset.y * layer.depth;
    }
}
