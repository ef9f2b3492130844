//! Core domain: camera and the backdrop scene the other domains draw into.

use bevy::prelude::*;

use crate::parallax::ParallaxLayer;

/// Container entity all spawned birds parent under.
#[derive(Component, Debug)]
pub struct Sky;

/// Marker for backdrop layer entities.
#[derive(Component, Debug)]
pub struct Backdrop;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_scene));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the layered jungle backdrop and the sky container.
///
/// Each layer sits at its own depth so the parallax offset displaces the
/// near foliage more than the distant sky.
fn setup_scene(mut commands: Commands) {
    let layers = [
        ("sky", Color::srgb(0.35, 0.65, 0.85), -300.0, 0.3),
        ("canopy", Color::srgb(0.13, 0.38, 0.22), -200.0, 0.6),
        ("foliage", Color::srgb(0.08, 0.27, 0.15), -100.0, 1.0),
    ];

    for (name, color, z, depth) in layers {
        commands.spawn((
            Backdrop,
            Name::new(name),
            ParallaxLayer::new(depth, Vec2::ZERO),
            Sprite {
                color,
                custom_size: Some(Vec2::new(2400.0, 1400.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, z),
        ));
    }

    commands.spawn((
        Sky,
        Name::new("sky-container"),
        Transform::default(),
        Visibility::default(),
    ));
}
