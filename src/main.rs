mod aviary;
mod birds;
mod core;
mod countdown;
mod parallax;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Jungle Promo".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            core::CorePlugin,
            countdown::CountdownPlugin,
            aviary::AviaryPlugin,
            parallax::ParallaxPlugin,
            birds::BirdsPlugin,
        ))
        .run();
}
