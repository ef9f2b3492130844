//! Countdown domain: display setup and the 1 Hz update loop.

use bevy::asset::LoadState;
use bevy::prelude::*;
use chrono::Utc;

use super::clock::{format_remaining, remaining_ms};
use super::{CountdownFont, CountdownState, CountdownText};

const FONT_PATH: &str = "fonts/display.ttf";

pub(crate) fn setup_countdown(mut commands: Commands, asset_server: Res<AssetServer>) {
    let font = asset_server.load(FONT_PATH);
    commands.insert_resource(CountdownFont {
        handle: font.clone(),
        settled: false,
    });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(0.0),
                top: Val::Px(48.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                CountdownText,
                Text::new(""),
                TextFont {
                    font,
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.98, 0.93, 0.72)),
            ));
        });
}

/// Hold the first paint until the display font resolves, so the text does
/// not jump width when the font swaps in. Best effort: a failed load
/// settles too and the default font is used.
pub(crate) fn await_display_font(asset_server: Res<AssetServer>, mut font: ResMut<CountdownFont>) {
    if font.settled {
        return;
    }
    font.settled = match asset_server.get_load_state(font.handle.id()) {
        Some(LoadState::Loaded) => true,
        Some(LoadState::Failed(_)) => {
            warn!("Display font not found at {}, using default", FONT_PATH);
            true
        }
        Some(_) => false,
        // No state at all means the asset backend can't tell us; proceed.
        None => true,
    };
}

pub(crate) fn tick_countdown(
    time: Res<Time>,
    font: Res<CountdownFont>,
    mut state: ResMut<CountdownState>,
    mut display: Query<&mut Text, With<CountdownText>>,
) {
    if !font.settled || state.finished {
        return;
    }

    // First paint happens immediately once the font settles, then once a
    // second after that.
    state.timer.tick(time.delta());
    if state.painted_once && !state.timer.just_finished() {
        return;
    }

    // Absent display element: nothing to update, not an error.
    let Ok(mut text) = display.single_mut() else {
        return;
    };

    let remaining = remaining_ms(Utc::now().timestamp_millis());
    text.0 = format_remaining(remaining);
    state.record_paint(remaining);

    if state.finished {
        info!("Countdown reached its target");
    }
}
