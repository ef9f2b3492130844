//! Birds domain: the ambient bird spawner.
//!
//! Spawns transient flying birds on a randomized cadence (plus click
//! bursts and demo keys), drives their glide, flap, and frame timers, and
//! despawns each one the moment its flight duration elapses.

mod components;
mod motion;
mod spawn;
mod systems;
mod tuning;


pub use components::{FlapCycle, Flight, FlightDirection, FrameCycle};
pub use motion::{BirdKind, MotionParams, click_top_percent, jittered_percent, sample_motion};
pub use spawn::{FlightPaths, OFFSCREEN_MARGIN, ToucanTemplate, build_flight};
pub use tuning::{ClickTuning, KindTuning, MotionTuning, Span};

use bevy::prelude::*;

use crate::birds::systems::{
    SpawnCadence, advance_flap_cycles, advance_flights, advance_frame_cycles, click_burst,
    demo_spawn_keys, load_toucan_template, tick_spawn_loop,
};
use crate::birds::tuning::load_motion_tuning;

pub struct BirdsPlugin;

impl Plugin for BirdsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<FlightPaths>()
            .init_resource::<SpawnCadence>()
            .add_systems(Startup, (load_motion_tuning, load_toucan_template))
            .add_systems(
                Update,
                (
                    (tick_spawn_loop, click_burst, demo_spawn_keys),
                    (advance_flights, advance_flap_cycles, advance_frame_cycles),
                )
                    .chain(),
            );
    }
}
