//! Birds domain: entity construction for the three bird kinds.
//!
//! Every bird is built fresh from shared descriptors (template, sheet,
//! frame registry) plus one sampled parameter set; nothing mutable is
//! shared between instances.

use bevy::prelude::*;

use crate::aviary::{FrameSequence, SpriteSheet};

use super::components::{CloneBird, FlapCycle, Flight, FlightDirection, FrameCycle};
use super::motion::MotionParams;

/// Birds enter and leave this far beyond the viewport edge, px.
pub const OFFSCREEN_MARGIN: f32 = 260.0;
/// Render depth for all birds, in front of the backdrop layers.
const BIRD_Z: f32 = 10.0;
/// Native display size of a frame-sequence bird, px.
const FRAME_BIRD_SIZE: Vec2 = Vec2::new(150.0, 110.0);

/// Shared descriptor the clone kind is built from. The template is data,
/// never a live entity, so instances cannot share mutable state.
#[derive(Resource, Debug)]
pub struct ToucanTemplate {
    pub image: Handle<Image>,
    pub size: Vec2,
}

/// The right-to-left glide path, defined on first use and memoized.
#[derive(Debug, Clone, Copy)]
pub struct RtlGlide {
    /// Extra travel past each viewport edge, px.
    pub margin: f32,
    /// Right-to-left birds render horizontally mirrored.
    pub mirrored: bool,
}

/// Glide path definitions. Left-to-right is the built-in default path;
/// the mirrored variant is created lazily behind an initialize-once flag.
#[derive(Resource, Debug, Default)]
pub struct FlightPaths {
    rtl: Option<RtlGlide>,
}

impl FlightPaths {
    pub fn rtl(&mut self) -> RtlGlide {
        *self.rtl.get_or_insert_with(|| {
            info!("Defining right-to-left glide path");
            RtlGlide {
                margin: OFFSCREEN_MARGIN,
                mirrored: true,
            }
        })
    }

    pub fn rtl_defined(&self) -> bool {
        self.rtl.is_some()
    }
}

/// Build a `Flight` from sampled parameters and the current viewport.
///
/// Placement percent measures down from the top of the viewport; world y
/// grows upward, so both it and the pixel drift offsets flip sign here.
pub fn build_flight(
    params: &MotionParams,
    viewport: Vec2,
    paths: &mut FlightPaths,
) -> Flight {
    let half_w = viewport.x / 2.0;
    let base_y = viewport.y / 2.0 - params.top_percent / 100.0 * viewport.y;

    let (start_x, end_x) = match params.direction {
        FlightDirection::LeftToRight => (-half_w - OFFSCREEN_MARGIN, half_w + OFFSCREEN_MARGIN),
        FlightDirection::RightToLeft => {
            let glide = paths.rtl();
            (half_w + glide.margin, -half_w - glide.margin)
        }
    };

    let start = Vec2::new(start_x, base_y - params.vertical_start_px);
    let end = Vec2::new(end_x, base_y - params.vertical_end_px);

    Flight::new(
        start,
        end,
        params.scale,
        params.rotation_degrees,
        params.duration_secs,
        params.direction,
    )
}

/// Transform for a freshly spawned bird: at the flight start, scaled,
/// tilted, and mirrored when flying right-to-left.
fn takeoff_transform(flight: &Flight) -> Transform {
    let position = flight.position();
    let flip = match flight.direction {
        FlightDirection::LeftToRight => 1.0,
        FlightDirection::RightToLeft => -1.0,
    };
    Transform {
        translation: Vec3::new(position.x, position.y, BIRD_Z),
        rotation: Quat::from_rotation_z(flight.rotation_degrees.to_radians()),
        scale: Vec3::new(flight.scale * flip, flight.scale, 1.0),
    }
}

/// Birds fade in, so frame one renders fully transparent.
fn takeoff_color() -> Color {
    Color::srgba(1.0, 1.0, 1.0, 0.0)
}

pub(crate) fn spawn_clone_bird(
    commands: &mut Commands,
    sky: Entity,
    template: &ToucanTemplate,
    flight: Flight,
) -> Entity {
    let transform = takeoff_transform(&flight);
    commands
        .spawn((
            CloneBird,
            Sprite {
                image: template.image.clone(),
                custom_size: Some(template.size),
                color: takeoff_color(),
                ..default()
            },
            flight,
            transform,
            ChildOf(sky),
        ))
        .id()
}

/// Spawn a sheet bird on the given row. Callers must check `sheet.ready`;
/// the row's frames are selected by atlas index base `row * cols`.
pub(crate) fn spawn_sheet_bird(
    commands: &mut Commands,
    sky: Entity,
    sheet: &SpriteSheet,
    layout: Handle<TextureAtlasLayout>,
    row: usize,
    flap_cycle_secs: f32,
    flight: Flight,
) -> Entity {
    let flap = FlapCycle::new(flap_cycle_secs, row, sheet.cols as usize);
    let transform = takeoff_transform(&flight);
    commands
        .spawn((
            Sprite {
                image: sheet.image.clone(),
                texture_atlas: Some(TextureAtlas {
                    layout,
                    index: flap.atlas_index(),
                }),
                custom_size: Some(sheet.cell.as_vec2()),
                color: takeoff_color(),
                ..default()
            },
            flap,
            flight,
            transform,
            ChildOf(sky),
        ))
        .id()
}

/// Spawn a frame-sequence bird seeded with frame 0 of the sequence.
pub(crate) fn spawn_frame_bird(
    commands: &mut Commands,
    sky: Entity,
    sequence: &FrameSequence,
    frame_interval_secs: f32,
    flight: Flight,
) -> Option<Entity> {
    // Registry entries are validated non-empty, but an un-preloaded
    // sequence has no handles to show.
    let first = sequence.handles.first()?.clone();
    let transform = takeoff_transform(&flight);
    let entity = commands
        .spawn((
            Sprite {
                image: first,
                custom_size: Some(FRAME_BIRD_SIZE),
                color: takeoff_color(),
                ..default()
            },
            FrameCycle::new(frame_interval_secs, sequence.handles.clone()),
            flight,
            transform,
            ChildOf(sky),
        ))
        .id();
    Some(entity)
}
