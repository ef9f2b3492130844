//! Aviary domain: bird asset registries.
//!
//! Owns the manifest, the frame-sequence registry (with its cache-warming
//! preload), and the sprite sheet descriptor.

mod frames;
mod manifest;
mod sheet;

#[cfg(test)]
mod tests;

pub use frames::{FrameSequence, FrameSequences};
pub use manifest::{BirdManifest, SheetDef};
pub use sheet::{SpriteSheet, cell_size};

use bevy::prelude::*;

use crate::aviary::sheet::resolve_sprite_sheet;

const MANIFEST_PATH: &str = "assets/birds/manifest.json";

pub struct AviaryPlugin;

impl Plugin for AviaryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_bird_assets)
            .add_systems(Update, resolve_sprite_sheet);
    }
}

/// Read the manifest, preload every frame sequence, and kick off the
/// sprite sheet load.
fn load_bird_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let (manifest, fallback_reason) = BirdManifest::load_or_default(MANIFEST_PATH);
    if let Some(reason) = fallback_reason {
        warn!(
            "Bird manifest unusable ({}), using built-in bird set",
            reason
        );
    }

    let mut sequences = FrameSequences::from_manifest(&manifest);
    sequences.preload(&asset_server);
    info!(
        "Registered {} frame-sequence birds, sheet at {}",
        sequences.len(),
        manifest.sheet.path
    );

    let sheet_image = asset_server.load(manifest.sheet.path.clone());
    commands.insert_resource(SpriteSheet::new(
        manifest.sheet.path.clone(),
        manifest.sheet.cols,
        manifest.sheet.rows,
        sheet_image,
    ));
    commands.insert_resource(sequences);
}
