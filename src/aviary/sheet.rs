//! Aviary domain: sprite sheet descriptor.
//!
//! The descriptor starts not-ready and becomes ready exactly once, after
//! the backing image finishes loading and the per-frame cell size has been
//! derived. A failed load is terminal: one warning, never ready.

use bevy::asset::LoadState;
use bevy::prelude::*;

/// Per-frame cell dimensions: floor-divided from the sheet size.
pub fn cell_size(width: u32, height: u32, cols: u32, rows: u32) -> UVec2 {
    UVec2::new(width / cols, height / rows)
}

#[derive(Resource, Debug)]
pub struct SpriteSheet {
    pub path: String,
    /// Frames per row.
    pub cols: u32,
    /// Bird variants, one per row.
    pub rows: u32,
    pub image: Handle<Image>,
    /// Natural sheet dimensions, valid once ready.
    pub size: UVec2,
    /// Per-frame cell dimensions, valid once ready.
    pub cell: UVec2,
    /// Atlas layout over the grid, built when the image resolves.
    pub layout: Option<Handle<TextureAtlasLayout>>,
    pub ready: bool,
    failed: bool,
}

impl SpriteSheet {
    pub fn new(path: String, cols: u32, rows: u32, image: Handle<Image>) -> Self {
        Self {
            path,
            cols,
            rows,
            image,
            size: UVec2::ZERO,
            cell: UVec2::ZERO,
            layout: None,
            ready: false,
            failed: false,
        }
    }

    pub(crate) fn resolve(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
        self.cell = cell_size(width, height, self.cols, self.rows);
        self.ready = true;
    }
}

/// Poll the sheet image until it loads, then derive cell metrics and the
/// atlas layout. Runs to completion exactly once, success or failure.
pub(crate) fn resolve_sprite_sheet(
    mut sheet: ResMut<SpriteSheet>,
    images: Res<Assets<Image>>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    if sheet.ready || sheet.failed {
        return;
    }

    if let Some(image) = images.get(&sheet.image) {
        let (width, height) = (image.width(), image.height());
        sheet.resolve(width, height);
        let layout = TextureAtlasLayout::from_grid(sheet.cell, sheet.cols, sheet.rows, None, None);
        sheet.layout = Some(layouts.add(layout));
        info!(
            "Sprite sheet ready: {} ({}x{}, cell {}x{})",
            sheet.path, width, height, sheet.cell.x, sheet.cell.y
        );
        return;
    }

    if let Some(LoadState::Failed(_)) = asset_server.get_load_state(sheet.image.id()) {
        warn!("Sprite sheet not found at {}", sheet.path);
        sheet.failed = true;
    }
}
