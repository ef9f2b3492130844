//! Aviary domain: manifest parsing and sheet descriptor tests.

use bevy::prelude::{Handle, UVec2};

use super::{BirdManifest, FrameSequences, SpriteSheet, cell_size};

// -----------------------------------------------------------------------------
// Manifest
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_manifest_matches_reference_data() {
    let manifest = BirdManifest::default();
    assert_eq!(manifest.birds.len(), 2);
    for frames in manifest.birds.values() {
        assert_eq!(frames.len(), 8);
    }
    assert_eq!(manifest.sheet.cols, 8);
    assert_eq!(manifest.sheet.rows, 2);
}

#[test]
fn test_manifest_frame_order_is_playback_order() {
    let manifest = BirdManifest::default();
    let frames = &manifest.birds["bird1"];
    assert!(frames[0].ends_with("fly_01.png"));
    assert!(frames[7].ends_with("fly_08.png"));
}

#[test]
fn test_manifest_parses_from_json() {
    let json = r#"{
        "version": 2,
        "birds": { "macaw": ["birds/macaw/a.png", "birds/macaw/b.png"] },
        "sheet": { "path": "birds/sheet.png" }
    }"#;
    let manifest = BirdManifest::from_json(json).unwrap();
    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.birds["macaw"].len(), 2);
    // cols/rows fall back to the fixed 8x2 grid when omitted.
    assert_eq!(manifest.sheet.cols, 8);
    assert_eq!(manifest.sheet.rows, 2);
}

#[test]
fn test_manifest_rejects_empty_sequences() {
    let json = r#"{ "birds": { "macaw": [] }, "sheet": { "path": "s.png" } }"#;
    assert!(BirdManifest::from_json(json).is_err());

    let json = r#"{ "birds": {}, "sheet": { "path": "s.png" } }"#;
    assert!(BirdManifest::from_json(json).is_err());
}

#[test]
fn test_manifest_rejects_zero_sized_grid() {
    // A zero column or row count would divide by zero when the sheet
    // image resolves; such a file must fall back to the built-in 8x2 grid.
    let json = r#"{
        "birds": { "macaw": ["birds/macaw/a.png"] },
        "sheet": { "path": "s.png", "cols": 0, "rows": 2 }
    }"#;
    assert!(BirdManifest::from_json(json).is_err());

    let json = r#"{
        "birds": { "macaw": ["birds/macaw/a.png"] },
        "sheet": { "path": "s.png", "cols": 8, "rows": 0 }
    }"#;
    assert!(BirdManifest::from_json(json).is_err());
}

#[test]
fn test_missing_manifest_falls_back_to_builtin() {
    let (manifest, reason) = BirdManifest::load_or_default("assets/birds/no-such-file.json");
    assert!(reason.is_some());
    assert_eq!(manifest.birds.len(), BirdManifest::default().birds.len());
}

// -----------------------------------------------------------------------------
// Frame sequence registry
// -----------------------------------------------------------------------------

#[test]
fn test_registry_mirrors_manifest() {
    let registry = FrameSequences::from_manifest(&BirdManifest::default());
    assert_eq!(registry.len(), 2);
    for sequence in &registry.sequences {
        assert!(!sequence.paths.is_empty());
        // Handles only exist after preload.
        assert!(sequence.handles.is_empty());
    }
}

// -----------------------------------------------------------------------------
// Sprite sheet descriptor
// -----------------------------------------------------------------------------

#[test]
fn test_descriptor_starts_not_ready() {
    let sheet = SpriteSheet::new("birds/parrots_sheet.png".into(), 8, 2, Handle::default());
    assert!(!sheet.ready);
    assert!(sheet.layout.is_none());
    assert_eq!(sheet.cell, UVec2::ZERO);
}

#[test]
fn test_resolve_sets_ready_and_floors_cells() {
    let mut sheet = SpriteSheet::new("birds/parrots_sheet.png".into(), 8, 2, Handle::default());
    sheet.resolve(1030, 257);
    assert!(sheet.ready);
    assert_eq!(sheet.size, UVec2::new(1030, 257));
    // floor(1030/8) = 128, floor(257/2) = 128
    assert_eq!(sheet.cell, UVec2::new(128, 128));
}

#[test]
fn test_cell_size_floor_division() {
    assert_eq!(cell_size(1024, 256, 8, 2), UVec2::new(128, 128));
    assert_eq!(cell_size(1030, 257, 8, 2), UVec2::new(128, 128));
    assert_eq!(cell_size(7, 1, 8, 2), UVec2::new(0, 0));
}
