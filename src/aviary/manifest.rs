//! Aviary domain: bird asset manifest.
//!
//! The manifest JSON is optional; the built-in reference data below is the
//! contract and the file is a skin over it. A missing or malformed file
//! degrades to the defaults with a warning.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Definition of the sprite sheet asset.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDef {
    /// Path to the sheet image, relative to assets/.
    pub path: String,
    /// Frames per row.
    #[serde(default = "default_cols")]
    pub cols: u32,
    /// Number of bird variants (one per row).
    #[serde(default = "default_rows")]
    pub rows: u32,
}

fn default_cols() -> u32 {
    8
}

fn default_rows() -> u32 {
    2
}

/// The full bird asset manifest: named frame sequences plus the sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct BirdManifest {
    #[serde(default)]
    pub version: u32,
    /// Bird name -> ordered frame image paths. Playback order is list order.
    pub birds: BTreeMap<String, Vec<String>>,
    pub sheet: SheetDef,
}

impl Default for BirdManifest {
    fn default() -> Self {
        let frame_paths = |dir: &str| -> Vec<String> {
            (1..=8).map(|i| format!("birds/{dir}/fly_{i:02}.png")).collect()
        };

        let mut birds = BTreeMap::new();
        birds.insert("bird1".to_string(), frame_paths("bird1"));
        birds.insert("bird2".to_string(), frame_paths("bird2"));

        Self {
            version: 1,
            birds,
            sheet: SheetDef {
                path: "birds/parrots_sheet.png".to_string(),
                cols: default_cols(),
                rows: default_rows(),
            },
        }
    }
}

impl BirdManifest {
    /// Parse a manifest from JSON text. Empty sequences are rejected so a
    /// bad file cannot strip the playback contract.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let manifest: BirdManifest =
            serde_json::from_str(contents).map_err(|e| format!("parse error: {e}"))?;
        if manifest.birds.is_empty() {
            return Err("manifest defines no birds".to_string());
        }
        for (name, frames) in &manifest.birds {
            if frames.is_empty() {
                return Err(format!("bird {name:?} has an empty frame list"));
            }
        }
        // A zero-sized grid would make the per-frame cell division panic
        // once the sheet image resolves.
        if manifest.sheet.cols == 0 || manifest.sheet.rows == 0 {
            return Err(format!(
                "sheet grid {}x{} must have at least one column and row",
                manifest.sheet.cols, manifest.sheet.rows
            ));
        }
        Ok(manifest)
    }

    /// Load the manifest from disk, falling back to the built-in data.
    pub fn load_or_default(path: &str) -> (Self, Option<String>) {
        let manifest_path = Path::new(path);
        if !manifest_path.exists() {
            return (Self::default(), Some(format!("not found at {path}")));
        }
        match fs::read_to_string(manifest_path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(manifest) => (manifest, None),
                Err(e) => (Self::default(), Some(e)),
            },
            Err(e) => (Self::default(), Some(format!("IO error: {e}"))),
        }
    }
}
