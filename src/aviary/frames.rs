//! Aviary domain: the frame-sequence registry.

use bevy::prelude::*;

use super::manifest::BirdManifest;

/// One named bird and its ordered flight frames.
#[derive(Debug)]
pub struct FrameSequence {
    pub name: String,
    pub paths: Vec<String>,
    /// Handles retained from preload so the images stay cached.
    pub handles: Vec<Handle<Image>>,
}

/// Registry of every frame-sequence bird, in manifest order.
#[derive(Resource, Debug, Default)]
pub struct FrameSequences {
    pub sequences: Vec<FrameSequence>,
}

impl FrameSequences {
    pub fn from_manifest(manifest: &BirdManifest) -> Self {
        let sequences = manifest
            .birds
            .iter()
            .map(|(name, paths)| FrameSequence {
                name: name.clone(),
                paths: paths.clone(),
                handles: Vec::new(),
            })
            .collect();
        Self { sequences }
    }

    /// Fire-and-forget image fetch for every frame of every bird, to warm
    /// the asset cache. Individual load failures are ignored; the affected
    /// frame simply renders blank if it is ever shown.
    pub fn preload(&mut self, asset_server: &AssetServer) {
        for sequence in &mut self.sequences {
            sequence.handles = sequence
                .paths
                .iter()
                .map(|path| asset_server.load(path.clone()))
                .collect();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn get(&self, index: usize) -> Option<&FrameSequence> {
        self.sequences.get(index)
    }
}
