//! Model registry
//!
//! Renderers load meshes however they like; the scene layer only hands out
//! stable ids for asset paths, deduplicating repeat registrations.

use serde::{Deserialize, Serialize};

/// Stable handle for a registered model path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub usize);

/// Path-keyed model table
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    paths: Vec<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model path, reusing the id of an identical earlier entry
    pub fn register(&mut self, path: &str) -> ModelId {
        if let Some(index) = self.paths.iter().position(|p| p == path) {
            return ModelId(index);
        }
        self.paths.push(path.to_string());
        log::debug!("registered model {} as id {}", path, self.paths.len() - 1);
        ModelId(self.paths.len() - 1)
    }

    /// Path behind an id handed out by [`register`](Self::register)
    pub fn path(&self, id: ModelId) -> Option<&str> {
        self.paths.get(id.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// The fixed model set the scene composes from
#[derive(Debug, Clone, Copy)]
pub struct SceneModels {
    pub ground: ModelId,
    pub star: ModelId,
    pub block: ModelId,
    pub palette_big: ModelId,
    pub palette_small: ModelId,
    pub ball: ModelId,
}

impl SceneModels {
    /// Register the stock asset set
    pub fn register_defaults(registry: &mut ModelRegistry) -> Self {
        Self {
            ground: registry.register("res/models/scene.obj"),
            star: registry.register("res/models/star.obj"),
            block: registry.register("res/models/block.obj"),
            palette_big: registry.register("res/models/palette-big.obj"),
            palette_small: registry.register("res/models/palette-small.obj"),
            ball: registry.register("res/models/ball.obj"),
        }
    }
}
