//! Scene composition
//!
//! Turns the game state into a flat, renderer-agnostic draw list once per
//! frame. Renderers consume [`Frame`] through the [`Renderer`] trait;
//! nothing in here touches a GPU.

pub mod assets;
pub mod compose;
pub mod frame;
pub mod light;

pub use assets::{ModelId, ModelRegistry, SceneModels};
pub use compose::compose;
pub use frame::{Drawable, Frame, RenderEntry, Renderer, TextCommand};
pub use light::DirectionalLight;
