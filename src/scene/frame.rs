//! Per-frame render packet
//!
//! [`Frame`] is everything a renderer needs to draw once: camera matrices,
//! an ordered draw list and the HUD text. Backends implement [`Renderer`]
//! and stay entirely behind it.

use glam::{Mat4, Vec3};

use super::assets::ModelId;

/// What an entry draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawable {
    /// The environment cube, drawn around the camera
    Skybox,
    /// A registered mesh
    Mesh(ModelId),
}

/// One draw in the frame's list
#[derive(Debug, Clone, Copy)]
pub struct RenderEntry {
    /// Model-to-world transform
    pub transform: Mat4,
    pub drawable: Drawable,
    /// Mirror the environment off the surface
    pub reflect: bool,
    /// Bend the environment through the surface
    pub refract: bool,
}

impl RenderEntry {
    /// Plain mesh entry with no environment sampling
    pub fn mesh(model: ModelId, transform: Mat4) -> Self {
        Self {
            transform,
            drawable: Drawable::Mesh(model),
            reflect: false,
            refract: false,
        }
    }
}

/// One HUD text line, positioned in pixels from the bottom-left
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub color: Vec3,
}

/// Complete description of one rendered frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// World-to-camera matrix
    pub view: Mat4,
    /// Camera-to-clip matrix
    pub projection: Mat4,
    /// Camera position, world space
    pub eye: Vec3,
    /// Projection-view matrix of the shadow-casting light
    pub light_space: Mat4,
    /// Ordered draw list, skybox first
    pub entries: Vec<RenderEntry>,
    /// HUD text drawn over the scene
    pub text: Vec<TextCommand>,
}

/// Anything that can consume a composed frame
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}
