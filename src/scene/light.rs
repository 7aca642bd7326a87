//! Directional light and its shadow projection

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Scene-wide directional light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Direction the light travels, world space
    pub direction: Vec3,
    /// Diffuse color
    pub color: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -0.4, -0.3),
            color: Vec3::new(1.0, 0.82, 0.63),
        }
    }
}

impl DirectionalLight {
    /// Combined projection-view matrix for shadow mapping: an orthographic
    /// box around the playfield, viewed from fifty units back along the
    /// (unnormalized) light direction.
    pub fn light_space(&self) -> Mat4 {
        let projection = Mat4::orthographic_rh(-100.0, 100.0, -100.0, 100.0, 0.01, 200.0);
        let view = Mat4::look_at_rh(-50.0 * self.direction, Vec3::ZERO, Vec3::Y);
        projection * view
    }
}
