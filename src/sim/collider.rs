//! Axis-aligned box collision shape
//!
//! Blocks and the palette collide as axis-aligned boxes projected onto the
//! x/z plane; y is a fixed rendering plane and never enters the tests.
//! `Vec2` values on this plane carry world x in `.x` and world z in `.y`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::clamp;

/// An axis-aligned box on the x/z plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxCollider {
    /// Center in world space (y is carried for rendering only)
    pub center: Vec3,
    /// Half-widths on x and z, both positive
    pub half_extents: Vec2,
}

impl BoxCollider {
    pub fn new(center: Vec3, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box center projected onto the x/z plane
    #[inline]
    pub fn center_xz(&self) -> Vec2 {
        Vec2::new(self.center.x, self.center.z)
    }

    /// Closest point on the box to `point` (per-axis clamp of the offset
    /// into the box extents)
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let offset = point - self.center_xz();
        Vec2::new(
            self.center.x + clamp(offset.x, -self.half_extents.x, self.half_extents.x),
            self.center.z + clamp(offset.y, -self.half_extents.y, self.half_extents.y),
        )
    }

    /// Whether a circle at `center` with `radius` overlaps the box
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        (self.closest_point(center) - center).length() < radius
    }
}
