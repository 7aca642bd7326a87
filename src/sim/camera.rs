//! Smoothed camera rig
//!
//! The camera never cuts: position and front each ease toward a target at a
//! fixed fraction per frame. Collisions shove the position target around as
//! an impact cue; mouse look and the fly keys move the targets directly.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{clamp, lerp_vec3};

/// Pitch limit, just short of straight up/down
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// World up
const UP: Vec3 = Vec3::Y;

/// Camera state with eased position and view direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Vec3,
    pub position_target: Vec3,
    /// View direction, eased raw between targets (not renormalized)
    pub front: Vec3,
    pub front_target: Vec3,
    /// Euler angles driving the front target, radians
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: CAMERA_START_POS,
            position_target: CAMERA_START_POS,
            front: Vec3::X,
            front_target: Vec3::X,
            pitch: CAMERA_START_PITCH,
            yaw: CAMERA_START_YAW,
        }
    }
}

impl CameraRig {
    /// Front vector for a pitch/yaw pair
    fn front_from_angles(pitch: f32, yaw: f32) -> Vec3 {
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Ease position and front toward their targets (once per frame)
    pub fn update(&mut self) {
        self.position = lerp_vec3(self.position, self.position_target, CAMERA_SMOOTHING);
        self.front = lerp_vec3(self.front, self.front_target, CAMERA_SMOOTHING);
    }

    /// Mouse look; `delta` in radians, already scaled by sensitivity
    pub fn look(&mut self, delta: Vec2) {
        self.yaw += delta.x;
        self.pitch = clamp(self.pitch - delta.y, -MAX_PITCH, MAX_PITCH);
        self.front_target = Self::front_from_angles(self.pitch, self.yaw);
    }

    /// Aim the front target down the current pitch/yaw and restore the
    /// position target (start-of-play transition)
    pub fn aim_from_angles(&mut self) {
        self.front_target = Self::front_from_angles(self.pitch, self.yaw);
        self.position_target = CAMERA_START_POS;
    }

    /// Restore the start angles, then aim (in-game recenter key)
    pub fn recenter(&mut self) {
        self.pitch = CAMERA_START_PITCH;
        self.yaw = CAMERA_START_YAW;
        self.aim_from_angles();
    }

    /// Menu view restore (hard reset); the front target goes back to the
    /// sideways title view, not the play angles
    pub fn reset_view(&mut self) {
        self.pitch = CAMERA_START_PITCH;
        self.yaw = CAMERA_START_YAW;
        self.front_target = Vec3::X;
        self.position_target = CAMERA_START_POS;
    }

    /// Move the position target along the view direction
    pub fn fly_forward(&mut self, dt: f32, sign: f32) {
        self.position_target += sign * dt * CAMERA_SPEED * self.front.normalize_or_zero();
    }

    /// Move the position target along the view's right vector
    pub fn fly_strafe(&mut self, dt: f32, sign: f32) {
        let right = self.front.cross(UP).normalize_or_zero();
        self.position_target += sign * dt * CAMERA_SPEED * right;
    }

    /// Right-handed look-at view matrix for the current eased state
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, UP)
    }
}
