//! Skybreak - a Breakout clone under an open sky
//!
//! Core modules:
//! - `sim`: Per-frame game simulation (collision, game state, camera rig)
//! - `scene`: Frame composition handed to the external renderer
//! - `input`: Key-state digestion into per-tick commands
//! - `settings`: User preferences

pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::{Vec2, Vec3};

    /// Playfield half-width on x (side walls at ±25)
    pub const PLAYFIELD_HALF_WIDTH: f32 = 25.0;
    /// Far wall z, behind the block grid
    pub const PLAYFIELD_FAR_Z: f32 = 30.0;
    /// Near wall z, behind the palette; crossing it is a miss
    pub const PLAYFIELD_NEAR_Z: f32 = -30.0;
    /// Width the block grid spans
    pub const SCENE_WIDTH: f32 = 50.0;
    /// Scene depth; the grid sits in its far quarter
    pub const SCENE_HEIGHT: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_START_SPEED: f32 = 20.0;
    /// Serve direction with a slight x drift, normalized at use
    pub const BALL_START_DIRECTION: Vec3 = Vec3::new(0.05, 0.0, 1.0);

    /// Palette defaults
    pub const PALETTE_START: Vec3 = Vec3::new(0.0, 0.0, -25.0);
    pub const PALETTE_BIG_HALF_EXTENTS: Vec2 = Vec2::new(3.0, 0.5);
    pub const PALETTE_SMALL_HALF_EXTENTS: Vec2 = Vec2::new(1.5, 0.5);
    /// Palette target speed (units/s)
    pub const PALETTE_SPEED: f32 = 30.0;
    /// Fraction-per-frame ease toward the palette target
    pub const PALETTE_SMOOTHING: f32 = 0.5;

    /// Block half-extents (full block is 4 x 1)
    pub const BLOCK_HALF_EXTENTS: Vec2 = Vec2::new(2.0, 0.5);
    /// Default grid layout
    pub const GRID_COLUMNS: u32 = 10;
    pub const GRID_ROWS: u32 = 8;

    /// Lives per run
    pub const MAX_LIVES: u8 = 3;
    /// Speed added on each far-wall bounce
    pub const FAR_WALL_SPEED_BONUS: f32 = 2.5;
    /// Speed added at each destroyed-block milestone
    pub const MILESTONE_SPEED_BONUS: f32 = 10.0;
    /// Destroyed-block counts granting the milestone bonus, ascending
    pub const SPEED_MILESTONES: [u32; 2] = [4, 12];

    /// Camera defaults
    pub const CAMERA_START_POS: Vec3 = Vec3::new(0.0, 50.0, -30.0);
    pub const CAMERA_START_PITCH: f32 = -1.15;
    pub const CAMERA_START_YAW: f32 = -4.715;
    /// Fraction-per-frame ease toward camera targets
    pub const CAMERA_SMOOTHING: f32 = 0.05;
    /// Camera target displacement per impact
    pub const CAMERA_NUDGE: f32 = 0.2;
    /// Camera fly speed (units/s)
    pub const CAMERA_SPEED: f32 = 16.0;
}

/// Clamp `x` to `[lo, hi]`
///
/// Callers must pass `lo <= hi`; the result is unspecified otherwise.
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Linear interpolation `(1 - alpha) * a + alpha * b`
///
/// With a fixed per-frame `alpha` this is the exponential ease used for
/// camera and palette motion; the rate depends on frame rate.
#[inline]
pub fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    (1.0 - alpha) * a + alpha * b
}

/// Component-wise [`lerp`] for positions
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, alpha: f32) -> Vec3 {
    Vec3::new(
        lerp(a.x, b.x, alpha),
        lerp(a.y, b.y, alpha),
        lerp(a.z, b.z, alpha),
    )
}
