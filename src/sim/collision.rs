//! Collision detection and response for the ball
//!
//! Closest-point-on-box tests on the x/z plane, a dominant-axis pick over
//! the four cardinals, and the palette/block bounce rules. The palette is
//! always resolved before the blocks, and at most one block falls per tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collider::BoxCollider;
use super::state::GameState;

/// The four cardinal impact axes on the x/z plane.
///
/// An axis points from the ball center toward the struck box. Ordering
/// matters: the selection scan keeps the first strict improvement, and
/// degenerate contacts (see [`dominant_axis`]) fall back to the first
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionAxis {
    PosZ,
    NegZ,
    NegX,
    PosX,
}

impl CollisionAxis {
    /// All axes in scan order
    pub const ALL: [CollisionAxis; 4] = [
        CollisionAxis::PosZ,
        CollisionAxis::NegZ,
        CollisionAxis::NegX,
        CollisionAxis::PosX,
    ];

    /// Unit vector on the x/z plane (`.y` carries world z)
    #[inline]
    pub fn as_vec(self) -> Vec2 {
        match self {
            CollisionAxis::PosZ => Vec2::new(0.0, 1.0),
            CollisionAxis::NegZ => Vec2::new(0.0, -1.0),
            CollisionAxis::NegX => Vec2::new(-1.0, 0.0),
            CollisionAxis::PosX => Vec2::new(1.0, 0.0),
        }
    }

    /// True when the struck face is a z face
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, CollisionAxis::PosZ | CollisionAxis::NegZ)
    }
}

/// Result of a ball-vs-box check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether an overlap occurred
    pub hit: bool,
    /// Closest point on the box to the ball center
    pub point: Vec2,
    /// Impact axis, ball toward box; meaningful only when `hit`
    pub axis: CollisionAxis,
    /// Overlap depth, radius minus the center distance to `point`
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            axis: CollisionAxis::PosZ,
            penetration: 0.0,
        }
    }
}

/// Dominant impact axis for a ball-center-to-closest-point delta.
///
/// Scans the cardinals in order, keeping the largest strictly positive dot
/// product; equal dots keep the earlier candidate. A zero delta (the ball
/// center exactly on the box surface, e.g. a perfect corner touch) has no
/// positive dot against any cardinal and falls back to +z.
pub fn dominant_axis(delta: Vec2) -> CollisionAxis {
    let dir = delta.normalize_or_zero();
    let mut best = 0.0;
    let mut axis = CollisionAxis::ALL[0];
    for candidate in CollisionAxis::ALL {
        let d = dir.dot(candidate.as_vec());
        if d > best {
            best = d;
            axis = candidate;
        }
    }
    axis
}

/// Check a ball against a box on the x/z plane
pub fn ball_box_collision(ball_pos: Vec3, radius: f32, target: &BoxCollider) -> CollisionResult {
    let center = Vec2::new(ball_pos.x, ball_pos.z);
    let closest = target.closest_point(center);
    let delta = closest - center;
    let distance = delta.length();
    if distance >= radius {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: closest,
        axis: dominant_axis(delta),
        penetration: radius - distance,
    }
}

/// Resolve the palette first, then at most one block
pub fn resolve_collisions(state: &mut GameState) {
    resolve_palette(state);
    resolve_blocks(state);
}

/// Place the ball flush against the struck face, one radius outside
fn push_out(state: &mut GameState, target: &BoxCollider, axis: CollisionAxis) {
    let r = state.ball.radius;
    match axis {
        CollisionAxis::PosZ => {
            state.ball.position.z = target.center.z - (target.half_extents.y + r);
        }
        CollisionAxis::NegZ => {
            state.ball.position.z = target.center.z + (target.half_extents.y + r);
        }
        CollisionAxis::NegX => {
            state.ball.position.x = target.center.x + (target.half_extents.x + r);
        }
        CollisionAxis::PosX => {
            state.ball.position.x = target.center.x - (target.half_extents.x + r);
        }
    }
}

fn resolve_palette(state: &mut GameState) {
    let palette_box = state.palette.as_box();
    let result = ball_box_collision(state.ball.position, state.ball.radius, &palette_box);
    if !result.hit {
        return;
    }

    state.nudge_camera();

    if result.axis.is_vertical() {
        // Always bounce away from the palette, steered by where it was struck
        state.ball.direction.z = 1.0;
        push_out(state, &palette_box, result.axis);
        state.ball.direction.x = (state.ball.position.x - state.palette.position.x)
            / state.palette.half_extents().x;
    } else {
        state.ball.direction.x = -state.ball.direction.x;
        push_out(state, &palette_box, result.axis);
    }
}

fn resolve_blocks(state: &mut GameState) {
    for i in 0..state.blocks.len() {
        if !state.blocks[i].active {
            continue;
        }
        let block_box = state.blocks[i].as_box();
        let result = ball_box_collision(state.ball.position, state.ball.radius, &block_box);
        if !result.hit {
            continue;
        }

        state.blocks[i].active = false;
        state.nudge_camera();
        state.score += 1;
        state.blocks_destroyed += 1;
        state.apply_speed_milestones();
        log::debug!("block {} destroyed, score {}", i, state.score);

        if result.axis.is_vertical() {
            state.ball.direction.z = -state.ball.direction.z;
        } else {
            state.ball.direction.x = -state.ball.direction.x;
        }
        push_out(state, &block_box, result.axis);

        // One block per tick; overlapping neighbors wait for the next frame
        break;
    }
}
