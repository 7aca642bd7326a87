//! Game state and core entity types
//!
//! Everything a run mutates lives on `GameState`; the tick and collision
//! functions receive it explicitly rather than touching globals.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::camera::CameraRig;
use super::collider::BoxCollider;
use super::level::generate_blocks;
use crate::consts::*;
use crate::{clamp, lerp_vec3};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; the scene renders but gameplay input is ignored
    Menu,
    /// Active gameplay
    Playing,
}

/// Ball state - riding the palette or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    /// Travel direction, normalized at the start of each integration step
    pub direction: Vec3,
    /// Units per second; grows as the run progresses
    pub speed: f32,
    pub radius: f32,
    /// While set, the ball rides the palette instead of integrating
    pub sticky: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: BALL_START_DIRECTION,
            speed: BALL_START_SPEED,
            radius: BALL_RADIUS,
            sticky: true,
        }
    }
}

impl Ball {
    /// Re-sticky with the serve direction; the position snaps onto the
    /// palette at the end of the next tick
    pub fn reset_to_serve(&mut self) {
        self.sticky = true;
        self.position = Vec3::ZERO;
        self.direction = BALL_START_DIRECTION;
    }
}

/// Palette width variants; far-wall bounces shrink the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaletteSize {
    #[default]
    Big,
    Small,
}

/// The player's palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Rendered and collision-tested position, eased toward the target
    pub position: Vec3,
    /// Input-driven desired position
    pub position_target: Vec3,
    pub size: PaletteSize,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            position: PALETTE_START,
            position_target: PALETTE_START,
            size: PaletteSize::Big,
        }
    }
}

impl Palette {
    /// Half-widths on the x/z plane for the current size
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        match self.size {
            PaletteSize::Big => PALETTE_BIG_HALF_EXTENTS,
            PaletteSize::Small => PALETTE_SMALL_HALF_EXTENTS,
        }
    }

    /// Collision shape at the current eased position
    pub fn as_box(&self) -> BoxCollider {
        BoxCollider::new(self.position, self.half_extents())
    }

    pub fn set_big(&mut self) {
        self.size = PaletteSize::Big;
    }

    pub fn set_small(&mut self) {
        self.size = PaletteSize::Small;
    }

    /// Ease toward the target, then clamp both to the playfield
    pub fn update(&mut self) {
        self.position = lerp_vec3(self.position, self.position_target, PALETTE_SMOOTHING);
        let limit = PLAYFIELD_HALF_WIDTH - self.half_extents().x;
        self.position.x = clamp(self.position.x, -limit, limit);
        self.position_target.x = clamp(self.position_target.x, -limit, limit);
    }

    /// Attach point for a sticky ball, one palette depth ahead
    pub fn ball_anchor(&self) -> Vec3 {
        self.position + Vec3::new(0.0, 0.0, self.half_extents().y * 2.0)
    }
}

/// One destructible block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Grid position, fixed for the life of the level
    pub center: Vec3,
    /// Cleared on destruction, restored on a full reset
    pub active: bool,
}

impl Block {
    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            active: true,
        }
    }

    /// Collision shape; every block shares the same half-extents
    pub fn as_box(&self) -> BoxCollider {
        BoxCollider::new(self.center, BLOCK_HALF_EXTENTS)
    }
}

/// Complete game state, the single owner of everything a tick mutates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub palette: Palette,
    /// Row-major block grid; destruction only toggles `active`
    pub blocks: Vec<Block>,
    pub score: u32,
    /// Total destroyed this cycle, drives the speed milestones
    pub blocks_destroyed: u32,
    pub lives: u8,
    /// Which speed milestones already paid out this cycle
    pub milestones_hit: [bool; 2],
    pub camera: CameraRig,
    /// Impact nudge magnitude; the app zeroes this when shake is off
    pub camera_nudge: f32,
    /// Frame counter, diagnostics only
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state at the menu with the default grid
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            ball: Ball::default(),
            palette: Palette::default(),
            blocks: generate_blocks(GRID_COLUMNS, GRID_ROWS),
            score: 0,
            blocks_destroyed: 0,
            lives: MAX_LIVES,
            milestones_hit: [false; 2],
            camera: CameraRig::default(),
            camera_nudge: CAMERA_NUDGE,
            time_ticks: 0,
        }
    }

    /// Shove the camera target against the ball's travel direction
    pub fn nudge_camera(&mut self) {
        self.camera.position_target -= self.camera_nudge * self.ball.direction;
    }

    /// Pay out any speed milestone `blocks_destroyed` has reached
    pub fn apply_speed_milestones(&mut self) {
        for (hit, &threshold) in self.milestones_hit.iter_mut().zip(SPEED_MILESTONES.iter()) {
            if !*hit && self.blocks_destroyed >= threshold {
                *hit = true;
                self.ball.speed += MILESTONE_SPEED_BONUS;
                log::info!(
                    "speed milestone at {} blocks, ball speed now {}",
                    threshold,
                    self.ball.speed
                );
            }
        }
    }

    /// Lose a ball (`hard = false`) or tear the whole run down (`hard = true`).
    ///
    /// A soft reset only re-stickies the ball. Once lives run out, or on an
    /// explicit hard reset, the grid reactivates, the counters restore and
    /// the game returns to the menu.
    pub fn reset(&mut self, hard: bool) {
        self.lives = self.lives.saturating_sub(1);
        self.ball.reset_to_serve();

        if self.lives > 0 && !hard {
            log::info!("ball lost, {} lives left", self.lives);
            return;
        }

        for block in &mut self.blocks {
            block.active = true;
        }
        self.palette.set_big();
        self.palette.position_target = PALETTE_START;
        self.score = 0;
        self.blocks_destroyed = 0;
        self.ball.speed = BALL_START_SPEED;
        self.lives = MAX_LIVES;
        self.milestones_hit = [false; 2];
        self.camera.reset_view();
        self.phase = GamePhase::Menu;
        log::info!("game reset to menu");
    }

    /// Blocks still standing
    pub fn active_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
