//! Per-frame simulation tick
//!
//! One tick advances the game by one rendered frame, always in the same
//! order: input, camera ease, palette ease, ball motion with wall bounces,
//! collisions (palette before blocks), sticky snap.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Digested input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer the palette toward +x (screen left under the play camera)
    pub steer_left: bool,
    /// Steer the palette toward -x
    pub steer_right: bool,
    /// Release a sticky ball (space)
    pub launch: bool,
    /// Enter: starts from the menu, recenters the camera in play
    pub start: bool,
    /// Escape: abort the run, hard reset back to the menu
    pub abort: bool,
    /// Camera fly keys
    pub cam_forward: bool,
    pub cam_back: bool,
    pub cam_left: bool,
    pub cam_right: bool,
    /// Mouse look in radians, pre-scaled by sensitivity; ignored in the menu
    pub look: Vec2,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    handle_input(state, input, dt);

    state.camera.update();
    state.palette.update();
    move_ball(state, dt);
    resolve_collisions(state);
    if state.ball.sticky {
        state.ball.position = state.palette.ball_anchor();
    }

    state.time_ticks += 1;
}

fn handle_input(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Menu => {
            // Everything but the start key is ignored on the title screen
            if input.start {
                state.phase = GamePhase::Playing;
                state.camera.aim_from_angles();
                log::info!("game started");
            }
        }
        GamePhase::Playing => {
            if input.abort {
                log::info!("run aborted");
                state.reset(true);
                return;
            }
            if input.start {
                state.camera.recenter();
            }
            if input.look != Vec2::ZERO {
                state.camera.look(input.look);
            }
            if input.cam_forward {
                state.camera.fly_forward(dt, 1.0);
            }
            if input.cam_back {
                state.camera.fly_forward(dt, -1.0);
            }
            if input.cam_left {
                state.camera.fly_strafe(dt, -1.0);
            }
            if input.cam_right {
                state.camera.fly_strafe(dt, 1.0);
            }

            if input.steer_left {
                state.palette.position_target.x += dt * PALETTE_SPEED;
            }
            if input.steer_right {
                state.palette.position_target.x -= dt * PALETTE_SPEED;
            }
            if input.launch && state.ball.sticky {
                state.ball.sticky = false;
                log::info!("ball launched");
            }
        }
    }
}

/// Integrate a free ball and bounce it off the playfield walls
fn move_ball(state: &mut GameState, dt: f32) {
    if state.ball.sticky {
        return;
    }

    state.ball.direction = state.ball.direction.normalize_or_zero();
    state.ball.position += state.ball.speed * state.ball.direction * dt;

    let r = state.ball.radius;
    let limit_x = PLAYFIELD_HALF_WIDTH - r;

    if state.ball.position.x <= -limit_x {
        state.nudge_camera();
        state.ball.direction.x = -state.ball.direction.x;
        state.ball.position.x = -limit_x;
    } else if state.ball.position.x >= limit_x {
        state.nudge_camera();
        state.ball.direction.x = -state.ball.direction.x;
        state.ball.position.x = limit_x;
    }

    if state.ball.position.z >= PLAYFIELD_FAR_Z - r {
        // The far wall punishes: smaller palette, faster ball
        state.nudge_camera();
        state.palette.set_small();
        state.ball.direction.z = -state.ball.direction.z;
        state.ball.position.z = PLAYFIELD_FAR_Z - r;
        state.ball.speed += FAR_WALL_SPEED_BONUS;
        log::info!("far wall hit, ball speed now {}", state.ball.speed);
    } else if state.ball.position.z <= PLAYFIELD_NEAR_Z + r {
        state.nudge_camera();
        log::info!("ball missed");
        state.reset(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::generate_blocks;
    use crate::sim::state::{Block, PaletteSize};
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_menu_ignores_gameplay_input() {
        let mut state = GameState::new();
        let input = TickInput {
            launch: true,
            steer_left: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.ball.sticky);
        assert_eq!(state.palette.position_target.x, 0.0);
    }

    #[test]
    fn test_start_enters_playing() {
        let mut state = GameState::new();
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.camera.position_target, CAMERA_START_POS);
    }

    #[test]
    fn test_sticky_ball_tracks_palette() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput { start: true, ..Default::default() }, DT);

        let steer = TickInput {
            steer_left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &steer, DT);
            assert_eq!(state.ball.position, state.palette.ball_anchor());
        }
        assert!(state.palette.position.x > 0.0);

        // Launch frees the ball from the palette
        let anchor = state.palette.ball_anchor();
        tick(&mut state, &TickInput { launch: true, ..Default::default() }, DT);
        assert!(!state.ball.sticky);
        assert!(state.ball.position.z > anchor.z);
    }

    #[test]
    fn test_launch_integrates_along_direction() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.ball.position = Vec3::ZERO;
        state.ball.direction = Vec3::new(0.0, 0.0, 1.0);
        state.ball.speed = 20.0;

        tick(&mut state, &TickInput::default(), DT);
        assert!((state.ball.position.z - 20.0 * DT).abs() < 1e-5);
        assert_eq!(state.ball.position.x, 0.0);
    }

    #[test]
    fn test_side_wall_mirrors_x() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.blocks.clear();
        state.ball.position = Vec3::new(PLAYFIELD_HALF_WIDTH - 0.6, 0.0, 0.0);
        state.ball.direction = Vec3::new(1.0, 0.0, 0.0);

        tick(&mut state, &TickInput::default(), DT);
        assert!(state.ball.direction.x < 0.0);
        assert_eq!(state.ball.position.x, PLAYFIELD_HALF_WIDTH - BALL_RADIUS);
    }

    #[test]
    fn test_far_wall_shrinks_palette_and_speeds_up() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.blocks.clear();
        state.ball.position = Vec3::new(0.0, 0.0, PLAYFIELD_FAR_Z - 0.8);
        state.ball.direction = Vec3::new(0.0, 0.0, 1.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.palette.size, PaletteSize::Small);
        assert_eq!(state.ball.speed, BALL_START_SPEED + FAR_WALL_SPEED_BONUS);
        assert!(state.ball.direction.z < 0.0);
        assert_eq!(state.ball.position.z, PLAYFIELD_FAR_Z - BALL_RADIUS);
    }

    #[test]
    fn test_near_wall_miss_soft_resets() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.score = 4;
        state.blocks[0].active = false;
        state.ball.position = Vec3::new(0.0, 0.0, PLAYFIELD_NEAR_Z + 0.6);
        state.ball.direction = Vec3::new(0.0, 0.0, -1.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.lives, MAX_LIVES - 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 4);
        assert!(!state.blocks[0].active);
        assert!(state.ball.sticky);
        // Back on the palette by the end of the tick
        assert_eq!(state.ball.position, state.palette.ball_anchor());
    }

    #[test]
    fn test_last_life_miss_ends_the_run() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.lives = 1;
        state.score = 9;
        state.blocks[5].active = false;
        state.ball.position = Vec3::new(0.0, 0.0, PLAYFIELD_NEAR_Z + 0.6);
        state.ball.direction = Vec3::new(0.0, 0.0, -1.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, MAX_LIVES);
        assert_eq!(state.score, 0);
        assert!(state.blocks.iter().all(|b| b.active));
    }

    #[test]
    fn test_abort_hard_resets() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput { start: true, ..Default::default() }, DT);
        state.score = 3;
        state.ball.sticky = false;

        tick(&mut state, &TickInput { abort: true, ..Default::default() }, DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, MAX_LIVES);
        assert!(state.ball.sticky);
    }

    #[test]
    fn test_block_destruction_through_tick() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.blocks = generate_blocks(2, 2);
        let target = state.blocks[1].center;
        state.ball.position = Vec3::new(target.x, 0.0, target.z - 1.2);
        state.ball.direction = Vec3::new(0.0, 0.0, 1.0);
        state.ball.speed = 20.0;

        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.blocks[1].active);
        assert_eq!(state.score, 1);
        assert!(state.ball.direction.z < 0.0);
        assert_eq!(state.active_blocks(), 3);
    }

    #[test]
    fn test_milestones_through_destruction() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        state.ball.sticky = false;
        state.blocks_destroyed = 3;
        state.blocks = vec![
            Block::new(Vec3::new(-10.0, 0.0, 10.0)),
            Block::new(Vec3::new(10.0, 0.0, 10.0)),
        ];

        state.ball.position = Vec3::new(-10.0, 0.0, 9.0);
        state.ball.direction = Vec3::new(0.0, 0.0, 1.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.blocks_destroyed, 4);
        assert_eq!(state.ball.speed, BALL_START_SPEED + MILESTONE_SPEED_BONUS);

        // The fifth block pays nothing extra
        state.ball.position = Vec3::new(10.0, 0.0, 8.8);
        state.ball.direction = Vec3::new(0.0, 0.0, 1.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.blocks_destroyed, 5);
        assert_eq!(state.ball.speed, BALL_START_SPEED + MILESTONE_SPEED_BONUS);
    }

    #[test]
    fn test_recenter_in_play_restores_angles() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput { start: true, ..Default::default() }, DT);

        let look = TickInput {
            look: Vec2::new(0.3, -0.1),
            ..Default::default()
        };
        tick(&mut state, &look, DT);
        assert_ne!(state.camera.yaw, CAMERA_START_YAW);

        tick(&mut state, &TickInput { start: true, ..Default::default() }, DT);
        assert_eq!(state.camera.yaw, CAMERA_START_YAW);
        assert_eq!(state.camera.pitch, CAMERA_START_PITCH);
    }

    #[test]
    fn test_deterministic_replay() {
        let script = |state: &mut GameState| {
            tick(state, &TickInput { start: true, ..Default::default() }, DT);
            for _ in 0..5 {
                tick(state, &TickInput { steer_right: true, ..Default::default() }, DT);
            }
            tick(state, &TickInput { launch: true, ..Default::default() }, DT);
            for _ in 0..300 {
                tick(state, &TickInput::default(), DT);
            }
        };

        let mut a = GameState::new();
        let mut b = GameState::new();
        script(&mut a);
        script(&mut b);
        assert_eq!(a.ball.position, b.ball.position);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}
