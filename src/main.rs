//! Skybreak entry point
//!
//! Headless demo loop: drives the simulation at 60 Hz with a scripted
//! session, composes a frame each tick and hands it to a logging renderer.
//! A windowed build would swap [`LogRenderer`] for a real backend behind
//! the same `Renderer` trait.

use glam::Vec2;

use skybreak::Settings;
use skybreak::input::InputState;
use skybreak::scene::{DirectionalLight, Frame, ModelRegistry, Renderer, SceneModels, compose};
use skybreak::sim::{GamePhase, GameState, tick};

/// Fixed demo timestep
const DT: f32 = 1.0 / 60.0;
/// Display size used for HUD layout
const DISPLAY: Vec2 = Vec2::new(1280.0, 720.0);
/// Demo session length, frames
const SESSION_FRAMES: u64 = 3600;

/// Renderer that logs frame statistics instead of drawing
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::info!(
                "frame {}: {} draw entries, {} text lines, eye {}",
                self.frames,
                frame.entries.len(),
                frame.text.len(),
                frame.eye
            );
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Skybreak starting...");

    let settings = Settings::load();
    let mut registry = ModelRegistry::new();
    let models = SceneModels::register_defaults(&mut registry);
    let light = DirectionalLight::default();
    log::info!("{} models registered", registry.len());

    let mut state = GameState::new();
    if !settings.effective_camera_shake() {
        state.camera_nudge = 0.0;
    }

    let mut renderer = LogRenderer { frames: 0 };
    let mut input = InputState::default();

    for frame in 0..SESSION_FRAMES {
        script_input(&mut input, frame, &state);
        let tick_input = input.to_tick_input(&settings);
        tick(&mut state, &tick_input, DT);
        input.end_frame();

        let frame_packet = compose(&state, &models, &light, DISPLAY);
        renderer.render(&frame_packet);
    }

    log::info!(
        "session over: score {}, lives {}, {} blocks standing",
        state.score,
        state.lives,
        state.active_blocks()
    );
}

/// Scripted session: start, launch, then keep the palette under the ball
fn script_input(input: &mut InputState, frame: u64, state: &GameState) {
    // Pulse the start key once a second while on the title screen
    input.start = state.phase == GamePhase::Menu && frame % 60 == 5;
    input.launch = frame >= 30;

    input.steer_left = false;
    input.steer_right = false;
    if state.phase == GamePhase::Playing && !state.ball.sticky {
        // Steering toward +x is the left key under the play camera
        let offset = state.ball.position.x - state.palette.position.x;
        if offset > 0.5 {
            input.steer_left = true;
        } else if offset < -0.5 {
            input.steer_right = true;
        }
    }
}
