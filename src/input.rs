//! Raw input digestion
//!
//! Platform layers dump held keys and accumulated mouse travel into an
//! [`InputState`] each frame; [`to_tick_input`](InputState::to_tick_input)
//! folds that into the tick's input, applying the configured sensitivity.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::TickInput;

/// Held-key and mouse snapshot for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub steer_left: bool,
    pub steer_right: bool,
    pub launch: bool,
    pub start: bool,
    pub abort: bool,
    pub cam_forward: bool,
    pub cam_back: bool,
    pub cam_left: bool,
    pub cam_right: bool,
    /// Cursor travel since the last frame, pixels
    pub mouse_delta: Vec2,
}

impl InputState {
    /// Fold into a tick input, scaling mouse travel by sensitivity
    pub fn to_tick_input(&self, settings: &Settings) -> TickInput {
        TickInput {
            steer_left: self.steer_left,
            steer_right: self.steer_right,
            launch: self.launch,
            start: self.start,
            abort: self.abort,
            cam_forward: self.cam_forward,
            cam_back: self.cam_back,
            cam_left: self.cam_left,
            cam_right: self.cam_right,
            look: self.mouse_delta * settings.mouse_sensitivity,
        }
    }

    /// Clear the per-frame accumulators, keeping held keys
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }
}
