//! Per-frame game simulation
//!
//! All gameplay logic lives here, built around one `GameState` value:
//! - No globals: the tick and collision functions receive state explicitly
//! - One tick per rendered frame, driven by the caller's delta time
//! - No rendering or platform dependencies

pub mod camera;
pub mod collider;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use camera::CameraRig;
pub use collider::BoxCollider;
pub use collision::{CollisionAxis, CollisionResult, ball_box_collision, resolve_collisions};
pub use level::generate_blocks;
pub use state::{Ball, Block, GamePhase, GameState, Palette, PaletteSize};
pub use tick::{TickInput, tick};
