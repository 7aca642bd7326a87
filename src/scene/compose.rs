//! Frame composition from game state

use glam::{Mat4, Vec2, Vec3};

use super::assets::SceneModels;
use super::frame::{Drawable, Frame, RenderEntry, TextCommand};
use super::light::DirectionalLight;
use crate::consts::MAX_LIVES;
use crate::sim::state::{GamePhase, GameState, PaletteSize};

/// Vertical field of view of the play camera
const FOV_Y: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// HUD text color
const HUD_COLOR: Vec3 = Vec3::ONE;

/// Build the draw list and HUD for the current state.
///
/// Entry order is fixed: skybox, ground, the refracting star, active
/// blocks, palette, ball. Renderers draw in list order.
pub fn compose(
    state: &GameState,
    models: &SceneModels,
    light: &DirectionalLight,
    display: Vec2,
) -> Frame {
    let mut entries = Vec::with_capacity(state.blocks.len() + 5);

    entries.push(RenderEntry {
        transform: Mat4::IDENTITY,
        drawable: Drawable::Skybox,
        reflect: false,
        refract: false,
    });
    entries.push(RenderEntry::mesh(models.ground, Mat4::IDENTITY));
    entries.push(RenderEntry {
        transform: Mat4::IDENTITY,
        drawable: Drawable::Mesh(models.star),
        reflect: false,
        refract: true,
    });

    for block in state.blocks.iter().filter(|b| b.active) {
        entries.push(RenderEntry::mesh(
            models.block,
            Mat4::from_translation(block.center),
        ));
    }

    let palette_model = match state.palette.size {
        PaletteSize::Big => models.palette_big,
        PaletteSize::Small => models.palette_small,
    };
    entries.push(RenderEntry::mesh(
        palette_model,
        Mat4::from_translation(state.palette.position),
    ));

    entries.push(RenderEntry {
        transform: Mat4::from_translation(state.ball.position),
        drawable: Drawable::Mesh(models.ball),
        reflect: true,
        refract: false,
    });

    Frame {
        view: state.camera.view_matrix(),
        projection: Mat4::perspective_rh(FOV_Y, display.x / display.y, 0.01, 100.0),
        eye: state.camera.position,
        light_space: light.light_space(),
        entries,
        text: hud_text(state, display),
    }
}

/// HUD lines for the current phase
fn hud_text(state: &GameState, display: Vec2) -> Vec<TextCommand> {
    let h = display.y;
    match state.phase {
        GamePhase::Menu => vec![
            TextCommand {
                text: "Breakout".to_string(),
                x: 25.0,
                y: h - 80.0,
                scale: 1.0,
                color: HUD_COLOR,
            },
            TextCommand {
                text: "Arrows to steer | Space to launch".to_string(),
                x: 35.0,
                y: h - 110.0,
                scale: 0.25,
                color: HUD_COLOR,
            },
            TextCommand {
                text: "Press [Enter] to play".to_string(),
                x: 25.0,
                y: h - 180.0,
                scale: 0.5,
                color: HUD_COLOR,
            },
        ],
        GamePhase::Playing => vec![
            TextCommand {
                text: format!("Points | {}", state.score),
                x: 25.0,
                y: h - 60.0,
                scale: 0.5,
                color: HUD_COLOR,
            },
            TextCommand {
                text: format!("Lives | {}/{}", state.lives, MAX_LIVES),
                x: 25.0,
                y: h - 120.0,
                scale: 0.5,
                color: HUD_COLOR,
            },
        ],
    }
}
