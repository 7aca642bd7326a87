//! Block grid generation

use glam::Vec3;

use super::state::Block;
use crate::consts::*;

/// Lay out a row-major `rows x columns` grid of active blocks.
///
/// The grid spans the scene width with one block per cell, centers offset by
/// half a cell. Rows are two units deep and the whole field sits in the far
/// quarter of the playfield.
pub fn generate_blocks(columns: u32, rows: u32) -> Vec<Block> {
    let depth = 2.0 * rows as f32;
    let cell_width = SCENE_WIDTH / columns as f32;
    let cell_depth = depth / rows as f32;

    let mut blocks = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let x = cell_width * col as f32 + cell_width / 2.0 - SCENE_WIDTH / 2.0;
            let z = cell_depth * row as f32 + cell_depth / 2.0 - depth / 2.0
                + SCENE_HEIGHT / 4.0;
            blocks.push(Block::new(Vec3::new(x, 0.0, z)));
        }
    }

    log::debug!("generated {} blocks ({columns} x {rows})", blocks.len());
    blocks
}
