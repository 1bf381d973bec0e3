//! Level layouts and the brick grid decoder
//!
//! Each level is an 8x12 grid of cell codes:
//!
//! | code | brick                     |
//! |------|---------------------------|
//! | 0    | empty                     |
//! | 1    | plain                     |
//! | 2    | power: MULTIBALL          |
//! | 3    | power: EXTEND             |
//! | 4    | power: DEATH              |
//! | 5    | power: SLOW               |
//! | 6    | power: LIFE               |
//! | 7    | power: FAST               |
//! | 8    | solid (indestructible)    |

use thiserror::Error;

use super::rect::{Rect, play_field};
use super::state::{Brick, BrickKind, PowerKind};
use crate::consts::*;

pub type Layout = [[u8; BRICK_COLS]; BRICK_ROWS];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("unknown brick code {code} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, code: u8 },
}

/// A decoded level
#[derive(Debug, Clone)]
pub struct Level {
    /// Non-empty cells in row-major order
    pub bricks: Vec<Brick>,
    /// Bricks that must be destroyed to clear the level
    pub breakable: u32,
}

const EASY: Layout = [
    [0, 0, 1, 2, 1, 1, 3, 1, 2, 1, 0, 0],
    [0, 1, 1, 1, 5, 1, 1, 1, 5, 1, 1, 0],
    [1, 2, 1, 1, 1, 6, 1, 1, 1, 1, 2, 1],
    [1, 1, 1, 3, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 1, 2, 1, 5, 1, 1, 1, 5, 2, 1, 1],
    [0, 1, 6, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 2, 1, 1, 2, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0],
];

const NORMAL: Layout = [
    [0, 0, 2, 1, 1, 3, 1, 1, 2, 1, 0, 0],
    [0, 1, 1, 5, 4, 1, 1, 4, 5, 7, 1, 0],
    [1, 1, 1, 2, 1, 6, 1, 1, 2, 1, 7, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1],
    [1, 1, 1, 3, 5, 1, 1, 5, 3, 1, 1, 1],
    [0, 1, 7, 1, 2, 1, 1, 2, 1, 1, 1, 0],
    [0, 0, 1, 4, 1, 1, 1, 1, 4, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0],
];

const HARD: Layout = [
    [2, 1, 1, 1, 3, 1, 1, 3, 1, 1, 1, 2],
    [1, 1, 1, 4, 5, 1, 1, 5, 4, 7, 1, 1],
    [1, 7, 1, 1, 8, 8, 8, 8, 1, 1, 2, 1],
    [1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 1],
    [1, 1, 2, 1, 6, 4, 4, 6, 1, 2, 7, 1],
    [1, 8, 1, 3, 1, 5, 5, 1, 3, 1, 8, 1],
    [4, 8, 1, 1, 7, 1, 1, 2, 1, 1, 8, 1],
    [1, 1, 2, 1, 1, 1, 1, 1, 1, 2, 4, 1],
];

/// Built-in layout for a level; anything past the last table reuses it
pub fn layout_for(level: u32) -> &'static Layout {
    match level {
        0 | 1 => &EASY,
        2 => &NORMAL,
        _ => &HARD,
    }
}

/// Decode a single cell: `Some(None)` is an empty cell, `None` an unknown code
pub fn decode_cell(code: u8) -> Option<Option<BrickKind>> {
    let kind = match code {
        0 => return Some(None),
        1 => BrickKind::Plain,
        2 => BrickKind::Power(PowerKind::MultiBall),
        3 => BrickKind::Power(PowerKind::Extend),
        4 => BrickKind::Power(PowerKind::Death),
        5 => BrickKind::Power(PowerKind::Slow),
        6 => BrickKind::Power(PowerKind::Life),
        7 => BrickKind::Power(PowerKind::Fast),
        8 => BrickKind::Solid,
        _ => return None,
    };
    Some(Some(kind))
}

/// Rectangle of the brick at a grid cell
pub fn brick_rect(row: usize, col: usize) -> Rect {
    let field = play_field();
    let cols = BRICK_COLS as f32;
    let brick_w = (field.size.x - (cols - 1.0) * BRICK_GAP) / cols;
    Rect::new(
        field.left() + col as f32 * (brick_w + BRICK_GAP),
        field.top() + BRICK_TOP_MARGIN + row as f32 * (BRICK_H + BRICK_GAP),
        brick_w,
        BRICK_H,
    )
}

/// Turn a layout into bricks, rejecting unknown cell codes
pub fn decode_layout(layout: &Layout) -> Result<Level, LevelError> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for (row, cells) in layout.iter().enumerate() {
        for (col, &code) in cells.iter().enumerate() {
            let kind = decode_cell(code).ok_or(LevelError::UnknownCode { row, col, code })?;
            if let Some(kind) = kind {
                bricks.push(Brick::new(brick_rect(row, col), kind));
            }
        }
    }
    let breakable = bricks.iter().filter(|b| b.counts_for_clear()).count() as u32;
    Ok(Level { bricks, breakable })
}

/// Decode the built-in layout for `level`
pub fn load_level(level: u32) -> Result<Level, LevelError> {
    let decoded = decode_layout(layout_for(level))?;
    log::debug!(
        "Level {}: {} bricks, {} breakable",
        level,
        decoded.bricks.len(),
        decoded.breakable
    );
    Ok(decoded)
}
