//! Abstract per-frame input
//!
//! The platform layer translates keys and pointer events into a [`FrameInput`].
//! Held flags are sampled every frame; edge flags are true only on the frame
//! the key went down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::LEVEL_COUNT;

/// Level buttons on the menu screen
pub const MENU_BUTTON_X: f32 = 360.0;
pub const MENU_BUTTON_Y: f32 = 250.0;
pub const MENU_BUTTON_W: f32 = 280.0;
pub const MENU_BUTTON_H: f32 = 34.0;
pub const MENU_BUTTON_SPACING: f32 = 40.0;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Launch stuck balls (edge)
    pub launch: bool,
    /// Pause toggle (edge)
    pub pause: bool,
    /// Start the selected level / return to the menu (edge)
    pub confirm: bool,
    /// Number key pressed in the menu
    pub select_level: Option<u32>,
    /// Menu cursor (edges)
    pub menu_up: bool,
    pub menu_down: bool,
    /// Pointer click position in screen space
    pub click: Option<Vec2>,
}

impl FrameInput {
    /// Horizontal intent: -1, 0 or +1. Both directions cancel out.
    pub fn steer(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Copy of this input with every edge cleared
    pub fn held_only(&self) -> Self {
        Self {
            left: self.left,
            right: self.right,
            ..Default::default()
        }
    }

    /// True if any edge or one-shot field is set
    pub fn has_edges(&self) -> bool {
        self.launch
            || self.pause
            || self.confirm
            || self.menu_up
            || self.menu_down
            || self.select_level.is_some()
            || self.click.is_some()
    }

    /// Fold another frame's edges into this one. Held flags take the newer
    /// value; one-shot selections keep the latest.
    pub fn merge(&mut self, newer: &FrameInput) {
        self.left = newer.left;
        self.right = newer.right;
        self.launch |= newer.launch;
        self.pause |= newer.pause;
        self.confirm |= newer.confirm;
        self.menu_up |= newer.menu_up;
        self.menu_down |= newer.menu_down;
        if newer.select_level.is_some() {
            self.select_level = newer.select_level;
        }
        if newer.click.is_some() {
            self.click = newer.click;
        }
    }
}

/// Screen rectangle of the menu button for `level` (1-based)
pub fn menu_button(level: u32) -> Rect {
    let row = level.saturating_sub(1) as f32;
    Rect::new(
        MENU_BUTTON_X,
        MENU_BUTTON_Y + row * MENU_BUTTON_SPACING,
        MENU_BUTTON_W,
        MENU_BUTTON_H,
    )
}

/// Level whose menu button contains `point`
pub fn level_at(point: Vec2) -> Option<u32> {
    (1..=LEVEL_COUNT).find(|&level| menu_button(level).contains_point(point))
}
