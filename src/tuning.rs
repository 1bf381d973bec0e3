//! Game balance parameters
//!
//! Every field has a default matching the shipped game, so a tuning file only
//! needs to name the values it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddle ===
    /// Horizontal paddle speed (px/s)
    pub paddle_speed: f32,
    /// Base paddle width (px)
    pub paddle_base_width: f32,
    /// Exponential rate at which width approaches its target (1/s)
    pub paddle_ease_rate: f32,
    /// EXTEND multiplies the base width by this factor
    pub extend_factor: f32,
    /// Largest paddle bounce angle from vertical (degrees)
    pub paddle_bounce_max_deg: f32,

    // === Ball ===
    /// Ball speed before level and item multipliers (px/s)
    pub ball_base_speed: f32,
    /// Per-level speed multipliers, indexed by level - 1
    pub level_speed: [f32; 3],
    /// Launch angle range measured from the horizontal (degrees)
    pub launch_min_deg: f32,
    pub launch_max_deg: f32,

    // === Speed items ===
    pub slow_multiplier: f32,
    pub fast_multiplier: f32,
    /// Lifetime of SLOW/FAST (seconds)
    pub speed_effect_secs: f32,

    // === Power-ups ===
    /// Fall speed of pickups (px/s)
    pub power_up_fall_speed: f32,

    // === Session ===
    pub starting_lives: u32,

    // === Scoring ===
    pub kill_points: u64,
    pub combo_bonus: u64,
    pub damage_points: u64,
    pub solid_points: u64,

    // === Feedback ===
    pub shake_secs: f32,
    pub shake_magnitude: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: 520.0,
            paddle_base_width: 120.0,
            paddle_ease_rate: 8.0,
            extend_factor: 1.6,
            paddle_bounce_max_deg: 70.0,

            ball_base_speed: 430.0,
            level_speed: [0.85, 0.95, 1.05],
            launch_min_deg: 40.0,
            launch_max_deg: 140.0,

            slow_multiplier: 0.7,
            fast_multiplier: 1.35,
            speed_effect_secs: 10.0,

            power_up_fall_speed: 160.0,

            starting_lives: 3,

            kill_points: 100,
            combo_bonus: 30,
            damage_points: 40,
            solid_points: 10,

            shake_secs: 0.15,
            shake_magnitude: 6.0,
        }
    }
}

impl Tuning {
    /// Speed multiplier for a level (levels past the table use the last entry)
    pub fn level_speed(&self, level: u32) -> f32 {
        let idx = (level.max(1) as usize - 1).min(self.level_speed.len() - 1);
        self.level_speed[idx]
    }

    /// Width of the paddle while EXTEND is in effect
    pub fn extended_width(&self) -> f32 {
        self.paddle_base_width * self.extend_factor
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("paddle_speed", self.paddle_speed),
            ("paddle_base_width", self.paddle_base_width),
            ("paddle_ease_rate", self.paddle_ease_rate),
            ("extend_factor", self.extend_factor),
            ("ball_base_speed", self.ball_base_speed),
            ("slow_multiplier", self.slow_multiplier),
            ("fast_multiplier", self.fast_multiplier),
            ("speed_effect_secs", self.speed_effect_secs),
            ("power_up_fall_speed", self.power_up_fall_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if let Some(bad) = self.level_speed.iter().find(|m| !(**m > 0.0)) {
            return Err(TuningError::Invalid(format!("level_speed entries must be positive, got {bad}")));
        }
        if self.launch_min_deg > self.launch_max_deg {
            return Err(TuningError::Invalid(format!(
                "launch range is empty: {}..{}",
                self.launch_min_deg, self.launch_max_deg
            )));
        }
        if self.extended_width() > crate::consts::PLAY_W {
            return Err(TuningError::Invalid("extended paddle is wider than the field".into()));
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid("starting_lives must be at least 1".into()));
        }
        Ok(())
    }
}
