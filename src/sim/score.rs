//! Score and combo tracking

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub score: u64,
    /// Consecutive brick kills since the last paddle bounce or ball loss
    pub combo: u32,
}

impl Scoring {
    /// Award a brick kill and extend the streak. Returns the points given.
    pub fn award_kill(&mut self, tuning: &Tuning) -> u64 {
        let points = tuning.kill_points + u64::from(self.combo) * tuning.combo_bonus;
        self.score += points;
        self.combo += 1;
        points
    }

    /// A breakable brick took damage but survived
    pub fn award_damage(&mut self, tuning: &Tuning) -> u64 {
        self.score += tuning.damage_points;
        tuning.damage_points
    }

    /// A solid brick was struck
    pub fn award_solid(&mut self, tuning: &Tuning) -> u64 {
        self.score += tuning.solid_points;
        tuning.solid_points
    }

    pub fn break_combo(&mut self) {
        self.combo = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
