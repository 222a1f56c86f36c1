//! Score and high score

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Points this run
    pub current: u32,
    /// Best score seen this session; never decreases
    pub high: u32,
}

impl Score {
    /// Seed the high score, e.g. from a host's saved leaderboard
    pub fn with_high(high: u32) -> Self {
        Self { current: 0, high }
    }

    pub fn add(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
        self.high = self.high.max(self.current);
    }

    /// Start a new run; the high score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
