//! Game state counters and lifecycle phase.

use crate::config::EngineConfig;
use crate::types::SPEED_LEVEL_START;

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, no game played yet
    Idle,
    Running,
    GameOver,
}

/// Score, progression and mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub combo: u32,
    pub lines_cleared: u32,
    pub fall_interval_ms: u32,
    /// Speed meter shown by hosts; only ever increases
    pub speed_level: u32,
    pub fever_active: bool,
}

impl GameStats {
    pub fn new(config: &EngineConfig, high_score: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            high_score,
            combo: 0,
            lines_cleared: 0,
            fall_interval_ms: config.base_fall_ms,
            speed_level: SPEED_LEVEL_START,
            fever_active: false,
        }
    }

    /// Reset per-game counters, keeping the high score and speed meter
    pub fn reset_for_new_game(&mut self, config: &EngineConfig) {
        *self = Self {
            high_score: self.high_score,
            speed_level: self.speed_level,
            ..Self::new(config, 0)
        };
    }
}
