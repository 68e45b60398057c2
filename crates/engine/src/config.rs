//! Engine configuration
//!
//! All timing and progression parameters, defaulting to the arcade values in
//! `neo_tetris_types`. The struct is serde-friendly so a host can ship it as JSON;
//! missing fields fall back to their defaults. Out-of-range values are clamped
//! by [`EngineConfig::sanitized`] before the engine uses them.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_FALL_MS, CLEAR_FLASH_MS, FEVER_DURATION_MS, MIN_FALL_MS, SPEED_LEVEL_MAX,
    SPEED_UP_DENOMINATOR, SPEED_UP_NUMERATOR, SPEED_UP_PERIOD_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fall interval at the start of a game
    pub base_fall_ms: u32,
    /// Fall interval floor
    pub min_fall_ms: u32,
    /// Period of the speed-up timer
    pub speed_up_period_ms: u32,
    /// Fall interval kept on each speed-up, in percent
    pub speed_up_percent: u32,
    /// Cap of the speed meter
    pub speed_level_max: u32,
    /// Fever mode length
    pub fever_duration_ms: u32,
    /// Suggested line-clear flash duration, forwarded in events
    pub clear_flash_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_fall_ms: BASE_FALL_MS,
            min_fall_ms: MIN_FALL_MS,
            speed_up_period_ms: SPEED_UP_PERIOD_MS,
            speed_up_percent: SPEED_UP_NUMERATOR * 100 / SPEED_UP_DENOMINATOR,
            speed_level_max: SPEED_LEVEL_MAX,
            fever_duration_ms: FEVER_DURATION_MS,
            clear_flash_ms: CLEAR_FLASH_MS,
        }
    }
}

impl EngineConfig {
    /// Copy with every timer delay at least 1ms and the speed-up percent in 1..=100
    ///
    /// A zero delay would re-arm a timer at the instant it fires.
    pub fn sanitized(&self) -> Self {
        Self {
            base_fall_ms: self.base_fall_ms.max(1),
            min_fall_ms: self.min_fall_ms.max(1),
            speed_up_period_ms: self.speed_up_period_ms.max(1),
            speed_up_percent: self.speed_up_percent.clamp(1, 100),
            fever_duration_ms: self.fever_duration_ms.max(1),
            ..self.clone()
        }
    }
}
