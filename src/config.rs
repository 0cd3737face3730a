//! Per-screen swipe tuning.
//!
//! Both screens run the same engine; they differ only in these numbers and in
//! whether the last card may be swiped away.

use std::time::Duration;

use thiserror::Error;

/// Tuning for one card type / screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal release distance that must be exceeded to commit.
    pub commit_threshold: f32,
    /// Rotation in degrees is `dx / rotation_divisor`. Smaller tilts faster.
    pub rotation_divisor: f32,
    /// How far off-screen a committed card is thrown.
    pub exit_distance: f32,
    /// Length of the exit animation. The stack advances only after this.
    pub exit_duration: Duration,
    /// Cosmetic snap-back length after a cancel.
    pub snap_back_duration: Duration,
    /// Keep the final card: commits on it are turned into snap-backs.
    pub last_card_guard: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("commit threshold must be a positive finite distance, got {0}")]
    Threshold(f32),
    #[error("rotation divisor must be a positive finite number, got {0}")]
    RotationDivisor(f32),
    #[error("exit distance {exit} must exceed the commit threshold {threshold}")]
    ExitDistance { exit: f32, threshold: f32 },
    #[error("exit duration must be non-zero")]
    ExitDuration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::payments()
    }
}

impl SwipeConfig {
    /// Transaction receipt stack: stiff tilt, always keeps its last card.
    pub fn payments() -> Self {
        Self {
            commit_threshold: 100.0,
            rotation_divisor: 20.0,
            exit_distance: 1000.0,
            exit_duration: Duration::from_millis(300),
            snap_back_duration: Duration::from_millis(350),
            last_card_guard: true,
        }
    }

    /// Like/nope profile deck: needs a longer throw, tilts more, can run dry.
    pub fn profiles() -> Self {
        Self {
            commit_threshold: 120.0,
            rotation_divisor: 15.0,
            last_card_guard: false,
            ..Self::payments()
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.commit_threshold = threshold;
        self
    }

    pub fn with_rotation_divisor(mut self, divisor: f32) -> Self {
        self.rotation_divisor = divisor;
        self
    }

    pub fn with_exit_distance(mut self, distance: f32) -> Self {
        self.exit_distance = distance;
        self
    }

    pub fn with_exit_duration(mut self, duration: Duration) -> Self {
        self.exit_duration = duration;
        self
    }

    pub fn with_last_card_guard(mut self, enabled: bool) -> Self {
        self.last_card_guard = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.commit_threshold.is_finite() && self.commit_threshold > 0.0) {
            return Err(ConfigError::Threshold(self.commit_threshold));
        }
        if !(self.rotation_divisor.is_finite() && self.rotation_divisor > 0.0) {
            return Err(ConfigError::RotationDivisor(self.rotation_divisor));
        }
        if !(self.exit_distance.is_finite() && self.exit_distance > self.commit_threshold) {
            return Err(ConfigError::ExitDistance {
                exit: self.exit_distance,
                threshold: self.commit_threshold,
            });
        }
        if self.exit_duration.is_zero() {
            return Err(ConfigError::ExitDuration);
        }
        Ok(())
    }
}
