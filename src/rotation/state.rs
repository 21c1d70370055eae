use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{AUTO_ADVANCE_INTERVAL, MANUAL_COOLDOWN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Running, // Auto-advancing every interval
    Paused,  // Hovered, or cooling down after a manual action
}

/// What happens when the pointer leaves a carousel while a manual cooldown
/// is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverRelease {
    /// Stay paused until the pending cooldown expires.
    #[default]
    HonorCooldown,
    /// Drop the pending cooldown and resume right away.
    Immediate,
}

/// Timer settings for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTiming {
    pub interval: Duration,
    pub cooldown: Duration,
    pub hover_release: HoverRelease,
}

impl RotationTiming {
    /// Zero-length intervals would tick forever within one update.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub fn new(interval: Duration, cooldown: Duration, hover_release: HoverRelease) -> Self {
        Self {
            interval: interval.max(Self::MIN_INTERVAL),
            cooldown,
            hover_release,
        }
    }
}

impl Default for RotationTiming {
    fn default() -> Self {
        Self::new(AUTO_ADVANCE_INTERVAL, MANUAL_COOLDOWN, HoverRelease::default())
    }
}
