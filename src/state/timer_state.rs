//! Timer state published for status consumers

use serde::{Deserialize, Serialize};

/// Snapshot of the countdown as last rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub active: bool,
    pub remaining_seconds: Option<u64>,
    pub fraction: f64,
    pub extensions_used: u32,
    pub extension_available: bool,
}

impl TimerState {
    /// Create a new inactive timer state
    pub fn new() -> Self {
        Self {
            active: false,
            remaining_seconds: None,
            fraction: 0.0,
            extensions_used: 0,
            extension_available: false,
        }
    }

    /// Create an active timer state with remaining seconds
    pub fn active(remaining_seconds: u64, fraction: f64) -> Self {
        Self {
            active: true,
            remaining_seconds: Some(remaining_seconds),
            fraction,
            ..Self::new()
        }
    }

    /// Check if the timer is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get remaining seconds if timer is active
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.active {
            self.remaining_seconds
        } else {
            None
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
