//! Threshold crossing detection

use crate::config::{FIRST_WARNING_SECS, SECOND_WARNING_SECS};

/// Side effect due on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Remaining time dropped to or below five minutes
    FiveMinutes { notify: bool },
    /// Remaining time dropped to or below two minutes
    TwoMinutes,
    /// Countdown reached zero
    Expired,
}

/// Tracks which thresholds have fired in the current run.
///
/// A threshold `t` is crossed on the tick where `previous > t >= remaining`,
/// so a skipped second still fires it. Warnings notify at most once per run;
/// the five-minute crossing itself is reported again whenever an extension
/// pushed remaining time back above it, which is what re-arms "more time".
#[derive(Debug, Clone)]
pub struct ThresholdTracker {
    previous_secs: u64,
    five_notified: bool,
    two_notified: bool,
    expired: bool,
}

impl ThresholdTracker {
    /// `initial_secs` is the remaining time before the first tick
    pub fn new(initial_secs: u64) -> Self {
        Self {
            previous_secs: initial_secs,
            five_notified: false,
            two_notified: false,
            expired: false,
        }
    }

    /// Evaluate a tick, returning crossings in priority order
    pub fn observe(&mut self, remaining_secs: u64) -> Vec<Crossing> {
        let mut crossings = Vec::new();
        if self.expired {
            return crossings;
        }

        let previous = self.previous_secs;
        self.previous_secs = remaining_secs;

        if remaining_secs == 0 {
            self.expired = true;
            crossings.push(Crossing::Expired);
            return crossings;
        }

        if crossed(previous, remaining_secs, FIRST_WARNING_SECS) {
            let notify = !self.five_notified;
            self.five_notified = true;
            crossings.push(Crossing::FiveMinutes { notify });
        }
        if crossed(previous, remaining_secs, SECOND_WARNING_SECS) && !self.two_notified {
            self.two_notified = true;
            crossings.push(Crossing::TwoMinutes);
        }
        crossings
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

fn crossed(previous: u64, current: u64, threshold: u64) -> bool {
    previous > threshold && current <= threshold
}
