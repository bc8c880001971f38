//! Deadline controller: owns the end instant and handles extension requests

use std::time::Duration;

use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, info};

use crate::config::{DISPLAY_COMPENSATION, EXTENSION_CAP, EXTENSION_DELTA};

/// Result of a "more time" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// Deadline moved; the trigger is disarmed until re-armed by the engine
    Applied { deadline: Instant, used: u32 },
    /// Trigger is not armed right now
    Disarmed,
    /// All extensions for this run are spent
    Exhausted,
    /// The countdown already reached zero
    Expired,
}

/// Owns the authoritative deadline on the UI side.
///
/// Updates reach the tick engine through an unbounded channel, so an
/// extension never waits on the engine.
#[derive(Debug)]
pub struct DeadlineController {
    deadline: Instant,
    total: Duration,
    used: u32,
    cap: u32,
    delta: Duration,
    armed: bool,
    expired: bool,
    updates: mpsc::UnboundedSender<Instant>,
}

impl DeadlineController {
    /// Start a countdown of `duration`, returning the controller and the
    /// receiving half the engine polls for deadline updates.
    pub fn start(duration: Duration) -> (Self, mpsc::UnboundedReceiver<Instant>) {
        Self::with_limits(duration, EXTENSION_DELTA, EXTENSION_CAP)
    }

    /// Like [`start`](Self::start) with a custom extension delta and cap
    pub fn with_limits(
        duration: Duration,
        delta: Duration,
        cap: u32,
    ) -> (Self, mpsc::UnboundedReceiver<Instant>) {
        debug_assert!(!duration.is_zero(), "countdown duration must be positive");
        let (updates, rx) = mpsc::unbounded_channel();
        let total = duration + DISPLAY_COMPENSATION;
        let deadline = Instant::now() + total;
        info!("Countdown deadline set {:?} from now", total);

        let controller = Self {
            deadline,
            total,
            used: 0,
            cap,
            delta,
            armed: false,
            expired: false,
            updates,
        };
        (controller, rx)
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Initial span between start and deadline, compensation included
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn extensions_used(&self) -> u32 {
        self.used
    }

    pub fn can_rearm(&self) -> bool {
        self.used < self.cap
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Re-enable the trigger; refused once the cap is reached or time is up
    pub fn rearm(&mut self) -> bool {
        self.armed = !self.is_expired() && self.can_rearm();
        self.armed
    }

    /// Mark the countdown as finished; later extensions are refused
    pub fn expire(&mut self) {
        self.expired = true;
        self.armed = false;
    }

    /// True once zero was reached or the tick engine stopped listening
    pub fn is_expired(&self) -> bool {
        self.expired || self.updates.is_closed()
    }

    /// Push the deadline back by the configured delta
    pub fn extend(&mut self) -> Extension {
        if self.is_expired() {
            debug!("Extension refused: countdown over");
            self.armed = false;
            return Extension::Expired;
        }
        if self.used >= self.cap {
            debug!("Extension refused: {} of {} used", self.used, self.cap);
            return Extension::Exhausted;
        }
        if !self.armed {
            debug!("Extension refused: trigger disarmed");
            return Extension::Disarmed;
        }

        self.deadline += self.delta;
        self.used += 1;
        self.armed = false;

        if self.updates.send(self.deadline).is_err() {
            debug!("Tick engine gone, extension has no effect on the countdown");
        }
        info!("Deadline extended by {:?} ({}/{})", self.delta, self.used, self.cap);

        Extension::Applied {
            deadline: self.deadline,
            used: self.used,
        }
    }
}
