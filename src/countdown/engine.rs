//! Tick engine: drives the countdown once per second until it expires

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use super::{
    progress::{format_remaining, Progress},
    thresholds::{Crossing, ThresholdTracker},
};
use crate::{
    config::{DISPLAY_COMPENSATION, TICK_INTERVAL},
    services::{Notification, Notifier, Shutdown},
};

/// Messages from the engine to the UI event loop
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Render {
        remaining_secs: u64,
        text: String,
        fraction: f64,
    },
    /// Five-minute mark crossed; the UI may re-enable "more time"
    RearmExtension,
    Finished { powered_off: bool },
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutcome {
    pub ticks: u64,
    pub extensions_applied: u32,
    pub powered_off: bool,
}

pub struct TickEngine {
    notifier: Arc<dyn Notifier>,
    shutdown: Arc<dyn Shutdown>,
    events: mpsc::UnboundedSender<EngineEvent>,
    interval: Duration,
}

impl TickEngine {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        shutdown: Arc<dyn Shutdown>,
        events: mpsc::UnboundedSender<EngineEvent>,
    ) -> Self {
        Self {
            notifier,
            shutdown,
            events,
            interval: TICK_INTERVAL,
        }
    }

    /// Run until the deadline passes. `total` is the span from start to the
    /// initial deadline; `updates` carries extended deadlines.
    ///
    /// There is no cancellation path: the loop only exits at zero.
    pub async fn run(
        self,
        initial_deadline: Instant,
        total: Duration,
        mut updates: mpsc::UnboundedReceiver<Instant>,
    ) -> EngineOutcome {
        let mut deadline = initial_deadline;
        let mut progress = Progress::new();
        let mut thresholds = ThresholdTracker::new(total.as_secs());
        let mut outcome = EngineOutcome::default();

        info!("Tick engine started, {:?} on the clock", total);
        self.render(total.saturating_sub(DISPLAY_COMPENSATION).as_secs(), progress.fraction());

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            outcome.ticks += 1;

            while let Ok(extended) = updates.try_recv() {
                debug!("Deadline update received");
                deadline = extended;
                outcome.extensions_applied += 1;
            }

            let remaining_secs = deadline.saturating_duration_since(Instant::now()).as_secs();
            let fraction = progress.advance(remaining_secs);
            self.render(remaining_secs, fraction);

            for crossing in thresholds.observe(remaining_secs) {
                match crossing {
                    Crossing::FiveMinutes { notify } => {
                        if notify {
                            self.notifier.send(Notification::five_minutes_left());
                        }
                        self.emit(EngineEvent::RearmExtension);
                    }
                    Crossing::TwoMinutes => {
                        self.notifier.send(Notification::two_minutes_left());
                    }
                    Crossing::Expired => {
                        outcome.powered_off = self.expire().await;
                    }
                }
            }

            if thresholds.is_expired() {
                break;
            }
        }

        self.emit(EngineEvent::Finished {
            powered_off: outcome.powered_off,
        });
        info!("Tick engine finished after {} ticks", outcome.ticks);
        outcome
    }

    async fn expire(&self) -> bool {
        info!("Countdown reached zero");
        // shown before the machine goes down
        self.notifier.deliver(Notification::countdown_reached()).await;

        match self.shutdown.power_off().await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to power off: {}", e);
                self.notifier.send(Notification::poweroff_failed());
                false
            }
        }
    }

    fn render(&self, remaining_secs: u64, fraction: f64) {
        self.emit(EngineEvent::Render {
            remaining_secs,
            text: format_remaining(remaining_secs),
            fraction,
        });
    }

    fn emit(&self, event: EngineEvent) {
        if self.events.send(event).is_err() {
            debug!("UI event loop gone, dropping engine event");
        }
    }
}
