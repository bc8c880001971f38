//! Shared state for the HTTP control surface

use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tracing::warn;

use super::TimerState;
use crate::ui::UiCommand;

/// State handed to the control endpoints.
///
/// Holds no countdown data of its own: commands go to the session over a
/// channel and status comes from the session's watch channel.
#[derive(Debug)]
pub struct AppState {
    pub app_name: String,
    pub start_time: Instant,
    commands: mpsc::Sender<UiCommand>,
    timer_rx: watch::Receiver<TimerState>,
}

impl AppState {
    pub fn new(
        app_name: String,
        commands: mpsc::Sender<UiCommand>,
        timer_rx: watch::Receiver<TimerState>,
    ) -> Self {
        Self {
            app_name,
            start_time: Instant::now(),
            commands,
            timer_rx,
        }
    }

    /// Queue a "more time" request without waiting for the session
    pub fn request_more_time(&self) -> Result<(), String> {
        self.commands.try_send(UiCommand::MoreTime).map_err(|e| {
            warn!("Failed to queue more-time request: {}", e);
            format!("Failed to queue more-time request: {}", e)
        })
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> TimerState {
        self.timer_rx.borrow().clone()
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn more_time_is_forwarded_to_the_session() {
        let (tx, mut rx) = mpsc::channel(1);
        let (_status_tx, status_rx) = watch::channel(TimerState::new());
        let state = AppState::new("Usage Timer".to_string(), tx, status_rx);

        state.request_more_time().unwrap();
        assert_eq!(rx.recv().await, Some(UiCommand::MoreTime));
    }

    #[tokio::test]
    async fn full_or_closed_queue_is_an_error() {
        let (tx, rx) = mpsc::channel(1);
        let (_status_tx, status_rx) = watch::channel(TimerState::new());
        let state = AppState::new("Usage Timer".to_string(), tx, status_rx);

        state.request_more_time().unwrap();
        assert!(state.request_more_time().is_err());
        drop(rx);
        assert!(state.request_more_time().is_err());
    }

    #[test]
    fn status_reflects_latest_publication() {
        let (tx, _rx) = mpsc::channel(1);
        let (status_tx, status_rx) = watch::channel(TimerState::new());
        let state = AppState::new("Usage Timer".to_string(), tx, status_rx);

        status_tx.send_replace(TimerState::active(10, 0.9));
        assert_eq!(state.get_timer_state().remaining_seconds(), Some(10));
        assert_eq!(state.get_uptime(), "0s");
    }
}
