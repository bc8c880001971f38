//! UI event loop: start flow, extension requests and render routing

use std::sync::Arc;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, error, info, warn};

use crate::{
    countdown::{DeadlineController, EngineEvent, EngineOutcome, Extension, TickEngine},
    error::InputError,
    input::{confirmation_text, parse_minutes},
    services::{Notifier, Shutdown},
    state::TimerState,
    ui::{Ui, UiCommand},
};

/// Result of a start request
#[derive(Debug)]
pub enum StartOutcome {
    Rejected(InputError),
    Declined,
    Started(Countdown),
}

/// A running countdown: the controller stays with the session, the engine
/// runs on its own task.
#[derive(Debug)]
pub struct Countdown {
    controller: DeadlineController,
    events: mpsc::UnboundedReceiver<EngineEvent>,
    worker: JoinHandle<EngineOutcome>,
}

/// Owns the UI and the deadline controller. All UI calls happen here.
pub struct Session<U: Ui> {
    ui: U,
    notifier: Arc<dyn Notifier>,
    shutdown: Arc<dyn Shutdown>,
    remote: mpsc::Receiver<UiCommand>,
    status: watch::Sender<TimerState>,
    assume_yes: bool,
}

impl<U: Ui> Session<U> {
    pub fn new(
        ui: U,
        notifier: Arc<dyn Notifier>,
        shutdown: Arc<dyn Shutdown>,
        remote: mpsc::Receiver<UiCommand>,
        status: watch::Sender<TimerState>,
    ) -> Self {
        Self {
            ui,
            notifier,
            shutdown,
            remote,
            status,
            assume_yes: false,
        }
    }

    /// Skip the confirmation prompt
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Wait for input until a countdown powers the machine off or the user
    /// quits. A failed power-off drops back to the prompt.
    ///
    /// Returns the outcome of the last countdown that ran.
    pub async fn run(mut self, initial_input: Option<String>) -> Option<EngineOutcome> {
        let mut pending = initial_input;
        let mut last = None;

        loop {
            let input = match pending.take() {
                Some(input) => input,
                None => {
                    self.ui.prompt_duration();
                    match self.next_idle_command().await {
                        Some(UiCommand::Start(input)) => input,
                        Some(UiCommand::MoreTime) => {
                            debug!("More time requested with no countdown running");
                            continue;
                        }
                        Some(UiCommand::Quit) | None => {
                            info!("Quitting");
                            return last;
                        }
                    }
                }
            };

            if let StartOutcome::Started(countdown) = self.request_start(&input).await {
                let outcome = self.run_countdown(countdown).await;
                if outcome.powered_off {
                    return Some(outcome);
                }
                warn!("Power-off did not happen, waiting for input again");
                last = Some(outcome);
            }
        }
    }

    /// Validate input, confirm, and spawn the tick engine
    pub async fn request_start(&mut self, input: &str) -> StartOutcome {
        let duration = match parse_minutes(input) {
            Ok(duration) => duration,
            Err(e) => {
                warn!("Rejected countdown input {:?}: {}", input, e);
                self.ui.show_error(&e.to_string());
                return StartOutcome::Rejected(e);
            }
        };

        if !self.assume_yes && !self.ui.ask_confirmation(&confirmation_text(input)).await {
            info!("Countdown start declined");
            return StartOutcome::Declined;
        }

        self.ui.set_controls_enabled(false);
        self.ui.set_extension_enabled(false);

        let (controller, updates) = DeadlineController::start(duration);
        let (events_tx, events) = mpsc::unbounded_channel();
        let engine = TickEngine::new(
            Arc::clone(&self.notifier),
            Arc::clone(&self.shutdown),
            events_tx,
        );
        let worker = tokio::spawn(engine.run(controller.deadline(), controller.total(), updates));

        info!("Countdown started for {:?}", duration);
        StartOutcome::Started(Countdown {
            controller,
            events,
            worker,
        })
    }

    /// Route engine events to the UI and extension requests to the controller
    /// until the engine finishes.
    pub async fn run_countdown(&mut self, mut countdown: Countdown) -> EngineOutcome {
        let mut state = TimerState::active(countdown.controller.total().as_secs(), 0.0);

        loop {
            tokio::select! {
                event = countdown.events.recv() => match event {
                    Some(EngineEvent::Render { remaining_secs, text, fraction }) => {
                        if remaining_secs == 0 {
                            countdown.controller.expire();
                            state.extension_available = false;
                        }
                        self.ui.render(&text, fraction);
                        state.remaining_seconds = Some(remaining_secs);
                        state.fraction = fraction;
                    }
                    Some(EngineEvent::RearmExtension) => {
                        let armed = countdown.controller.rearm();
                        debug!("Extension trigger {}", if armed { "re-armed" } else { "stays disabled" });
                        self.ui.set_extension_enabled(armed);
                        state.extension_available = armed;
                    }
                    Some(EngineEvent::Finished { powered_off }) => {
                        self.ui.finished(powered_off);
                        break;
                    }
                    None => break,
                },
                Some(command) = self.ui.next_command() => {
                    Self::handle_command(&mut self.ui, &mut countdown.controller, &mut state, command);
                }
                Some(command) = self.remote.recv() => {
                    Self::handle_command(&mut self.ui, &mut countdown.controller, &mut state, command);
                }
            }
            self.status.send_replace(state.clone());
        }

        let outcome = match countdown.worker.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Tick engine task failed: {}", e);
                EngineOutcome::default()
            }
        };

        self.status.send_replace(TimerState {
            extensions_used: countdown.controller.extensions_used(),
            ..TimerState::new()
        });
        self.ui.set_extension_enabled(false);
        self.ui.set_controls_enabled(true);
        outcome
    }

    fn handle_command(
        ui: &mut U,
        controller: &mut DeadlineController,
        state: &mut TimerState,
        command: UiCommand,
    ) {
        match command {
            UiCommand::MoreTime => match controller.extend() {
                Extension::Applied { used, .. } => {
                    ui.set_extension_enabled(false);
                    state.extensions_used = used;
                    state.extension_available = false;
                }
                Extension::Disarmed => debug!("More time ignored: trigger disabled"),
                Extension::Exhausted => debug!("More time ignored: no extensions left"),
                Extension::Expired => debug!("More time ignored: countdown already reached zero"),
            },
            UiCommand::Quit => info!("Quit ignored while a countdown is running"),
            UiCommand::Start(_) => debug!("Start ignored while a countdown is running"),
        }
    }

    async fn next_idle_command(&mut self) -> Option<UiCommand> {
        loop {
            tokio::select! {
                command = self.ui.next_command() => return command,
                Some(command) = self.remote.recv() => {
                    debug!("Remote command {:?} ignored while idle", command);
                }
            }
        }
    }
}
