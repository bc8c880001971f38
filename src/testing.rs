//! Recording collaborators shared by unit tests

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    error::ShutdownError,
    services::{Notification, Notifier, Shutdown},
    ui::{Ui, UiCommand},
};

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

#[derive(Debug)]
pub struct RecordingShutdown {
    calls: AtomicUsize,
    fail: bool,
    delay: Duration,
}

impl RecordingShutdown {
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }

    /// Succeeds after `delay`, like a command that takes a while to return
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Shutdown for RecordingShutdown {
    async fn power_off(&self) -> Result<(), ShutdownError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(ShutdownError::Failed {
                command: "poweroff".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "Access denied".to_string(),
            });
        }
        Ok(())
    }
}

/// Calls observed by [`ScriptedUi`]
#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    Prompt,
    Confirm(String),
    Error(String),
    Render(String, f64),
    Controls(bool),
    Extension(bool),
    Finished(bool),
}

/// UI double with canned answers and commands; pends once commands run out.
///
/// `commands` are delivered at any time, `idle_commands` only while the
/// controls are enabled.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    answers: VecDeque<bool>,
    commands: VecDeque<UiCommand>,
    idle_commands: VecDeque<UiCommand>,
    controls_disabled: bool,
    calls: Arc<Mutex<Vec<UiCall>>>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, yes: bool) -> Self {
        self.answers.push_back(yes);
        self
    }

    pub fn command(mut self, command: UiCommand) -> Self {
        self.commands.push_back(command);
        self
    }

    pub fn idle_command(mut self, command: UiCommand) -> Self {
        self.idle_commands.push_back(command);
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<UiCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: UiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Ui for ScriptedUi {
    fn prompt_duration(&mut self) {
        self.record(UiCall::Prompt);
    }

    async fn ask_confirmation(&mut self, text: &str) -> bool {
        self.record(UiCall::Confirm(text.to_string()));
        self.answers.pop_front().unwrap_or(false)
    }

    fn show_error(&mut self, text: &str) {
        self.record(UiCall::Error(text.to_string()));
    }

    fn render(&mut self, text: &str, fraction: f64) {
        self.record(UiCall::Render(text.to_string(), fraction));
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_disabled = !enabled;
        self.record(UiCall::Controls(enabled));
    }

    fn set_extension_enabled(&mut self, enabled: bool) {
        self.record(UiCall::Extension(enabled));
    }

    fn finished(&mut self, powered_off: bool) {
        self.record(UiCall::Finished(powered_off));
    }

    async fn next_command(&mut self) -> Option<UiCommand> {
        if let Some(command) = self.commands.pop_front() {
            return Some(command);
        }
        if !self.controls_disabled {
            if let Some(command) = self.idle_commands.pop_front() {
                return Some(command);
            }
        }
        std::future::pending().await
    }
}
