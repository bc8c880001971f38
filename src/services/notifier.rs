//! Desktop notifications

use async_trait::async_trait;
use tracing::{debug, info, warn};

/// How loudly a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: &str, body: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            severity,
        }
    }

    pub fn five_minutes_left() -> Self {
        Self::new("Usage Timer", "5 Minutes Left!", Severity::Warning)
    }

    pub fn two_minutes_left() -> Self {
        Self::new("Usage Timer", "2 Minutes Left!", Severity::Warning)
    }

    pub fn countdown_reached() -> Self {
        Self::new("Usage Timer", "Countdown reached!", Severity::Error)
    }

    pub fn poweroff_failed() -> Self {
        Self::new("Error!", "Failed to poweroff", Severity::Error)
    }
}

/// Notification sink
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Fire-and-forget
    fn send(&self, notification: Notification);

    /// Resolves once the notification has been handed to the desktop.
    /// Used before actions that may take the desktop away.
    async fn deliver(&self, notification: Notification) {
        self.send(notification)
    }
}

/// Sends notifications through the desktop notification daemon
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        debug!("Desktop notifier created for {}", app_name);
        Self { app_name }
    }
}

// notify-rust blocks on the session bus
fn show(app_name: &str, notification: &Notification) {
    let urgency = match notification.severity {
        Severity::Warning => notify_rust::Urgency::Normal,
        Severity::Error => notify_rust::Urgency::Critical,
    };
    let res = notify_rust::Notification::new()
        .appname(app_name)
        .summary(&notification.title)
        .body(&notification.body)
        .urgency(urgency)
        .show();

    match res {
        Ok(_) => debug!(title = %notification.title, "notification shown"),
        Err(e) => {
            warn!(error = %e, "notify-rust failed to show notification");
            info!("[{}] {}", notification.title, notification.body);
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    fn send(&self, notification: Notification) {
        let app_name = self.app_name.clone();
        tokio::task::spawn_blocking(move || show(&app_name, &notification));
    }

    async fn deliver(&self, notification: Notification) {
        let app_name = self.app_name.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || show(&app_name, &notification)).await {
            warn!(error = %e, "notification task failed");
        }
    }
}

/// Writes notifications to the log only
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, notification: Notification) {
        match notification.severity {
            Severity::Warning => info!("[{}] {}", notification.title, notification.body),
            Severity::Error => warn!("[{}] {}", notification.title, notification.body),
        }
    }
}
