//! Notifier and power-off collaborators

pub mod notifier;
pub mod system;

pub use notifier::{DesktopNotifier, LogNotifier, Notification, Notifier, Severity};
pub use system::{check_poweroff_available, CommandShutdown, DryRunShutdown, Shutdown};
