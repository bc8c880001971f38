//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Interval between two ticks of the countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// Added to the deadline so the first rendered value equals the entered duration
pub const DISPLAY_COMPENSATION: Duration = Duration::from_secs(1);
/// Amount of time a single "more time" request adds
pub const EXTENSION_DELTA: Duration = Duration::from_secs(5 * 60);
/// Maximum number of extensions per countdown
pub const EXTENSION_CAP: u32 = 2;
/// First warning, also the point where the extension trigger is re-armed
pub const FIRST_WARNING_SECS: u64 = 300;
pub const SECOND_WARNING_SECS: u64 = 120;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "usage-timer")]
#[command(about = "A countdown usage timer that warns before powering off the machine")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Countdown duration in minutes (prompted for when omitted)
    #[arg(short, long)]
    pub minutes: Option<String>,

    /// Start without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Never power off; only report that the countdown finished
    #[arg(long)]
    pub dry_run: bool,

    /// Command executed when the countdown reaches zero
    #[arg(long, default_value = "/usr/bin/poweroff")]
    pub poweroff_command: String,

    /// Application name used for desktop notifications
    #[arg(long, default_value = "Usage Timer")]
    pub app_name: String,

    /// Log notifications instead of sending them to the desktop
    #[arg(long)]
    pub no_notify: bool,

    /// Serve the HTTP control endpoints
    #[arg(long)]
    pub listen: bool,

    /// Port for the control endpoints
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address for the control endpoints
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the control server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Split the power-off command into program and arguments
    pub fn poweroff_argv(&self) -> Vec<String> {
        self.poweroff_command
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_behaviour() {
        let config = Config::try_parse_from(["usage-timer"]).unwrap();
        assert_eq!(config.minutes, None);
        assert!(!config.dry_run);
        assert!(!config.listen);
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.poweroff_argv(), vec!["/usr/bin/poweroff"]);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn poweroff_command_is_split_into_argv() {
        let config = Config::try_parse_from([
            "usage-timer",
            "--poweroff-command",
            "systemctl poweroff -i",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.poweroff_argv(), vec!["systemctl", "poweroff", "-i"]);
        assert_eq!(config.log_level(), "debug");
    }
}
