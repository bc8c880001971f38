//! UI collaborator
//!
//! Everything the countdown needs from a front-end goes through [`Ui`]. Only
//! the session's event loop calls it, so implementations never see calls from
//! the tick engine's task.

pub mod terminal;

use async_trait::async_trait;

pub use terminal::TerminalUi;

/// User action delivered to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Start a countdown with the entered text as minutes
    Start(String),
    /// Request an extension of the running countdown
    MoreTime,
    Quit,
}

impl UiCommand {
    /// Map a line of user input to a command; blank lines map to nothing
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "m" | "more" | "more time" => Some(Self::MoreTime),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => Some(Self::Start(line.to_string())),
        }
    }
}

#[async_trait]
pub trait Ui: Send {
    /// Ask for a countdown duration
    fn prompt_duration(&mut self);

    async fn ask_confirmation(&mut self, text: &str) -> bool;

    fn show_error(&mut self, text: &str);

    fn render(&mut self, text: &str, fraction: f64);

    /// Enable or disable the start and quit controls
    fn set_controls_enabled(&mut self, enabled: bool);

    /// Enable or disable the "more time" trigger
    fn set_extension_enabled(&mut self, enabled: bool);

    fn finished(&mut self, powered_off: bool);

    /// Next user action, `None` once input is closed.
    ///
    /// Must be cancel safe: the session polls it inside `select!`.
    async fn next_command(&mut self) -> Option<UiCommand>;
}
