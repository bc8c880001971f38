//! Terminal front-end on stdin/stdout

use std::io::Write;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, warn};

use super::{Ui, UiCommand};

const BAR_WIDTH: usize = 30;

/// Line-oriented terminal UI.
///
/// A background task forwards stdin lines; the UI reads them either as
/// commands or as answers to a confirmation prompt.
pub struct TerminalUi {
    lines: mpsc::UnboundedReceiver<String>,
    controls_enabled: bool,
    extension_enabled: bool,
    rendering: bool,
}

impl TerminalUi {
    pub fn spawn() -> Self {
        let (tx, lines) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut reader = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match reader.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!("stdin closed");
                        break;
                    }
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        break;
                    }
                }
            }
        });
        Self::from_lines(lines)
    }

    pub fn from_lines(lines: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            lines,
            controls_enabled: true,
            extension_enabled: false,
            rendering: false,
        }
    }

    fn end_render_line(&mut self) {
        if self.rendering {
            println!();
            self.rendering = false;
        }
    }
}

/// Text progress bar of `width` cells
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn flush() {
    if let Err(e) = std::io::stdout().flush() {
        debug!("stdout flush failed: {}", e);
    }
}

#[async_trait]
impl Ui for TerminalUi {
    fn prompt_duration(&mut self) {
        self.end_render_line();
        print!("Minutes (q to quit): ");
        flush();
    }

    async fn ask_confirmation(&mut self, text: &str) -> bool {
        self.end_render_line();
        print!("Are You Sure? {} [y/N] ", text);
        flush();
        match self.lines.recv().await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn show_error(&mut self, text: &str) {
        self.end_render_line();
        eprintln!("Error! {}", text);
    }

    fn render(&mut self, text: &str, fraction: f64) {
        let hint = if self.extension_enabled { "  (m: more time)" } else { "" };
        print!("\r{} {}{:<18}", progress_bar(fraction, BAR_WIDTH), text, hint);
        flush();
        self.rendering = true;
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn set_extension_enabled(&mut self, enabled: bool) {
        self.extension_enabled = enabled;
    }

    fn finished(&mut self, powered_off: bool) {
        self.end_render_line();
        if powered_off {
            println!("Countdown reached, powering off.");
        } else {
            println!("Countdown reached.");
        }
    }

    async fn next_command(&mut self) -> Option<UiCommand> {
        loop {
            let line = self.lines.recv().await?;
            match UiCommand::parse(&line) {
                Some(UiCommand::Quit) if !self.controls_enabled => {
                    debug!("Quit ignored while a countdown is running");
                }
                Some(command) => return Some(command),
                None => {}
            }
        }
    }
}
