//! Error types shared across the timer

use thiserror::Error;

/// Rejected duration input. Never fatal: the caller shows it and stays idle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Time must be a number")]
    NotANumber,

    #[error("Time must be greater than zero")]
    NotPositive,

    #[error("Time must be at least one second")]
    TooShort,

    #[error("Time is too large")]
    OutOfRange,
}

/// Failure of the power-off collaborator.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("no power-off command configured")]
    NoCommand,

    #[error("{command} is not available on this system")]
    Unavailable { command: String },

    #[error("failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}
