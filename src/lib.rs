//! Usage Timer - a countdown that warns before powering off the machine
//!
//! The countdown core lives in [`countdown`]; [`app::Session`] wires it to a
//! [`ui::Ui`] front-end and the notifier/power-off collaborators.

pub mod api;
pub mod app;
pub mod config;
pub mod countdown;
pub mod error;
pub mod input;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use app::Session;
pub use config::Config;
pub use countdown::{DeadlineController, TickEngine};
pub use utils::signals::shutdown_signal;
