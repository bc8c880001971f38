//! Countdown core
//!
//! The deadline controller lives on the UI side and hands extended deadlines
//! to the tick engine over a channel; the engine reports back with
//! [`EngineEvent`]s and never touches the UI directly.

pub mod deadline;
pub mod engine;
pub mod progress;
pub mod thresholds;

pub use deadline::{DeadlineController, Extension};
pub use engine::{EngineEvent, EngineOutcome, TickEngine};
pub use progress::{format_remaining, Progress};
pub use thresholds::{Crossing, ThresholdTracker};
