//! State shared with the control surface

pub mod app_state;
pub mod timer_state;

pub use app_state::AppState;
pub use timer_state::TimerState;
