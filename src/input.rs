//! Duration input parsing

use std::time::Duration;

use crate::error::InputError;

/// Parse a user-entered number of minutes (integer or decimal).
///
/// Zero and negative values are rejected rather than producing an empty countdown.
pub fn parse_minutes(input: &str) -> Result<Duration, InputError> {
    let minutes: f64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;

    if minutes.is_nan() {
        return Err(InputError::NotANumber);
    }
    if minutes <= 0.0 {
        return Err(InputError::NotPositive);
    }

    let duration = Duration::try_from_secs_f64(minutes * 60.0).map_err(|_| InputError::OutOfRange)?;
    // Sub-second durations would end before the first tick
    if duration < Duration::from_secs(1) {
        return Err(InputError::TooShort);
    }
    Ok(duration)
}

/// Question shown before a countdown is committed
pub fn confirmation_text(input: &str) -> String {
    format!("Would you like to start a timer for {} minutes?", input.trim())
}
