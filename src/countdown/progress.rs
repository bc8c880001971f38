//! Progress bar fraction and remaining-time text

/// Fraction of the countdown that has elapsed, in `[0, 1]`.
///
/// Each tick moves the bar by `(1 - fraction) / remaining_secs`, so the bar
/// always lands on 1.0 at the deadline, even after the deadline moved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    fraction: f64,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Advance by one tick with `remaining_secs` left on the clock
    pub fn advance(&mut self, remaining_secs: u64) -> f64 {
        let next = if remaining_secs == 0 {
            1.0
        } else {
            self.fraction + (1.0 - self.fraction) / remaining_secs as f64
        };
        self.fraction = next.clamp(self.fraction, 1.0);
        self.fraction
    }
}

/// Render seconds as zero-padded `HH:MM:SS Left`
pub fn format_remaining(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02} Left", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded_clock() {
        assert_eq!(format_remaining(0), "00:00:00 Left");
        assert_eq!(format_remaining(59), "00:00:59 Left");
        assert_eq!(format_remaining(300), "00:05:00 Left");
        assert_eq!(format_remaining(3 * 3600 + 2 * 60 + 1), "03:02:01 Left");
        assert_eq!(format_remaining(30 * 3600), "30:00:00 Left");
    }

    #[test]
    fn reaches_one_exactly_at_the_deadline() {
        let mut progress = Progress::new();
        for remaining in (1..=60).rev() {
            progress.advance(remaining);
        }
        assert!((progress.fraction() - 1.0).abs() < 1e-9);
        assert_eq!(progress.advance(0), 1.0);
    }

    #[test]
    fn stays_monotonic_and_bounded_across_an_extension() {
        let mut progress = Progress::new();
        let mut last = 0.0;
        let mut remaining: Vec<u64> = (290..=400).rev().collect();
        // extension of five minutes applied at 290 seconds left
        remaining.extend((1..=590).rev());
        remaining.push(0);

        for secs in remaining {
            let fraction = progress.advance(secs);
            assert!(fraction >= last, "fraction went backwards at {secs}s");
            assert!(fraction <= 1.0, "fraction overshot at {secs}s");
            last = fraction;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn overshooting_inputs_are_clamped() {
        let mut progress = Progress::new();
        progress.advance(1);
        assert_eq!(progress.fraction(), 1.0);
        progress.advance(1);
        assert_eq!(progress.fraction(), 1.0);
    }
}
