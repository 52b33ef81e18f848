//! Count-up number animation, started the first time a counter scrolls into view.

use std::time::Duration;
use tokio::time::Instant;

/// Fraction of a counter that must be visible before it starts.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Default animation length.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1400);

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u64,
    suffix: String,
    duration: Duration,
    started: Option<Instant>,
    finished: bool,
}

impl Counter {
    pub fn new(target: u64, suffix: impl Into<String>, duration: Duration) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            duration,
            started: None,
            finished: false,
        }
    }

    /// Report how much of the counter is visible. Starts the animation the
    /// first time the threshold is reached; returns whether it started now.
    pub fn on_visible(&mut self, ratio: f64, now: Instant) -> bool {
        if self.started.is_some() || ratio < COUNTER_THRESHOLD {
            return false;
        }
        self.started = Some(now);
        true
    }

    pub fn is_animating(&self) -> bool {
        self.started.is_some() && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text for the frame at `now`, or `None` when the counter is not animating.
    pub fn frame(&mut self, now: Instant, group_separator: char) -> Option<String> {
        let started = self.started.filter(|_| !self.finished)?;
        let progress = self.progress(now.saturating_duration_since(started));
        let value = if progress >= 1.0 {
            self.finished = true;
            self.target
        } else {
            (progress * self.target as f64).floor() as u64
        };
        Some(format!("{}{}", group_digits(value, group_separator), self.suffix))
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// Format an integer with a separator between groups of three digits.
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
