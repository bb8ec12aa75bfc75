//! Typing-delay estimation from message text.

use std::time::Duration;

/// Simulated typing rate in words per minute.
const WORDS_PER_MINUTE: f64 = 450.0;

/// Estimates how long a human would take to type `text`: word count at 450 wpm (≈133.3 ms per
/// word), words split on single spaces. Zero for empty text; no upper bound for long text.
/// Deterministic and side-effect-free.
pub fn estimate_delay(text: &str) -> Duration {
    if text.is_empty() {
        return Duration::ZERO;
    }
    let words = text.split(' ').count() as f64;
    Duration::from_secs_f64(words * 60.0 / WORDS_PER_MINUTE)
}
