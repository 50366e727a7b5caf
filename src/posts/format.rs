//! Display formatting for post fields.
//!
//! Dates are rendered the way the `ru-RU` locale writes them, numbers with
//! "missing or zero shows 0" semantics, and iteration durations are derived
//! from consecutive thought timestamps.

use chrono::{Datelike, Timelike};

use super::models::{Thought, Timestamp};
use crate::constants::EXCERPT_CHARS;

/// Genitive month names, as used after a day number.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Long date, e.g. `15 января 2025 г.`
#[must_use]
pub fn format_date(ts: &Timestamp) -> String {
    let local = ts.local();
    let month = MONTHS_GENITIVE[local.month0() as usize];
    format!("{} {month} {} г.", local.day(), local.year())
}

/// Long date with hours and minutes, e.g. `15 января 2025 г. в 14:30`
#[must_use]
pub fn format_date_time(ts: &Timestamp) -> String {
    let local = ts.local();
    format!(
        "{} в {:02}:{:02}",
        format_date(ts),
        local.hour(),
        local.minute()
    )
}

/// First [`EXCERPT_CHARS`] characters of `content` followed by `...`.
///
/// The cut is by character count and ignores word boundaries. The ellipsis
/// is always appended, also to shorter content.
#[must_use]
pub fn excerpt(content: &str) -> String {
    let mut out: String = content.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

/// Render an optional quantity, treating absent and zero alike as `0`.
///
/// Integral values print without a fractional part.
#[must_use]
pub fn display_quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => {
            if v.fract() == 0.0 && v.abs() < 1e15 {
                format!("{}", v as i64)
            } else {
                v.to_string()
            }
        }
        _ => "0".to_string(),
    }
}

/// Duration shown next to one iteration of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationDuration {
    /// First iteration: whatever the document recorded, if anything.
    Recorded(Option<f64>),
    /// Later iterations: whole seconds since the previous thought.
    Elapsed(i64),
}

impl std::fmt::Display for IterationDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recorded(value) => f.write_str(&display_quantity(*value)),
            Self::Elapsed(secs) => write!(f, "{secs}"),
        }
    }
}

/// One entry of a post's thinking timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration<'a> {
    /// 1-based position.
    pub number: usize,
    pub text: &'a str,
    pub duration: IterationDuration,
}

/// Derive the timeline from thoughts in document order.
///
/// Only the first entry uses its own `duration` field; every later entry shows
/// the rounded gap to its predecessor. Out-of-order timestamps yield zero or
/// negative gaps, which are kept as they are.
#[must_use]
pub fn timeline(thoughts: &[Thought]) -> Vec<Iteration<'_>> {
    thoughts
        .iter()
        .enumerate()
        .map(|(index, thought)| {
            let duration = if index == 0 {
                IterationDuration::Recorded(thought.duration)
            } else {
                let prev = &thoughts[index - 1].timestamp;
                IterationDuration::Elapsed(round_seconds(
                    thought.timestamp.millis() - prev.millis(),
                ))
            };
            Iteration {
                number: index + 1,
                text: &thought.text,
                duration,
            }
        })
        .collect()
}

/// Milliseconds to whole seconds, halves rounded towards positive infinity.
fn round_seconds(millis: i64) -> i64 {
    (millis as f64 / 1000.0 + 0.5).floor() as i64
}
