use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One entry of the post list document (`posts/posts.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub date: Timestamp,
    pub content: String,
    /// Number of thinking iterations.
    #[serde(default)]
    pub iterations: Option<f64>,
    /// Total thinking time in minutes.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// A single post document (`posts/{id}.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub date: Timestamp,
    pub thoughts: Vec<Thought>,
    #[serde(default)]
    pub conclusion: Option<String>,
    /// Total thinking time in minutes.
    #[serde(default)]
    pub total_duration: Option<f64>,
}

/// One step of a post's reasoning trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub text: String,
    pub timestamp: Timestamp,
    /// Recorded duration in seconds, only ever shown for the first iteration.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// A post document that parsed but cannot be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("post {id} has no thoughts")]
    EmptyThoughts { id: String },
}

impl PostDetail {
    /// Check the invariants rendering relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyThoughts`] when the reasoning trace is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.thoughts.is_empty() {
            return Err(ValidationError::EmptyThoughts {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// The final statement: the explicit conclusion, or the last thought.
    ///
    /// An empty conclusion counts as absent. Returns `None` only when there
    /// is neither a conclusion nor any thought.
    #[must_use]
    pub fn conclusion_text(&self) -> Option<&str> {
        self.conclusion
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.thoughts.last().map(|t| t.text.as_str()))
    }
}

/// A point in time as written by the document generator.
///
/// Accepts RFC 3339 strings, naive ISO-8601 date-times (`2025-01-15T14:30:05.123456`,
/// taken as wall-clock time), bare dates, and integer milliseconds since the epoch.
/// Naive values are stored with a zero offset so that they display as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    #[must_use]
    pub const fn new(inner: DateTime<FixedOffset>) -> Self {
        Self(inner)
    }

    /// Parse any of the accepted textual forms.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(dt));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Some(Self::from_naive(naive));
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::from_naive)
    }

    /// Build from milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| Self(dt.fixed_offset()))
    }

    fn from_naive(naive: NaiveDateTime) -> Self {
        Self(naive.and_utc().fixed_offset())
    }

    /// Wall-clock date and time in the timestamp's own offset.
    #[must_use]
    pub fn local(&self) -> NaiveDateTime {
        self.0.naive_local()
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 date-time string or milliseconds since the epoch")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        Timestamp::parse(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        Timestamp::from_millis(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        i64::try_from(value)
            .ok()
            .and_then(Timestamp::from_millis)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }
}
