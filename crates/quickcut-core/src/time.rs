//! Time formatting and time spans.
//!
//! All timeline values are plain seconds (f64); this module provides the
//! display conversions and the inclusive span used for subtitle visibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format seconds as `MM:SS`, flooring partial seconds.
///
/// Negative inputs clamp to `00:00`.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format seconds as `MM:SS.cc` with a centisecond suffix.
pub fn format_timecode_centis(seconds: f64) -> String {
    let clamped = seconds.max(0.0);
    let total = clamped.floor() as u64;
    let centis = ((clamped - clamped.floor()) * 100.0).floor() as u64;
    format!("{:02}:{:02}.{:02}", total / 60, total % 60, centis)
}

/// A time span in seconds with inclusive start and inclusive end.
///
/// Subtitles use inclusive bounds on both ends: a subtitle spanning [2, 5]
/// is visible at exactly 2 and exactly 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start time (inclusive)
    pub start: f64,
    /// End time (inclusive)
    pub end: f64,
}

impl TimeSpan {
    /// Create a new time span.
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Span length in seconds.
    #[inline]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Whether a time falls within this span, inclusive at both endpoints.
    #[inline]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    /// A span is valid when it runs forward with non-zero length.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.end > self.start && self.start >= 0.0
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            format_timecode_centis(self.start),
            format_timecode_centis(self.end)
        )
    }
}
