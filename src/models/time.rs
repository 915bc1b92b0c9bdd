//! Time-of-day intervals and weekday codes.
//!
//! # Time Model
//! All times are minutes since midnight. A meeting is a [`TimeRange`]
//! repeated on each [`Day`] of a section's day list.
//!
//! Intervals are half-open: `[start, end)`. Touching intervals
//! (`a.end == b.start`) do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A day of the week, serialized as its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Monday through Friday.
    pub const WEEKDAYS: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Three-letter code (e.g. "Mon").
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A time-of-day interval [start, end) in minutes since midnight.
///
/// Serialized as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct TimeRange {
    /// Start minute (inclusive).
    pub start: i32,
    /// End minute (exclusive).
    pub end: i32,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Length of the interval in minutes.
    #[inline]
    pub fn duration(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Whether `end > start`.
    ///
    /// Ranges that fail this check are kept as data but carry no meeting
    /// time for conflict detection or scoring.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    /// Whether two ranges overlap: `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(i32, i32)> for TimeRange {
    fn from((start, end): (i32, i32)) -> Self {
        Self::new(start, end)
    }
}

impl From<TimeRange> for (i32, i32) {
    fn from(range: TimeRange) -> Self {
        (range.start, range.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", ClockTime(self.start), ClockTime(self.end))
    }
}

/// 12-hour clock rendering of a minute offset.
///
/// Offsets past midnight of the following day wrap and get a `⁺` suffix.
struct ClockTime(i32);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next_day = self.0 > MINUTES_PER_DAY;
        let minutes = if next_day {
            self.0 % MINUTES_PER_DAY
        } else {
            self.0
        };
        let hours = minutes / 60;
        let mins = minutes % 60;
        let period = if hours >= 12 { "PM" } else { "AM" };
        let display_hours = match hours {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        write!(f, "{display_hours}:{mins:02} {period}")?;
        if next_day {
            f.write_str("⁺")?;
        }
        Ok(())
    }
}
