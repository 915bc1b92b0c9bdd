//! Section model.
//!
//! A section is one offered meeting pattern (lecture or lab) of a course.
//! Sections without a meeting time or without days are asynchronous:
//! they never conflict and never count toward schedule metrics.

use serde::{Deserialize, Serialize};

use super::{Day, TimeRange};

/// One offered section of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Section number as printed in the catalog (e.g. "01").
    pub number: String,
    /// Term the section is offered in.
    pub term: String,
    /// Instructor names, in catalog order.
    #[serde(rename = "instructor", default)]
    pub instructors: Vec<String>,
    /// Delivery mode (e.g. "In Person", "Online").
    #[serde(default)]
    pub delivery: String,
    /// Meeting days. `None` or empty = asynchronous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Day>>,
    /// Meeting time. `None` = asynchronous.
    pub time: Option<TimeRange>,
    /// Seat counts `[taken, capacity]`.
    #[serde(default)]
    pub seats: Option<(u32, u32)>,
}

impl Section {
    /// Creates an asynchronous section with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: String::new(),
            term: String::new(),
            instructors: Vec::new(),
            delivery: String::new(),
            days: None,
            time: None,
            seats: None,
        }
    }

    /// Sets the section number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructors.push(name.into());
        self
    }

    /// Sets the delivery mode.
    pub fn with_delivery(mut self, delivery: impl Into<String>) -> Self {
        self.delivery = delivery.into();
        self
    }

    /// Sets the meeting days.
    pub fn with_days(mut self, days: impl IntoIterator<Item = Day>) -> Self {
        self.days = Some(days.into_iter().collect());
        self
    }

    /// Sets the meeting time (minutes since midnight).
    pub fn with_time(mut self, start: i32, end: i32) -> Self {
        self.time = Some(TimeRange::new(start, end));
        self
    }

    /// Sets the seat counts.
    pub fn with_seats(mut self, taken: u32, capacity: u32) -> Self {
        self.seats = Some((taken, capacity));
        self
    }

    /// Meeting days, empty if none are listed.
    pub fn day_list(&self) -> &[Day] {
        self.days.as_deref().unwrap_or(&[])
    }

    /// The section's weekly meeting, if it has one.
    ///
    /// Returns `None` for sections with no time, a malformed time
    /// (`end <= start`), or no days.
    pub fn meeting(&self) -> Option<(TimeRange, &[Day])> {
        let time = self.time.filter(TimeRange::is_well_formed)?;
        let days = self.day_list();
        if days.is_empty() {
            return None;
        }
        Some((time, days))
    }

    /// Whether this section has no weekly meeting.
    pub fn is_asynchronous(&self) -> bool {
        self.meeting().is_none()
    }

    /// Whether any instructor appears in `preferred`.
    pub fn taught_by_any(&self, preferred: &[String]) -> bool {
        self.instructors.iter().any(|inst| preferred.contains(inst))
    }
}
