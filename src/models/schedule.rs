//! Schedule models.
//!
//! A schedule is one section choice per course. The same [`ScheduleEntry`]
//! shape is used by generated candidates ([`GeneratedSchedule`]) and by
//! saved, named schedules ([`Schedule`]), so a generated result can be
//! stored without transformation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Course, Day, Section};
use crate::id::generate_id;

/// One course's selection within a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Course identifier.
    pub course_id: String,
    /// Course catalog number (e.g. "CS 131").
    pub course_catalog_number: String,
    /// Department name.
    pub course_department: String,
    /// Course title.
    pub course_title: String,
    /// Selected lecture. Always present in generated entries; may be
    /// `None` while a user is still building a schedule by hand.
    pub selected_lecture: Option<Section>,
    /// Selected lab, present only if the course offers labs.
    pub selected_lab: Option<Section>,
    /// Display color (hex code).
    pub color: String,
}

impl ScheduleEntry {
    /// Creates an entry for `course` with the given choices.
    pub fn new(
        course: &Course,
        lecture: Option<Section>,
        lab: Option<Section>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course.id.clone(),
            course_catalog_number: course.catalog_number.clone(),
            course_department: course.department.clone(),
            course_title: course.title.clone(),
            selected_lecture: lecture,
            selected_lab: lab,
            color: color.into(),
        }
    }

    /// Chosen sections: lecture first, then lab.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.selected_lecture
            .iter()
            .chain(self.selected_lab.iter())
    }
}

/// Derived quality metrics of one schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Idle minutes between consecutive same-day classes, summed over days.
    pub total_gap_minutes: i64,
    /// Sections starting before 9:00 AM.
    pub early_morning_classes: u32,
    /// Distinct days with at least one class.
    pub days_per_week: u32,
    /// Sections taught by a preferred instructor.
    pub preferred_instructor_matches: u32,
}

/// A conflict-free candidate produced by the generator.
///
/// Identity is the random `id`; two candidates with identical content
/// are still distinct results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchedule {
    /// Fresh random identifier.
    pub id: String,
    /// One entry per input course, in input order.
    pub entries: Vec<ScheduleEntry>,
    /// Preference score in [0, 100].
    pub score: f64,
    /// Metrics the score was derived from.
    pub metrics: ScheduleMetrics,
}

impl GeneratedSchedule {
    /// Section IDs in entry order (lecture, then lab, per entry).
    pub fn section_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(ScheduleEntry::sections)
            .map(|s| s.id.as_str())
            .collect()
    }
}

/// A saved, named schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Unique identifier.
    pub id: String,
    /// User-defined name (e.g. "Plan A").
    pub name: String,
    /// Course entries.
    pub entries: Vec<ScheduleEntry>,
    /// Creation time (epoch ms).
    pub created_at: i64,
    /// Last modification time (epoch ms).
    pub updated_at: i64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_entries(name, Vec::new())
    }

    /// Creates a schedule holding the given entries.
    pub fn with_entries(name: impl Into<String>, entries: Vec<ScheduleEntry>) -> Self {
        let now = now_ms();
        Self {
            id: generate_id(),
            name: name.into(),
            entries,
            created_at: now,
            updated_at: now,
        }
    }

    /// Saves a generated candidate under `name`, entries copied unchanged.
    pub fn from_generated(name: impl Into<String>, generated: &GeneratedSchedule) -> Self {
        Self::with_entries(name, generated.entries.clone())
    }

    /// Replaces the entries and bumps `updated_at`.
    pub fn set_entries(&mut self, entries: Vec<ScheduleEntry>) {
        self.entries = entries;
        self.touch();
    }

    /// Renames and bumps `updated_at`.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = now_ms().max(self.updated_at);
    }
}

/// All saved schedules plus the active one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerState {
    /// Saved schedules, in creation order.
    pub schedules: Vec<Schedule>,
    /// ID of the schedule being edited.
    pub active_schedule_id: Option<String>,
}

impl SchedulerState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty schedule and makes it active. Returns its ID.
    pub fn create_schedule(&mut self, name: impl Into<String>) -> String {
        self.insert_active(Schedule::new(name))
    }

    /// Saves a generated candidate under `name` and makes it active.
    /// Returns the new schedule's ID.
    pub fn save_generated(
        &mut self,
        name: impl Into<String>,
        generated: &GeneratedSchedule,
    ) -> String {
        self.insert_active(Schedule::from_generated(name, generated))
    }

    fn insert_active(&mut self, schedule: Schedule) -> String {
        let id = schedule.id.clone();
        self.schedules.push(schedule);
        self.active_schedule_id = Some(id.clone());
        id
    }

    /// Finds a schedule by ID.
    pub fn get(&self, id: &str) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// Finds a schedule by ID (mutable).
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Schedule> {
        self.schedules.iter_mut().find(|s| s.id == id)
    }

    /// Renames a schedule. Returns `false` if it does not exist.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(schedule) => {
                schedule.rename(name);
                true
            }
            None => false,
        }
    }

    /// Deletes a schedule, clearing the active ID if it pointed there.
    /// Returns the removed schedule.
    pub fn delete(&mut self, id: &str) -> Option<Schedule> {
        let idx = self.schedules.iter().position(|s| s.id == id)?;
        if self.active_schedule_id.as_deref() == Some(id) {
            self.active_schedule_id = None;
        }
        Some(self.schedules.remove(idx))
    }

    /// Makes a schedule active. Returns `false` if it does not exist.
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active_schedule_id = Some(id.to_string());
        true
    }

    /// The active schedule, if any.
    pub fn active(&self) -> Option<&Schedule> {
        self.active_schedule_id.as_deref().and_then(|id| self.get(id))
    }
}

/// A day on which two chosen sections overlap.
///
/// One conflict is reported per overlapping day, not one per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConflict {
    /// First section of the pair.
    pub section1: Section,
    /// Second section of the pair.
    pub section2: Section,
    /// Course label of `section1`.
    pub course1: String,
    /// Course label of `section2`.
    pub course2: String,
    /// Day of the conflict.
    pub day: Day,
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
