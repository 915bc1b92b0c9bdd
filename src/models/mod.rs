//! Course scheduling domain models.
//!
//! Canonical in-memory representation of the catalog (courses, sections,
//! meeting times) and of schedules built from it. Catalog ingestion and
//! normalization happen outside this crate; these types are the single
//! shape every engine pass works on.
//!
//! # Domain Mappings
//!
//! | Type | Meaning |
//! |------|---------|
//! | Course | Catalog course with lecture and optional lab offerings |
//! | Section | One meeting pattern (days × time range) |
//! | ScheduleEntry | One course's chosen lecture (+ lab) |
//! | GeneratedSchedule | Scored, conflict-free candidate |
//! | Schedule | Saved, named selection |

mod course;
mod preferences;
mod schedule;
mod section;
mod time;

pub use course::{Course, CourseSections};
pub use preferences::SchedulerPreferences;
pub use schedule::{
    GeneratedSchedule, Schedule, ScheduleEntry, ScheduleMetrics, SchedulerState, TimeConflict,
};
pub use section::Section;
pub use time::{Day, TimeRange, MINUTES_PER_DAY};
