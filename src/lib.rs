//! Course section scheduling for the U-Engine ecosystem.
//!
//! Detects time conflicts between course sections and enumerates every
//! conflict-free combination of sections across a set of courses, ranked
//! by user preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Section`, `TimeRange`, `Day`,
//!   `ScheduleEntry`, `GeneratedSchedule`, `Schedule`, `SchedulerPreferences`
//! - **`conflict`**: Pairwise section conflicts, schedule-wide conflict
//!   reports, and "can this section be added" checks
//! - **`scheduler`**: Backtracking generator, preference scoring, color palette
//! - **`store`**: Key-value persistence of selections for the application shell
//!
//! # Architecture
//!
//! The engine (`conflict`, `scheduler`) is a pure function of its inputs:
//! no I/O, no shared state, safe to call concurrently on independent data.
//! Catalog loading and rendering live outside this crate; `store` is the
//! only fallible, stateful part and is never used by the engine.
//!
//! # Example
//!
//! ```
//! use u_course_scheduler::conflict::{find_schedule_conflicts, sections_conflict};
//! use u_course_scheduler::models::{Course, Day, SchedulerPreferences, Section};
//! use u_course_scheduler::scheduler::generate_schedules;
//!
//! let a = Section::new("A").with_days([Day::Mon, Day::Wed]).with_time(600, 680);
//! let b = Section::new("B").with_days([Day::Mon, Day::Wed]).with_time(620, 700);
//! assert_eq!(sections_conflict(&a, &b).days, vec![Day::Mon, Day::Wed]);
//!
//! let courses = vec![
//!     Course::new("cs131").with_catalog_number("CS 131").with_lecture(a),
//!     Course::new("cs132").with_catalog_number("CS 132").with_lecture(b),
//! ];
//! let schedules = generate_schedules(&courses, &SchedulerPreferences::default(), 50);
//! assert!(schedules.is_empty());
//! assert!(find_schedule_conflicts(&[]).is_empty());
//! ```

pub mod conflict;
pub mod error;
pub mod id;
pub mod models;
pub mod scheduler;
pub mod store;

pub use error::{Result, StoreError};
