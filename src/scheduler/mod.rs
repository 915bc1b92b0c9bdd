//! Schedule generation and scoring.
//!
//! Provides the backtracking generator that enumerates conflict-free
//! section combinations, the preference scorer that ranks them, and the
//! course color palette.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` performs an exhaustive depth-first search over
//! per-course choices (lecture × optional lab), pruning any branch whose
//! newest section conflicts with an earlier choice. It is bounded by a
//! result cap and an optional node budget.
//!
//! # Scoring
//!
//! `ScheduleMetrics` computes gap, early-morning, day-count and
//! instructor metrics; `ScheduleMetrics::score` turns them into a
//! bounded preference score.

mod generator;
mod palette;
mod scoring;

pub use generator::{generate_schedules, GeneratorConfig, ScheduleGenerator, DEFAULT_MAX_SCHEDULES};
pub use palette::{color_palette, course_color, PALETTE};
pub use scoring::{
    score_schedule, EARLY_MORNING_CUTOFF, EARLY_MORNING_PENALTY, FREE_DAY_BONUS,
    GAP_PENALTY_PER_HOUR, PREFERRED_INSTRUCTOR_BONUS, SCHOOL_WEEK_DAYS, SCORE_MAX,
};
