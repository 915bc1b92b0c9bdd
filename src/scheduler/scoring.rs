//! Schedule quality metrics and preference scoring.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total gap | Sum over days of idle minutes between consecutive classes |
//! | Early morning | Sections starting before 9:00 AM (once per section) |
//! | Days per week | Distinct days with at least one class |
//! | Instructor matches | Sections taught by a preferred instructor |
//!
//! Only sections with a weekly meeting are counted. Asynchronous
//! sections contribute to no metric.
//!
//! # Score
//!
//! Starts at [`SCORE_MAX`], adjusted by each enabled preference, then
//! clamped to `[0, SCORE_MAX]`.

use std::collections::BTreeMap;

use crate::id::generate_id;
use crate::models::{
    Day, GeneratedSchedule, ScheduleEntry, ScheduleMetrics, SchedulerPreferences, TimeRange,
};

/// Classes starting before this minute are early-morning (9:00 AM).
pub const EARLY_MORNING_CUTOFF: i32 = 540;
/// Points lost per hour of gap.
pub const GAP_PENALTY_PER_HOUR: f64 = 2.0;
/// Points lost per early-morning class.
pub const EARLY_MORNING_PENALTY: f64 = 5.0;
/// Points gained per free weekday.
pub const FREE_DAY_BONUS: f64 = 10.0;
/// Points gained per preferred-instructor section.
pub const PREFERRED_INSTRUCTOR_BONUS: f64 = 5.0;
/// Upper score bound (and starting score).
pub const SCORE_MAX: f64 = 100.0;
/// Days in the week the free-day bonus is measured against.
pub const SCHOOL_WEEK_DAYS: u32 = 5;

impl ScheduleMetrics {
    /// Computes metrics for a complete set of entries.
    pub fn calculate(entries: &[ScheduleEntry], preferences: &SchedulerPreferences) -> Self {
        let mut early_morning_classes: u32 = 0;
        let mut preferred_instructor_matches: u32 = 0;
        let mut by_day: BTreeMap<Day, Vec<TimeRange>> = BTreeMap::new();

        let count_instructors = preferences.instructor_preference_active();

        for section in entries.iter().flat_map(ScheduleEntry::sections) {
            let Some((time, days)) = section.meeting() else {
                continue;
            };

            if time.start < EARLY_MORNING_CUTOFF {
                early_morning_classes += 1;
            }

            if count_instructors && section.taught_by_any(&preferences.preferred_instructors) {
                preferred_instructor_matches += 1;
            }

            for day in days {
                by_day.entry(*day).or_default().push(time);
            }
        }

        let days_per_week = by_day.len() as u32;
        let total_gap_minutes = by_day.into_values().map(day_gap_minutes).sum();

        Self {
            total_gap_minutes,
            early_morning_classes,
            days_per_week,
            preferred_instructor_matches,
        }
    }

    /// Derives the clamped preference score from these metrics.
    pub fn score(&self, preferences: &SchedulerPreferences) -> f64 {
        let mut score = SCORE_MAX;

        if preferences.minimize_gaps {
            score -= (self.total_gap_minutes as f64 / 60.0) * GAP_PENALTY_PER_HOUR;
        }

        if preferences.avoid_early_morning {
            score -= f64::from(self.early_morning_classes) * EARLY_MORNING_PENALTY;
        }

        if preferences.maximize_free_days {
            let days_off = i64::from(SCHOOL_WEEK_DAYS) - i64::from(self.days_per_week);
            score += days_off as f64 * FREE_DAY_BONUS;
        }

        if preferences.instructor_preference_active() {
            score += f64::from(self.preferred_instructor_matches) * PREFERRED_INSTRUCTOR_BONUS;
        }

        score.clamp(0.0, SCORE_MAX)
    }
}

/// Idle minutes between consecutive classes on one day.
///
/// Overlapping or touching classes contribute nothing.
fn day_gap_minutes(mut day: Vec<TimeRange>) -> i64 {
    day.sort_by_key(|t| t.start);
    day.windows(2)
        .map(|pair| (i64::from(pair[1].start) - i64::from(pair[0].end)).max(0))
        .sum()
}

/// Scores a complete candidate and wraps it with a fresh ID.
pub fn score_schedule(
    entries: Vec<ScheduleEntry>,
    preferences: &SchedulerPreferences,
) -> GeneratedSchedule {
    let metrics = ScheduleMetrics::calculate(&entries, preferences);
    let score = metrics.score(preferences);
    GeneratedSchedule {
        id: generate_id(),
        entries,
        score,
        metrics,
    }
}
