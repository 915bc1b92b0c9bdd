//! Auto-scheduler preferences.

use serde::{Deserialize, Serialize};

/// User preferences that drive schedule scoring.
///
/// Pure input; the engine never mutates it. The default has every
/// toggle off, which scores every schedule at 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerPreferences {
    /// Penalize idle time between same-day classes.
    pub minimize_gaps: bool,
    /// Penalize classes starting before 9:00 AM.
    pub avoid_early_morning: bool,
    /// Reward schedules with fewer days on campus.
    pub maximize_free_days: bool,
    /// Preferred instructor names.
    pub preferred_instructors: Vec<String>,
    /// Whether `preferred_instructors` is used.
    pub preferred_instructors_enabled: bool,
}

impl SchedulerPreferences {
    /// Creates preferences with every toggle off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables gap minimization.
    pub fn with_minimize_gaps(mut self) -> Self {
        self.minimize_gaps = true;
        self
    }

    /// Enables the early-morning penalty.
    pub fn with_avoid_early_morning(mut self) -> Self {
        self.avoid_early_morning = true;
        self
    }

    /// Enables the free-day bonus.
    pub fn with_maximize_free_days(mut self) -> Self {
        self.maximize_free_days = true;
        self
    }

    /// Enables the instructor bonus for the given names.
    pub fn with_preferred_instructors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_instructors = names.into_iter().map(Into::into).collect();
        self.preferred_instructors_enabled = true;
        self
    }

    /// Whether the instructor bonus applies: enabled and non-empty.
    pub fn instructor_preference_active(&self) -> bool {
        self.preferred_instructors_enabled && !self.preferred_instructors.is_empty()
    }
}
