//! Backtracking schedule generator.
//!
//! # Algorithm
//!
//! 1. Assign each course a palette color by input position.
//! 2. Depth-first over courses in input order: for each lecture (and, if
//!    the course has labs, each lab) that fits the branch, push the
//!    choice, recurse, pop.
//! 3. When every course has a choice, score the branch and collect it.
//! 4. Stable-sort the results by score, descending.
//!
//! The result cap is checked before every branch, so enumeration stops
//! as soon as the cap is reached. Truncation follows enumeration order
//! (courses × lectures × labs), not score: with a binding cap the
//! best-scoring schedules may not be among the results.
//!
//! # Complexity
//! O(Π options(c)) in the worst case, bounded by the result cap and the
//! optional node budget.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::palette::color_palette;
use super::scoring::score_schedule;
use crate::conflict::{conflicts_with_any, sections_conflict};
use crate::models::{Course, GeneratedSchedule, ScheduleEntry, SchedulerPreferences, Section};

/// Default result cap.
pub const DEFAULT_MAX_SCHEDULES: usize = 50;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Maximum number of schedules to collect.
    pub max_schedules: usize,
    /// Maximum number of search nodes to visit. `None` = unbounded.
    pub max_nodes: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_schedules: DEFAULT_MAX_SCHEDULES,
            max_nodes: None,
        }
    }
}

/// Enumerates conflict-free section combinations and ranks them.
///
/// # Example
///
/// ```
/// use u_course_scheduler::models::{Course, Day, SchedulerPreferences, Section};
/// use u_course_scheduler::scheduler::ScheduleGenerator;
///
/// let courses = vec![
///     Course::new("cs131").with_catalog_number("CS 131").with_lecture(
///         Section::new("A").with_days([Day::Mon, Day::Wed]).with_time(600, 680),
///     ),
///     Course::new("cs132").with_catalog_number("CS 132").with_lecture(
///         Section::new("B").with_days([Day::Mon, Day::Wed]).with_time(680, 760),
///     ),
/// ];
///
/// let schedules = ScheduleGenerator::new().generate(&courses, &SchedulerPreferences::default());
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].score, 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with the default cap of 50.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all settings.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the result cap.
    pub fn with_max_schedules(mut self, max_schedules: usize) -> Self {
        self.config.max_schedules = max_schedules;
        self
    }

    /// Sets a search node budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.config.max_nodes = Some(max_nodes);
        self
    }

    /// Current settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates ranked, conflict-free schedules for `courses`.
    ///
    /// Every result has one entry per course, in input order. A course
    /// without lecture options yields no results.
    pub fn generate(
        &self,
        courses: &[Course],
        preferences: &SchedulerPreferences,
    ) -> Vec<GeneratedSchedule> {
        if courses.is_empty() || self.config.max_schedules == 0 {
            return Vec::new();
        }

        let combinations = courses
            .iter()
            .map(Course::option_count)
            .fold(1usize, usize::saturating_mul);
        debug!(
            "generating schedules for {} courses ({} combinations before pruning, cap {}, \
             node budget {:?})",
            courses.len(),
            combinations,
            self.config.max_schedules,
            self.config.max_nodes
        );

        let mut search = Search {
            courses,
            colors: color_palette(courses.len()),
            preferences,
            config: &self.config,
            chosen: Vec::with_capacity(courses.len()),
            results: Vec::new(),
            nodes: 0,
            truncated: false,
        };
        search.backtrack(0);

        let Search {
            mut results, nodes, ..
        } = search;

        // Stable: equal scores keep enumeration order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!("generated {} schedules ({} nodes visited)", results.len(), nodes);
        results
    }
}

/// Generates schedules with a given cap (see [`ScheduleGenerator`]).
pub fn generate_schedules(
    courses: &[Course],
    preferences: &SchedulerPreferences,
    max_schedules: usize,
) -> Vec<GeneratedSchedule> {
    ScheduleGenerator::new()
        .with_max_schedules(max_schedules)
        .generate(courses, preferences)
}

#[derive(Debug, Clone, Copy)]
struct Choice<'a> {
    lecture: &'a Section,
    lab: Option<&'a Section>,
}

struct Search<'a> {
    courses: &'a [Course],
    colors: Vec<&'static str>,
    preferences: &'a SchedulerPreferences,
    config: &'a GeneratorConfig,
    chosen: Vec<Choice<'a>>,
    results: Vec<GeneratedSchedule>,
    nodes: u64,
    truncated: bool,
}

impl<'a> Search<'a> {
    fn backtrack(&mut self, index: usize) {
        self.nodes += 1;

        if index == self.courses.len() {
            self.emit();
            return;
        }

        let courses = self.courses;
        let course = &courses[index];

        for lecture in course.lectures() {
            if self.should_stop() {
                return;
            }
            if conflicts_with_any(lecture, self.chosen_sections()) {
                skipped(lecture);
                continue;
            }

            if !course.has_labs() {
                self.descend(index, Choice { lecture, lab: None });
                continue;
            }

            for lab in course.labs() {
                if self.should_stop() {
                    return;
                }
                if sections_conflict(lecture, lab).conflicts
                    || conflicts_with_any(lab, self.chosen_sections())
                {
                    skipped(lab);
                    continue;
                }
                self.descend(
                    index,
                    Choice {
                        lecture,
                        lab: Some(lab),
                    },
                );
            }
        }
    }

    fn descend(&mut self, index: usize, choice: Choice<'a>) {
        self.chosen.push(choice);
        self.backtrack(index + 1);
        self.chosen.pop();
    }

    /// Checked before every branch. Logs the reason once per run.
    fn should_stop(&mut self) -> bool {
        if self.truncated {
            return true;
        }
        if self.results.len() >= self.config.max_schedules {
            trace!("result cap {} reached", self.config.max_schedules);
            self.truncated = true;
        } else if let Some(budget) = self.config.max_nodes.filter(|&b| self.nodes >= b) {
            trace!("node budget {budget} exhausted");
            self.truncated = true;
        }
        self.truncated
    }

    fn chosen_sections(&self) -> impl Iterator<Item = &'a Section> + '_ {
        self.chosen
            .iter()
            .flat_map(|c| std::iter::once(c.lecture).chain(c.lab))
    }

    fn emit(&mut self) {
        let entries: Vec<ScheduleEntry> = self
            .chosen
            .iter()
            .zip(self.courses)
            .zip(&self.colors)
            .map(|((choice, course), color)| {
                ScheduleEntry::new(
                    course,
                    Some(choice.lecture.clone()),
                    choice.lab.cloned(),
                    *color,
                )
            })
            .collect();
        self.results.push(score_schedule(entries, self.preferences));
    }
}

fn skipped(section: &Section) {
    if let Some((time, days)) = section.meeting() {
        trace!("section {} ({days:?} {time}) conflicts with branch, skipped", section.id);
    }
}
