//! Time conflict detection between sections and within schedules.
//!
//! Two sections conflict on a day when both meet that day and their
//! time ranges overlap. Sections without a weekly meeting (no time,
//! malformed time, or no days) never conflict.
//!
//! All checks here report every conflict found rather than stopping at
//! the first, so interactive callers can show complete feedback. They
//! are usable standalone, independent of the generator.

use crate::models::{Day, ScheduleEntry, Section, TimeConflict};

/// Course label used for the candidate side of [`can_add_section`].
pub const CANDIDATE_LABEL: &str = "New";

/// Result of comparing two sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionConflict {
    /// Whether the sections collide.
    pub conflicts: bool,
    /// Every shared day on which they collide (empty if no conflict).
    pub days: Vec<Day>,
}

impl SectionConflict {
    fn none() -> Self {
        Self::default()
    }
}

/// Result of checking a candidate section against a schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddSectionCheck {
    /// Whether the candidate fits without conflict.
    pub can_add: bool,
    /// All conflicts found, one per conflicting day per section pair.
    pub conflicts: Vec<TimeConflict>,
}

/// Determines whether two sections collide, and on which days.
///
/// Days are reported in `s1`'s day order. Symmetric up to that ordering.
pub fn sections_conflict(s1: &Section, s2: &Section) -> SectionConflict {
    let (Some((t1, days1)), Some((t2, days2))) = (s1.meeting(), s2.meeting()) else {
        return SectionConflict::none();
    };

    if !t1.overlaps(&t2) {
        return SectionConflict::none();
    }

    let mut days: Vec<Day> = Vec::new();
    for day in days1 {
        if days2.contains(day) && !days.contains(day) {
            days.push(*day);
        }
    }

    SectionConflict {
        conflicts: !days.is_empty(),
        days,
    }
}

/// Whether `section` conflicts with any of `chosen`.
///
/// Early-exit form used for search pruning.
pub(crate) fn conflicts_with_any<'a>(
    section: &Section,
    chosen: impl IntoIterator<Item = &'a Section>,
) -> bool {
    chosen
        .into_iter()
        .any(|other| sections_conflict(section, other).conflicts)
}

/// Checks whether `candidate` can be added to `entries` without conflict.
///
/// Every lecture and lab already chosen is examined; the result lists
/// all conflicts, labeled [`CANDIDATE_LABEL`] against the owning
/// entry's catalog number.
pub fn can_add_section(candidate: &Section, entries: &[ScheduleEntry]) -> AddSectionCheck {
    let mut conflicts = Vec::new();

    for entry in entries {
        for existing in entry.sections() {
            push_conflicts(
                &mut conflicts,
                (candidate, CANDIDATE_LABEL),
                (existing, entry.course_catalog_number.as_str()),
            );
        }
    }

    AddSectionCheck {
        can_add: conflicts.is_empty(),
        conflicts,
    }
}

/// Finds every conflict inside an assembled schedule.
///
/// Checks all unordered pairs of chosen sections (lecture and lab of
/// every entry, including a lecture against its own lab).
pub fn find_schedule_conflicts(entries: &[ScheduleEntry]) -> Vec<TimeConflict> {
    let chosen: Vec<(&Section, &str)> = entries
        .iter()
        .flat_map(|entry| {
            entry
                .sections()
                .map(move |s| (s, entry.course_catalog_number.as_str()))
        })
        .collect();

    let mut conflicts = Vec::new();
    for i in 0..chosen.len() {
        for j in (i + 1)..chosen.len() {
            push_conflicts(&mut conflicts, chosen[i], chosen[j]);
        }
    }
    conflicts
}

/// Returns the first section that fits into `entries`, if any.
pub fn find_first_non_conflicting_section<'a>(
    sections: &'a [Section],
    entries: &[ScheduleEntry],
) -> Option<&'a Section> {
    sections
        .iter()
        .find(|s| !conflicts_with_any(s, entries.iter().flat_map(ScheduleEntry::sections)))
}

fn push_conflicts(out: &mut Vec<TimeConflict>, a: (&Section, &str), b: (&Section, &str)) {
    let result = sections_conflict(a.0, b.0);
    if !result.conflicts {
        return;
    }
    for day in result.days {
        out.push(TimeConflict {
            section1: a.0.clone(),
            section2: b.0.clone(),
            course1: a.1.to_string(),
            course2: b.1.to_string(),
            day,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use proptest::prelude::*;

    fn section(id: &str, days: &[Day], start: i32, end: i32) -> Section {
        Section::new(id)
            .with_days(days.iter().copied())
            .with_time(start, end)
    }

    fn entry(code: &str, lecture: Section, lab: Option<Section>) -> ScheduleEntry {
        let course = Course::new(code).with_catalog_number(code);
        ScheduleEntry::new(&course, Some(lecture), lab, "#3b82f6")
    }

    #[test]
    fn test_conflict_on_all_shared_days() {
        let a = section("A", &[Day::Mon, Day::Wed], 600, 680);
        let b = section("B", &[Day::Mon, Day::Wed], 620, 700);
        let r = sections_conflict(&a, &b);
        assert!(r.conflicts);
        assert_eq!(r.days, vec![Day::Mon, Day::Wed]);
    }

    #[test]
    fn test_no_conflict_when_times_disjoint() {
        let a = section("A", &[Day::Mon, Day::Wed], 600, 680);
        let b = section("B", &[Day::Mon, Day::Wed], 680, 760);
        let r = sections_conflict(&a, &b);
        assert!(!r.conflicts);
        assert!(r.days.is_empty());
    }

    #[test]
    fn test_no_conflict_without_shared_days() {
        let a = section("A", &[Day::Mon, Day::Wed], 600, 680);
        let b = section("B", &[Day::Tue, Day::Thu], 600, 680);
        assert_eq!(sections_conflict(&a, &b), SectionConflict::none());
    }

    #[test]
    fn test_partial_day_overlap() {
        let a = section("A", &[Day::Mon, Day::Wed, Day::Fri], 540, 590);
        let b = section("B", &[Day::Fri, Day::Tue], 560, 620);
        let r = sections_conflict(&a, &b);
        assert!(r.conflicts);
        assert_eq!(r.days, vec![Day::Fri]);
    }

    #[test]
    fn test_async_sections_never_conflict() {
        let a = section("A", &[Day::Mon], 600, 680);
        let online = Section::new("W1");
        let no_days = Section::new("ND").with_time(600, 680);
        let empty_days = Section::new("ED").with_days([]).with_time(600, 680);
        let malformed = section("M", &[Day::Mon], 680, 600);

        for other in [&online, &no_days, &empty_days, &malformed] {
            assert!(!sections_conflict(&a, other).conflicts);
            assert!(!sections_conflict(other, &a).conflicts);
        }
    }

    #[test]
    fn test_can_add_section_collects_all() {
        let entries = vec![
            entry(
                "CS 131",
                section("L1", &[Day::Mon, Day::Wed], 600, 680),
                Some(section("B1", &[Day::Fri], 600, 700)),
            ),
            entry("CS 132", section("L2", &[Day::Mon], 640, 720), None),
        ];
        let candidate = section("X", &[Day::Mon, Day::Wed, Day::Fri], 650, 700);

        let check = can_add_section(&candidate, &entries);
        assert!(!check.can_add);
        // L1: Mon, Wed; B1: Fri; L2: Mon
        assert_eq!(check.conflicts.len(), 4);
        assert!(check.conflicts.iter().all(|c| c.course1 == CANDIDATE_LABEL));
        assert_eq!(
            check
                .conflicts
                .iter()
                .filter(|c| c.course2 == "CS 131")
                .count(),
            3
        );
        assert_eq!(check.conflicts[3].section2.id, "L2");
    }

    #[test]
    fn test_can_add_section_fits() {
        let entries = vec![entry("CS 131", section("L1", &[Day::Mon], 600, 680), None)];
        let check = can_add_section(&section("X", &[Day::Mon], 680, 760), &entries);
        assert!(check.can_add);
        assert!(check.conflicts.is_empty());

        let empty = can_add_section(&section("X", &[Day::Mon], 680, 760), &[]);
        assert!(empty.can_add);
    }

    #[test]
    fn test_find_schedule_conflicts_pairs() {
        let entries = vec![
            entry(
                "CS 131",
                section("L1", &[Day::Mon, Day::Wed], 600, 680),
                // Lab clashes with its own lecture on Wed
                Some(section("B1", &[Day::Wed], 660, 720)),
            ),
            entry("CS 132", section("L2", &[Day::Tue], 600, 680), None),
            entry("CS 133", section("L3", &[Day::Mon], 670, 700), None),
        ];

        let conflicts = find_schedule_conflicts(&entries);
        assert_eq!(conflicts.len(), 2);
        // Pairs in (i, j) order: L1-B1 on Wed, L1-L3 on Mon
        assert_eq!(
            (
                conflicts[0].section1.id.as_str(),
                conflicts[0].section2.id.as_str(),
                conflicts[0].day
            ),
            ("L1", "B1", Day::Wed)
        );
        assert_eq!(conflicts[0].course1, "CS 131");
        assert_eq!(conflicts[0].course2, "CS 131");
        assert_eq!(
            (
                conflicts[1].section1.id.as_str(),
                conflicts[1].section2.id.as_str(),
                conflicts[1].day
            ),
            ("L1", "L3", Day::Mon)
        );
        assert_eq!(conflicts[1].course2, "CS 133");
    }

    #[test]
    fn test_find_schedule_conflicts_clean() {
        let entries = vec![
            entry("CS 131", section("A", &[Day::Mon, Day::Wed], 600, 680), None),
            entry("CS 132", section("B", &[Day::Mon, Day::Wed], 680, 760), None),
        ];
        assert!(find_schedule_conflicts(&entries).is_empty());
        assert!(find_schedule_conflicts(&[]).is_empty());
    }

    #[test]
    fn test_find_first_non_conflicting() {
        let entries = vec![entry("CS 131", section("L1", &[Day::Mon], 600, 680), None)];
        let options = vec![
            section("X1", &[Day::Mon], 620, 700),
            section("X2", &[Day::Mon], 680, 760),
            section("X3", &[Day::Tue], 600, 680),
        ];
        let found = find_first_non_conflicting_section(&options, &entries);
        assert_eq!(found.map(|s| s.id.as_str()), Some("X2"));

        let blocked = vec![section("X1", &[Day::Mon], 620, 700)];
        assert!(find_first_non_conflicting_section(&blocked, &entries).is_none());
    }

    fn arb_section() -> impl Strategy<Value = Section> {
        let day = prop_oneof![
            Just(Day::Mon),
            Just(Day::Tue),
            Just(Day::Wed),
            Just(Day::Thu),
            Just(Day::Fri),
        ];
        (
            proptest::collection::vec(day, 0..4),
            proptest::option::of((420i32..1200, 0i32..180)),
        )
            .prop_map(|(days, time)| {
                let s = Section::new("s").with_days(days);
                match time {
                    Some((start, len)) => s.with_time(start, start + len),
                    None => s,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_conflict_symmetric(a in arb_section(), b in arb_section()) {
            let ab = sections_conflict(&a, &b);
            let ba = sections_conflict(&b, &a);
            prop_assert_eq!(ab.conflicts, ba.conflicts);
            let mut d1 = ab.days.clone();
            let mut d2 = ba.days.clone();
            d1.sort();
            d2.sort();
            prop_assert_eq!(d1, d2);
        }

        #[test]
        fn prop_async_never_conflicts(a in arb_section(), start in 420i32..1200) {
            let online = Section::new("online");
            let no_days = Section::new("nd").with_time(start, start + 50);
            prop_assert!(!sections_conflict(&a, &online).conflicts);
            prop_assert!(!sections_conflict(&no_days, &a).conflicts);
        }
    }
}
