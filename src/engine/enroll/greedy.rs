//! Two-pass greedy student assignment.
//!
//! The fallback path when the integer program is unavailable or fails.
//! Required courses are placed first for every student, then elective
//! preferences in listed order. Within a course, the least-enrolled
//! section that has room and causes no period conflict wins, which
//! balances sections during insertion and leaves less for the
//! rebalancer.
//!
//! A required course that cannot be placed produces an [`Unassigned`]
//! entry; an elective that cannot be placed is dropped silently.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::models::{Course, Period, Section, Student, Unassigned};

/// Reason recorded when the greedy passes cannot place a required course.
pub(crate) const UNPLACED_REASON: &str = "No available section (conflict or capacity)";

/// Enrolls students into sections; returns unplaced required requests.
pub(crate) fn assign_students(
    sections: &mut [Section],
    students: &[Student],
    courses: &[Course],
) -> Vec<Unassigned> {
    let course_by_id: HashMap<&str, &Course> =
        courses.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut student_periods: Vec<HashSet<Period>> = vec![HashSet::new(); students.len()];
    let mut unassigned = Vec::new();

    // Required pass
    for (idx, student) in students.iter().enumerate() {
        for course_id in &student.required {
            let placed = try_place(
                sections,
                &course_by_id,
                student,
                course_id,
                &mut student_periods[idx],
            );
            if placed == Placement::Failed {
                debug!("Student {} unplaced in required course {course_id}", student.id);
                unassigned.push(Unassigned {
                    student_id: student.id.clone(),
                    course_id: course_id.clone(),
                    reason: UNPLACED_REASON.to_string(),
                });
            }
        }
    }

    // Elective pass; failures are silent
    for (idx, student) in students.iter().enumerate() {
        for course_id in &student.electives {
            try_place(
                sections,
                &course_by_id,
                student,
                course_id,
                &mut student_periods[idx],
            );
        }
    }

    unassigned
}

#[derive(PartialEq)]
enum Placement {
    Enrolled,
    /// Course missing or grade-excluded; not a placement failure.
    Skipped,
    Failed,
}

fn try_place(
    sections: &mut [Section],
    course_by_id: &HashMap<&str, &Course>,
    student: &Student,
    course_id: &str,
    occupied: &mut HashSet<Period>,
) -> Placement {
    let course = match course_by_id.get(course_id) {
        Some(course) => course,
        None => return Placement::Skipped,
    };
    if !course.allows_grade(student.grade) {
        return Placement::Skipped;
    }

    let mut candidates: Vec<usize> = sections
        .iter()
        .enumerate()
        .filter(|(_, s)| s.course_id == course_id)
        .map(|(idx, _)| idx)
        .collect();
    // Stable: equal enrollments stay in creation order
    candidates.sort_by_key(|&idx| sections[idx].enrolled_count());

    for idx in candidates {
        if sections[idx].is_full() {
            continue;
        }
        if sections[idx].periods.iter().any(|p| occupied.contains(p)) {
            continue;
        }

        occupied.extend(sections[idx].periods.iter().copied());
        sections[idx].enroll(&student.id);
        return Placement::Enrolled;
    }

    Placement::Failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeConfig;

    fn timed_section(course_id: &str, number: u32, capacity: u32, slot: u32) -> Section {
        let mut section = Section::new(course_id, number, capacity);
        section.periods = TimeConfig::new(4, 5).slot_across_week(slot);
        section
    }

    #[test]
    fn test_required_placed_in_least_enrolled() {
        let courses = vec![Course::new("MATH9").with_sections(2)];
        let mut sections = vec![
            timed_section("MATH9", 1, 30, 0),
            timed_section("MATH9", 2, 30, 1),
        ];
        sections[0].enroll("pre-1");
        sections[0].enroll("pre-2");

        let students = vec![Student::new("s1", 9).with_required("MATH9")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(unassigned.is_empty());
        assert!(sections[1].has_student("s1"));
    }

    #[test]
    fn test_capacity_respected() {
        let courses = vec![Course::new("ART").with_max_students(1)];
        let mut sections = vec![timed_section("ART", 1, 1, 0)];

        let students = vec![
            Student::new("s1", 9).with_required("ART"),
            Student::new("s2", 9).with_required("ART"),
        ];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert_eq!(sections[0].enrolled, vec!["s1"]);
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].student_id, "s2");
        assert_eq!(unassigned[0].reason, UNPLACED_REASON);
    }

    #[test]
    fn test_period_conflict_avoided() {
        // Two courses at the same slot: the second cannot be placed
        let courses = vec![Course::new("A"), Course::new("B")];
        let mut sections = vec![timed_section("A", 1, 30, 0), timed_section("B", 1, 30, 0)];

        let students = vec![Student::new("s1", 9).with_required("A").with_required("B")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(sections[0].has_student("s1"));
        assert!(!sections[1].has_student("s1"));
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].course_id, "B");
    }

    #[test]
    fn test_conflict_falls_through_to_free_section() {
        let courses = vec![Course::new("A"), Course::new("B").with_sections(2)];
        let mut sections = vec![
            timed_section("A", 1, 30, 0),
            timed_section("B", 1, 30, 0),
            timed_section("B", 2, 30, 1),
        ];

        let students = vec![Student::new("s1", 9).with_required("A").with_required("B")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(unassigned.is_empty());
        assert!(sections[2].has_student("s1"));
    }

    #[test]
    fn test_grade_restriction_skipped_silently() {
        let courses = vec![Course::new("GOV").with_grade(12)];
        let mut sections = vec![timed_section("GOV", 1, 30, 0)];

        let students = vec![Student::new("s1", 9).with_required("GOV")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(unassigned.is_empty());
        assert!(sections[0].enrolled.is_empty());
    }

    #[test]
    fn test_elective_failure_is_silent() {
        let courses = vec![Course::new("ART").with_max_students(1)];
        let mut sections = vec![timed_section("ART", 1, 1, 0)];
        sections[0].enroll("pre");

        let students = vec![Student::new("s1", 9).with_elective("ART")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(unassigned.is_empty());
        assert!(!sections[0].has_student("s1"));
    }

    #[test]
    fn test_electives_after_required() {
        // Required at slot 0 wins the slot; the elective conflicts and drops
        let courses = vec![Course::new("MATH9"), Course::new("ART")];
        let mut sections = vec![
            timed_section("MATH9", 1, 30, 0),
            timed_section("ART", 1, 30, 0),
        ];

        let students = vec![Student::new("s1", 9)
            .with_elective("ART")
            .with_required("MATH9")];
        let unassigned = assign_students(&mut sections, &students, &courses);

        assert!(unassigned.is_empty());
        assert!(sections[0].has_student("s1"));
        assert!(!sections[1].has_student("s1"));
    }

    #[test]
    fn test_elective_preference_order() {
        // Both electives fit; both are honored in order
        let courses = vec![Course::new("ART"), Course::new("BAND")];
        let mut sections = vec![
            timed_section("ART", 1, 30, 0),
            timed_section("BAND", 1, 30, 1),
        ];

        let students = vec![Student::new("s1", 9)
            .with_elective("BAND")
            .with_elective("ART")];
        assign_students(&mut sections, &students, &courses);

        assert!(sections[0].has_student("s1"));
        assert!(sections[1].has_student("s1"));
    }

    #[test]
    fn test_zero_students() {
        let courses = vec![Course::new("MATH9")];
        let mut sections = vec![timed_section("MATH9", 1, 30, 0)];
        let unassigned = assign_students(&mut sections, &[], &courses);

        assert!(unassigned.is_empty());
        assert!(sections[0].enrolled.is_empty());
    }
}
