//! Phase 5: section rebalancing and scoring.
//!
//! A local-search pass over each course's sections: move one student
//! per course per iteration from the most-enrolled section to the
//! least-enrolled one, provided the target has room and the student's
//! week stays conflict-free. Stops when a full pass moves nobody or the
//! iteration budget runs out.
//!
//! The final score is informational only; nothing in the engine
//! branches on it.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::models::{Period, Section, StudentId};

/// Coefficients of the schedule quality score.
///
/// The defaults penalize empty sections, uneven course section sizes,
/// and sections missing a room or teacher. Alternative weights must
/// keep the score monotonic in the same directions: fewer empty
/// sections, smaller spread, fewer missing assignments.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Penalty per section with zero enrollment.
    pub empty_section: f64,
    /// Penalty per unit of per-course (max size − min size).
    pub size_spread: f64,
    /// Penalty per section without a room.
    pub missing_room: f64,
    /// Penalty per section without a teacher.
    pub missing_teacher: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            empty_section: 5.0,
            size_spread: 0.5,
            missing_room: 10.0,
            missing_teacher: 10.0,
        }
    }
}

/// Evens out section sizes within each course. Returns the number of
/// students moved.
pub(crate) fn rebalance(sections: &mut [Section], max_iterations: usize) -> usize {
    // Section indices per course, first-seen course order
    let mut groups: Vec<Vec<usize>> = Vec::new();
    {
        let mut group_of: HashMap<&str, usize> = HashMap::new();
        for (idx, section) in sections.iter().enumerate() {
            match group_of.get(section.course_id.as_str()) {
                Some(&g) => groups[g].push(idx),
                None => {
                    group_of.insert(section.course_id.as_str(), groups.len());
                    groups.push(vec![idx]);
                }
            }
        }
    }

    let mut student_periods: HashMap<StudentId, HashSet<Period>> = HashMap::new();
    for section in sections.iter() {
        for student_id in &section.enrolled {
            student_periods
                .entry(student_id.clone())
                .or_default()
                .extend(section.periods.iter().copied());
        }
    }

    let mut moves = 0;
    for _ in 0..max_iterations {
        let mut improved = false;

        for group in &groups {
            if group.len() < 2 {
                continue;
            }

            // First index on ties, per iteration order
            let mut smallest = group[0];
            let mut largest = group[0];
            for &idx in group {
                if sections[idx].enrolled_count() < sections[smallest].enrolled_count() {
                    smallest = idx;
                }
                if sections[idx].enrolled_count() > sections[largest].enrolled_count() {
                    largest = idx;
                }
            }

            if sections[largest].enrolled_count() - sections[smallest].enrolled_count() <= 1 {
                continue;
            }
            if sections[smallest].is_full() {
                continue;
            }

            let donor_periods = sections[largest].periods.clone();
            let target_periods = sections[smallest].periods.clone();
            let candidates = sections[largest].enrolled.clone();

            for student_id in candidates {
                let occupied = match student_periods.get_mut(&student_id) {
                    Some(occupied) => occupied,
                    None => continue,
                };
                // The donor's periods don't count against the student once moved
                let conflict_free = target_periods
                    .iter()
                    .all(|p| !occupied.contains(p) || donor_periods.contains(p));
                if !conflict_free {
                    continue;
                }

                for p in &donor_periods {
                    occupied.remove(p);
                }
                occupied.extend(target_periods.iter().copied());
                sections[largest].remove_student(&student_id);
                sections[smallest].enroll(student_id.clone());

                debug!(
                    "Moved {student_id} from {} to {}",
                    sections[largest].id, sections[smallest].id
                );
                moves += 1;
                improved = true;
                break;
            }
        }

        if !improved {
            break;
        }
    }

    moves
}

/// Computes the schedule quality score, clamped to `[0, 100]`.
pub(crate) fn score(sections: &[Section], weights: &ScoreWeights) -> f64 {
    let empty = sections.iter().filter(|s| s.enrolled.is_empty()).count();
    let roomless = sections.iter().filter(|s| s.room_id.is_none()).count();
    let teacherless = sections.iter().filter(|s| s.teacher_id.is_none()).count();

    let mut sizes_by_course: HashMap<&str, (usize, usize)> = HashMap::new();
    for section in sections {
        let count = section.enrolled_count();
        sizes_by_course
            .entry(section.course_id.as_str())
            .and_modify(|(min, max)| {
                *min = (*min).min(count);
                *max = (*max).max(count);
            })
            .or_insert((count, count));
    }
    let spread: usize = sizes_by_course.values().map(|(min, max)| max - min).sum();

    let raw = 100.0
        - weights.empty_section * empty as f64
        - weights.size_spread * spread as f64
        - weights.missing_room * roomless as f64
        - weights.missing_teacher * teacherless as f64;
    raw.clamp(0.0, 100.0)
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

    fn furnished(mut section: Section) -> Section {
        section.teacher_id = Some("t1".to_string());
        section.room_id = Some("R1".to_string());
        section
    }

    #[test]
    fn test_moves_until_balanced() {
        let mut sections = vec![
            timed_section("MATH9", 1, 20, 0),
            timed_section("MATH9", 2, 20, 1),
        ];
        for i in 0..10 {
            sections[0].enroll(format!("s{i}"));
        }

        let moves = rebalance(&mut sections, 500);
        assert_eq!(moves, 5);
        assert_eq!(sections[0].enrolled_count(), 5);
        assert_eq!(sections[1].enrolled_count(), 5);
    }

    #[test]
    fn test_no_move_when_gap_is_one() {
        let mut sections = vec![
            timed_section("MATH9", 1, 20, 0),
            timed_section("MATH9", 2, 20, 1),
        ];
        sections[0].enroll("s1");
        sections[0].enroll("s2");
        sections[1].enroll("s3");

        assert_eq!(rebalance(&mut sections, 500), 0);
        assert_eq!(sections[0].enrolled_count(), 2);
    }

    #[test]
    fn test_conflict_blocks_move() {
        // Every donor student already meets at the target's slot
        let mut sections = vec![
            timed_section("MATH9", 1, 20, 0),
            timed_section("MATH9", 2, 20, 1),
            timed_section("ART", 1, 20, 1),
        ];
        for i in 0..4 {
            let id = format!("s{i}");
            sections[0].enroll(&id);
            sections[2].enroll(&id);
        }

        assert_eq!(rebalance(&mut sections, 500), 0);
        assert_eq!(sections[0].enrolled_count(), 4);
        assert_eq!(sections[1].enrolled_count(), 0);
    }

    #[test]
    fn test_capacity_blocks_move() {
        let mut sections = vec![
            timed_section("MATH9", 1, 20, 0),
            timed_section("MATH9", 2, 1, 1),
        ];
        for i in 0..5 {
            sections[0].enroll(format!("s{i}"));
        }
        sections[1].enroll("other");

        assert_eq!(rebalance(&mut sections, 500), 0);
    }

    #[test]
    fn test_iteration_budget_respected() {
        let mut sections = vec![
            timed_section("MATH9", 1, 20, 0),
            timed_section("MATH9", 2, 20, 1),
        ];
        for i in 0..10 {
            sections[0].enroll(format!("s{i}"));
        }

        // One move per iteration for a single course
        assert_eq!(rebalance(&mut sections, 2), 2);
        assert_eq!(sections[0].enrolled_count(), 8);
        assert_eq!(sections[1].enrolled_count(), 2);
    }

    #[test]
    fn test_single_section_course_untouched() {
        let mut sections = vec![timed_section("ART", 1, 20, 0)];
        sections[0].enroll("s1");
        assert_eq!(rebalance(&mut sections, 500), 0);
    }

    #[test]
    fn test_score_perfect() {
        let mut a = furnished(timed_section("MATH9", 1, 20, 0));
        let mut b = furnished(timed_section("MATH9", 2, 20, 1));
        a.enroll("s1");
        b.enroll("s2");

        let score = score(&[a, b], &ScoreWeights::default());
        assert!((score - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_penalties() {
        // One empty unfurnished section, one enrolled furnished section:
        // empty (5) + spread 2*0.5 (1) + roomless (10) + teacherless (10)
        let empty = timed_section("MATH9", 1, 20, 0);
        let mut full = furnished(timed_section("MATH9", 2, 20, 1));
        full.enroll("s1");
        full.enroll("s2");

        let score = score(&[empty, full], &ScoreWeights::default());
        assert!((score - 74.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_clamped_to_zero() {
        let sections: Vec<Section> = (0..30)
            .map(|i| timed_section("C", i + 1, 20, 0))
            .collect();
        let score = score(&sections, &ScoreWeights::default());
        assert!((score - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_empty_schedule() {
        let score = score(&[], &ScoreWeights::default());
        assert!((score - 100.0).abs() < 1e-10);
    }
}
