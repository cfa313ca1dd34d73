//! Phase 2: time-slot assignment.
//!
//! Each section gets a single slot of the day and meets at that slot on
//! every school day. Slots are chosen by a penalty-minimizing greedy
//! over three running counters:
//!
//! - `slot_usage[slot]` — global load balance across independent courses
//! - `grade_slot_usage[grade][slot]` — keeps two courses restricted to
//!   the same grade off the same slot, so a grade-12 student can take
//!   both of their grade-12 requirements
//! - `teacher_occupied` — hard feasibility, seeded with each teacher's
//!   unavailable periods
//!
//! A same-course repeat costs 1000 and a same-grade collision 500 per
//! already-placed section, so sections of one course spread across
//! different slots before anything else is traded off.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::models::{Course, Period, Section, Teacher, TimeConfig};

const SAME_COURSE_PENALTY: u64 = 1000;
const GRADE_COLLISION_PENALTY: u64 = 500;

/// Assigns one slot per section, replicated across all weekly days.
pub(crate) fn assign_times(
    sections: &mut [Section],
    courses: &[Course],
    teachers: &[Teacher],
    config: &TimeConfig,
) {
    let slots = config.periods_per_day as usize;
    let mut slot_usage = vec![0u64; slots];
    // Grades are validated into [1, 12]; index 0 is unused.
    let mut grade_slot_usage = vec![vec![0u64; slots]; 13];
    let mut teacher_occupied: HashMap<&str, HashSet<Period>> = teachers
        .iter()
        .map(|t| (t.id.as_str(), t.unavailable.iter().copied().collect()))
        .collect();

    for course in courses {
        let mut course_used_slots: HashSet<u32> = HashSet::new();

        for section in sections.iter_mut().filter(|s| s.course_id == course.id) {
            let occupied = section
                .teacher_id
                .as_deref()
                .and_then(|id| teacher_occupied.get(id));

            let mut best: Option<(u32, u64)> = None;
            for slot in 0..config.periods_per_day {
                let feasible = match occupied {
                    Some(periods) => (0..config.days_per_week)
                        .all(|day| !periods.contains(&Period::new(day, slot))),
                    None => true,
                };
                if !feasible {
                    continue;
                }

                let mut penalty = slot_usage[slot as usize];
                if course_used_slots.contains(&slot) {
                    penalty += SAME_COURSE_PENALTY;
                }
                for &grade in &course.grade_restrictions {
                    penalty +=
                        GRADE_COLLISION_PENALTY * grade_slot_usage[grade as usize][slot as usize];
                }

                // Strict comparison keeps the smallest slot on ties
                if best.map_or(true, |(_, p)| penalty < p) {
                    best = Some((slot, penalty));
                }
            }

            let slot = match best {
                Some((slot, penalty)) => {
                    debug!("Section {} takes slot {slot} (penalty {penalty})", section.id);
                    slot
                }
                None => {
                    // Unavoidable conflict; downstream validation reports it
                    warn!("Section {} has no feasible slot; defaulting to 0", section.id);
                    0
                }
            };

            section.periods = config.slot_across_week(slot);
            if let Some(id) = section.teacher_id.as_deref() {
                if let Some(periods) = teacher_occupied.get_mut(id) {
                    periods.extend(section.periods.iter().copied());
                }
            }
            slot_usage[slot as usize] += 1;
            for &grade in &course.grade_restrictions {
                grade_slot_usage[grade as usize][slot as usize] += 1;
            }
            course_used_slots.insert(slot);
        }
    }
}
