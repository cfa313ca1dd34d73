//! Phase 1: section materialization.
//!
//! Opens `course.sections` empty sections per course and staffs each by
//! round-robin over the course's qualified-teacher pool. The pool is
//! computed once per course from the running section counts, so a
//! teacher who filled up on earlier courses no longer appears in it.
//!
//! A course with an empty pool still gets its sections; they carry no
//! teacher and downstream validation surfaces them.

use log::debug;

use crate::models::{Course, Section, Teacher};

/// Materializes all sections, in course input order.
pub(crate) fn materialize(courses: &[Course], teachers: &[Teacher]) -> Vec<Section> {
    let mut section_counts = vec![0u32; teachers.len()];
    let mut sections = Vec::new();

    for course in courses {
        let pool: Vec<usize> = teachers
            .iter()
            .enumerate()
            .filter(|(idx, t)| t.is_qualified(&course.id) && section_counts[*idx] < t.max_sections)
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "Course {}: opening {} sections over a pool of {} teachers",
            course.id,
            course.sections,
            pool.len()
        );

        for i in 0..course.sections {
            let mut section = Section::new(&course.id, i + 1, course.max_students);
            if !pool.is_empty() {
                let teacher_idx = pool[i as usize % pool.len()];
                section.teacher_id = Some(teachers[teacher_idx].id.clone());
                section_counts[teacher_idx] += 1;
            }
            sections.push(section);
        }
    }

    sections
}
