//! Integer-program formulation of student assignment.
//!
//! One binary variable per eligible (student, section) pair, maximizing
//! weighted preference: required courses dominate at weight 1000,
//! electives earn `10 − rank` so earlier preferences outrank later
//! ones. Electives ranked 10 or later contribute no variable at all —
//! an explicit cutoff, not an oversight.
//!
//! Required courses are incentivized by weight rather than forced by
//! equality: a forced row turns any single conflict into a globally
//! infeasible model, while the 1000-weight lets the solver drop exactly
//! the assignments that cannot exist and still return a solution.

use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use log::debug;

use crate::models::{Course, Section, Student, Unassigned};
use crate::solver::MipModel;

/// Objective weight of a required-course assignment.
const REQUIRED_WEIGHT: f64 = 1000.0;
/// Electives ranked at or beyond this index get no variable.
const ELECTIVE_RANK_LIMIT: usize = 10;

/// Reason recorded when the solver leaves a required course unplaced.
pub(crate) const UNPLACED_REASON: &str = "ILP could not find feasible assignment";

/// One decision variable: student `student_idx` attends section
/// `section_idx`. `var` indexes into the model and the solution values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub student_idx: usize,
    pub section_idx: usize,
    pub var: usize,
}

/// Builds the assignment program for the given sections and students.
pub(crate) fn build_model(
    sections: &[Section],
    students: &[Student],
    courses: &[Course],
) -> (MipModel, Vec<Candidate>) {
    let course_by_id: HashMap<&str, &Course> =
        courses.iter().map(|c| (c.id.as_str(), c)).collect();
    let sections_by_course: HashMap<&str, Vec<usize>> = sections
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.course_id.as_str(), idx))
        .into_group_map();

    let mut model = MipModel::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    // Variables: eligible (student, section) pairs with positive weight
    for (student_idx, student) in students.iter().enumerate() {
        for (section_idx, section) in sections.iter().enumerate() {
            let course = match course_by_id.get(section.course_id.as_str()) {
                Some(course) => course,
                None => continue,
            };
            if !course.allows_grade(student.grade) {
                continue;
            }

            let weight = if student.requires(&section.course_id) {
                REQUIRED_WEIGHT
            } else {
                match student.elective_rank(&section.course_id) {
                    Some(rank) if rank < ELECTIVE_RANK_LIMIT => (ELECTIVE_RANK_LIMIT - rank) as f64,
                    _ => continue,
                }
            };

            let var = model.add_binary(format!("{}/{}", student.id, section.id), weight);
            candidates.push(Candidate {
                student_idx,
                section_idx,
                var,
            });
        }
    }

    // At most one section per (student, course), required then electives
    for (student_idx, student) in students.iter().enumerate() {
        let student_vars: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| c.student_idx == student_idx)
            .collect();

        let mut constrained: HashSet<&str> = HashSet::new();
        for course_id in student.required.iter().chain(student.electives.iter()) {
            if !constrained.insert(course_id.as_str()) {
                continue;
            }
            let section_idxs = match sections_by_course.get(course_id.as_str()) {
                Some(idxs) => idxs,
                None => continue,
            };
            let terms: Vec<(usize, f64)> = student_vars
                .iter()
                .filter(|c| section_idxs.contains(&c.section_idx))
                .map(|c| (c.var, 1.0))
                .collect();
            if !terms.is_empty() {
                model.add_le_constraint(format!("course/{}/{course_id}", student.id), terms, 1.0);
            }
        }

        // No overlapping sections for this student
        let mut by_period: BTreeMap<_, Vec<(usize, f64)>> = BTreeMap::new();
        for candidate in &student_vars {
            for period in &sections[candidate.section_idx].periods {
                by_period
                    .entry(*period)
                    .or_default()
                    .push((candidate.var, 1.0));
            }
        }
        for (period, terms) in by_period {
            if terms.len() > 1 {
                model.add_le_constraint(
                    format!("time/{}/{}", student.id, period.key()),
                    terms,
                    1.0,
                );
            }
        }
    }

    // Section capacity
    for (section_idx, section) in sections.iter().enumerate() {
        let terms: Vec<(usize, f64)> = candidates
            .iter()
            .filter(|c| c.section_idx == section_idx)
            .map(|c| (c.var, 1.0))
            .collect();
        if !terms.is_empty() {
            model.add_le_constraint(
                format!("capacity/{}", section.id),
                terms,
                section.capacity as f64,
            );
        }
    }

    debug!(
        "Assignment program: {} variables, {} constraints",
        model.var_count(),
        model.constraint_count()
    );

    (model, candidates)
}

/// Enrolls students per the solver values and reports required courses
/// the solution left unplaced.
pub(crate) fn apply_solution(
    sections: &mut [Section],
    students: &[Student],
    courses: &[Course],
    candidates: &[Candidate],
    values: &[f64],
) -> Vec<Unassigned> {
    let course_by_id: HashMap<&str, &Course> =
        courses.iter().map(|c| (c.id.as_str(), c)).collect();

    for candidate in candidates {
        if values[candidate.var] > 0.5 {
            let student_id = students[candidate.student_idx].id.clone();
            sections[candidate.section_idx].enroll(student_id);
        }
    }

    let mut unassigned = Vec::new();
    for student in students {
        for course_id in &student.required {
            let course = match course_by_id.get(course_id.as_str()) {
                Some(course) => course,
                None => continue,
            };
            if !course.allows_grade(student.grade) {
                continue;
            }

            let enrolled = sections
                .iter()
                .any(|s| s.course_id == *course_id && s.has_student(&student.id));
            if !enrolled {
                unassigned.push(Unassigned {
                    student_id: student.id.clone(),
                    course_id: course_id.clone(),
                    reason: UNPLACED_REASON.to_string(),
                });
            }
        }
    }

    unassigned
}
