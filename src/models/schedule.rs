//! Schedule (solution) model.
//!
//! A schedule is the engine's final output: the full section list, the
//! students it could not place, and a metadata block recording how the
//! solve went. Once returned it is never mutated.

use serde::{Deserialize, Serialize};

use super::{CourseId, Section, StudentId};

/// Which Phase 4 path produced the enrollment.
///
/// A closed two-member set: the engine either solved the integer program
/// or fell back to the greedy passes. There is no third strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStrategy {
    /// Binary integer program over (student, section) variables.
    Ilp,
    /// Two-pass greedy: required courses, then electives.
    Greedy,
}

impl std::fmt::Display for AssignmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ilp => write!(f, "ilp"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}

/// A (student, required course) pair the engine could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unassigned {
    /// The student who could not be placed.
    pub student_id: StudentId,
    /// The course they requested.
    pub course_id: CourseId,
    /// Human-readable explanation.
    pub reason: String,
}

/// Metadata about one solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMeta {
    /// RFC 3339 timestamp of schedule creation (UTC).
    pub generated_at: String,
    /// Informational quality score in `[0, 100]`.
    pub score: f64,
    /// Wall-clock solve time in milliseconds.
    pub solve_ms: u64,
    /// Which enrollment path produced the result.
    pub algorithm: AssignmentStrategy,
    /// Non-fatal conditions encountered during the solve.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// A complete timetable: sections, unplaced students, and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// All sections, in creation order.
    pub sections: Vec<Section>,
    /// Students the engine could not place into a requested course.
    pub unassigned: Vec<Unassigned>,
    /// Solve metadata.
    pub meta: ScheduleMeta,
}

impl Schedule {
    /// Finds a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// All sections of a course, in creation order.
    pub fn sections_for_course(&self, course_id: &str) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.course_id == course_id)
            .collect()
    }

    /// All sections held by a teacher.
    pub fn sections_for_teacher(&self, teacher_id: &str) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.teacher_id.as_deref() == Some(teacher_id))
            .collect()
    }

    /// All sections a student is enrolled in.
    pub fn sections_for_student(&self, student_id: &str) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.has_student(student_id))
            .collect()
    }

    /// Total enrollment across all sections.
    pub fn enrollment_count(&self) -> usize {
        self.sections.iter().map(|s| s.enrolled_count()).sum()
    }
}
