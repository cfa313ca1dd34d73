//! Input validation for timetabling problems.
//!
//! Checks structural integrity of students, teachers, courses, and rooms
//! before the engine starts. Detects:
//! - Duplicate IDs
//! - Course references to nonexistent courses
//! - Grades outside the supported range
//! - Degenerate or out-of-range time grids
//!
//! Any detected issue prevents the solve from starting; the engine never
//! runs against a referentially broken input.

use std::collections::HashSet;

use crate::models::ScheduleInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A student requests a course that doesn't exist.
    UnknownCourse,
    /// A student's grade is outside `[1, 12]`.
    GradeOutOfRange,
    /// The time grid has zero periods or zero days.
    InvalidTimeGrid,
    /// An unavailability period lies outside the time grid.
    PeriodOutOfGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. The time grid has at least one period and one day
/// 2. No duplicate student, teacher, course, or room IDs
/// 3. All student grades and course grade restrictions are in `[1, 12]`
/// 4. All required and elective course references exist
/// 5. All teacher and room unavailability periods lie inside the grid
///
/// A teacher qualified for a course that is not offered is legal; the
/// qualification simply never matches.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &ScheduleInput) -> ValidationResult {
    let mut errors = Vec::new();

    if input.config.periods_per_day == 0 || input.config.days_per_week == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeGrid,
            format!(
                "Time grid must be non-empty (got {} periods x {} days)",
                input.config.periods_per_day, input.config.days_per_week
            ),
        ));
    }

    // Collect course IDs, flagging duplicates
    let mut course_ids = HashSet::new();
    for c in &input.courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }

        for &grade in &c.grade_restrictions {
            if !(1..=12).contains(&grade) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::GradeOutOfRange,
                    format!("Course '{}' restricts to grade {grade} (expected 1-12)", c.id),
                ));
            }
        }
    }

    let mut student_ids = HashSet::new();
    for s in &input.students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }

        if !(1..=12).contains(&s.grade) {
            errors.push(ValidationError::new(
                ValidationErrorKind::GradeOutOfRange,
                format!("Student '{}' has grade {} (expected 1-12)", s.id, s.grade),
            ));
        }

        for course_id in s.required.iter().chain(s.electives.iter()) {
            if !course_ids.contains(course_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!("Student '{}' requests unknown course '{course_id}'", s.id),
                ));
            }
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in &input.teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }

        for period in &t.unavailable {
            if !input.config.contains(*period) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PeriodOutOfGrid,
                    format!(
                        "Teacher '{}' unavailability {period} is outside the time grid",
                        t.id
                    ),
                ));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for r in &input.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }

        for period in &r.unavailable {
            if !input.config.contains(*period) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PeriodOutOfGrid,
                    format!(
                        "Room '{}' unavailability {period} is outside the time grid",
                        r.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
