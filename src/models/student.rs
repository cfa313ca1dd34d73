//! Student model.
//!
//! A student carries a grade level, the courses they must take, and an
//! ordered list of elective preferences (first = most preferred).

use serde::{Deserialize, Serialize};

use super::{CourseId, StudentId};

/// A student to be enrolled into sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Grade level (1–12).
    pub grade: u32,
    /// Courses this student must take, in listed order.
    #[serde(default)]
    pub required: Vec<CourseId>,
    /// Elective preferences, most preferred first.
    #[serde(default)]
    pub electives: Vec<CourseId>,
}

impl Student {
    /// Creates a student with no course requests.
    pub fn new(id: impl Into<StudentId>, grade: u32) -> Self {
        Self {
            id: id.into(),
            grade,
            required: Vec::new(),
            electives: Vec::new(),
        }
    }

    /// Adds a required course.
    pub fn with_required(mut self, course_id: impl Into<CourseId>) -> Self {
        self.required.push(course_id.into());
        self
    }

    /// Adds an elective preference (appended last, i.e. least preferred so far).
    pub fn with_elective(mut self, course_id: impl Into<CourseId>) -> Self {
        self.electives.push(course_id.into());
        self
    }

    /// Whether the student requested the course, as required or elective.
    pub fn requests(&self, course_id: &str) -> bool {
        self.requires(course_id) || self.elective_rank(course_id).is_some()
    }

    /// Whether the course is on the required list.
    pub fn requires(&self, course_id: &str) -> bool {
        self.required.iter().any(|c| c == course_id)
    }

    /// Position of the course in the elective list (0 = most preferred).
    pub fn elective_rank(&self, course_id: &str) -> Option<usize> {
        self.electives.iter().position(|c| c == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("s1", 11)
            .with_required("MATH11")
            .with_required("ENG11")
            .with_elective("ART")
            .with_elective("BAND");

        assert_eq!(s.id, "s1");
        assert_eq!(s.grade, 11);
        assert_eq!(s.required, vec!["MATH11", "ENG11"]);
        assert_eq!(s.electives, vec!["ART", "BAND"]);
    }

    #[test]
    fn test_requests() {
        let s = Student::new("s1", 9)
            .with_required("MATH9")
            .with_elective("ART");

        assert!(s.requests("MATH9"));
        assert!(s.requests("ART"));
        assert!(!s.requests("BAND"));
        assert!(s.requires("MATH9"));
        assert!(!s.requires("ART"));
    }

    #[test]
    fn test_elective_rank() {
        let s = Student::new("s1", 9)
            .with_elective("ART")
            .with_elective("BAND")
            .with_elective("CHOIR");

        assert_eq!(s.elective_rank("ART"), Some(0));
        assert_eq!(s.elective_rank("CHOIR"), Some(2));
        assert_eq!(s.elective_rank("MATH9"), None);
    }
}
