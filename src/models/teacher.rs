//! Teacher model.
//!
//! A teacher is qualified for a set of courses, can carry a bounded
//! number of sections, and may be unavailable at specific periods
//! (part-time staff, planning blocks).

use serde::{Deserialize, Serialize};

use super::{CourseId, Period, TeacherId};

fn default_max_sections() -> u32 {
    1
}

/// A teacher who can be assigned to sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: TeacherId,
    /// Courses this teacher is qualified to teach.
    #[serde(default)]
    pub subjects: Vec<CourseId>,
    /// Maximum number of sections this teacher may hold.
    #[serde(default = "default_max_sections")]
    pub max_sections: u32,
    /// Periods at which this teacher cannot teach.
    #[serde(default)]
    pub unavailable: Vec<Period>,
}

impl Teacher {
    /// Creates a teacher with no subjects and a one-section limit.
    pub fn new(id: impl Into<TeacherId>) -> Self {
        Self {
            id: id.into(),
            subjects: Vec::new(),
            max_sections: default_max_sections(),
            unavailable: Vec::new(),
        }
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, course_id: impl Into<CourseId>) -> Self {
        self.subjects.push(course_id.into());
        self
    }

    /// Sets the section limit.
    pub fn with_max_sections(mut self, max_sections: u32) -> Self {
        self.max_sections = max_sections;
        self
    }

    /// Marks a period as unavailable.
    pub fn with_unavailable(mut self, period: Period) -> Self {
        self.unavailable.push(period);
        self
    }

    /// Whether this teacher is qualified for the course.
    pub fn is_qualified(&self, course_id: &str) -> bool {
        self.subjects.iter().any(|c| c == course_id)
    }

    /// Whether this teacher cannot teach at the given period.
    pub fn is_unavailable_at(&self, period: Period) -> bool {
        self.unavailable.contains(&period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1")
            .with_subject("MATH9")
            .with_subject("MATH10")
            .with_max_sections(4)
            .with_unavailable(Period::new(0, 0));

        assert_eq!(t.id, "t1");
        assert_eq!(t.subjects.len(), 2);
        assert_eq!(t.max_sections, 4);
        assert_eq!(t.unavailable, vec![Period::new(0, 0)]);
    }

    #[test]
    fn test_qualification() {
        let t = Teacher::new("t1").with_subject("SCI9");
        assert!(t.is_qualified("SCI9"));
        assert!(!t.is_qualified("MATH9"));
    }

    #[test]
    fn test_unavailability() {
        let t = Teacher::new("t1")
            .with_unavailable(Period::new(0, 2))
            .with_unavailable(Period::new(3, 2));

        assert!(t.is_unavailable_at(Period::new(0, 2)));
        assert!(t.is_unavailable_at(Period::new(3, 2)));
        assert!(!t.is_unavailable_at(Period::new(1, 2)));
    }

    #[test]
    fn test_default_section_limit() {
        assert_eq!(Teacher::new("t1").max_sections, 1);
    }
}
