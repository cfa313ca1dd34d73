//! Course model.
//!
//! A course describes what gets offered: how many sections to open, the
//! per-section capacity, optional grade restrictions, and the room
//! features its sections require (labs, gyms, pianos).

use serde::{Deserialize, Serialize};

use super::CourseId;

/// A course offered in the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Per-section enrollment capacity.
    pub max_students: u32,
    /// Weekly meeting count (carried for reporting; the engine meets
    /// each section once per school day at a fixed slot).
    pub periods_per_week: u32,
    /// Number of sections to open.
    pub sections: u32,
    /// Grades allowed to enroll. Empty = all grades.
    #[serde(default)]
    pub grade_restrictions: Vec<u32>,
    /// Room features every section of this course needs.
    #[serde(default)]
    pub required_features: Vec<String>,
}

impl Course {
    /// Creates a one-section course with a capacity of 30, meeting daily.
    pub fn new(id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_students: 30,
            periods_per_week: 5,
            sections: 1,
            grade_restrictions: Vec::new(),
            required_features: Vec::new(),
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-section capacity.
    pub fn with_max_students(mut self, max_students: u32) -> Self {
        self.max_students = max_students;
        self
    }

    /// Sets the weekly meeting count.
    pub fn with_periods_per_week(mut self, periods_per_week: u32) -> Self {
        self.periods_per_week = periods_per_week;
        self
    }

    /// Sets the number of sections to open.
    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = sections;
        self
    }

    /// Restricts enrollment to a grade (repeatable).
    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade_restrictions.push(grade);
        self
    }

    /// Requires a room feature (repeatable).
    pub fn with_required_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_features.push(feature.into());
        self
    }

    /// Whether a student of the given grade may enroll.
    ///
    /// An empty restriction list admits every grade.
    pub fn allows_grade(&self, grade: u32) -> bool {
        self.grade_restrictions.is_empty() || self.grade_restrictions.contains(&grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("GOV")
            .with_name("Government")
            .with_max_students(25)
            .with_periods_per_week(5)
            .with_sections(2)
            .with_grade(12)
            .with_required_feature("projector");

        assert_eq!(c.id, "GOV");
        assert_eq!(c.name, "Government");
        assert_eq!(c.max_students, 25);
        assert_eq!(c.sections, 2);
        assert_eq!(c.grade_restrictions, vec![12]);
        assert_eq!(c.required_features, vec!["projector"]);
    }

    #[test]
    fn test_allows_grade_unrestricted() {
        let c = Course::new("ART");
        assert!(c.allows_grade(1));
        assert!(c.allows_grade(12));
    }

    #[test]
    fn test_allows_grade_restricted() {
        let c = Course::new("GOV").with_grade(11).with_grade(12);
        assert!(c.allows_grade(11));
        assert!(c.allows_grade(12));
        assert!(!c.allows_grade(9));
    }

    #[test]
    fn test_course_defaults() {
        let c = Course::new("X");
        assert_eq!(c.max_students, 30);
        assert_eq!(c.periods_per_week, 5);
        assert_eq!(c.sections, 1);
        assert!(c.grade_restrictions.is_empty());
        assert!(c.required_features.is_empty());
    }
}
