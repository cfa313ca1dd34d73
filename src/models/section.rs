//! Section model.
//!
//! A section is one weekly instance of a course. Sections are the only
//! mutable entities: the engine creates them empty, then fills in the
//! teacher, periods, room, and enrollment phase by phase. Later phases
//! never revisit fields set by earlier ones.

use serde::{Deserialize, Serialize};

use super::{CourseId, Period, RoomId, SectionId, StudentId, TeacherId};

/// One weekly instance of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier, synthesized as `"{course_id}-{1-based-index}"`.
    pub id: SectionId,
    /// The course this section belongs to.
    pub course_id: CourseId,
    /// Assigned teacher. `None` when no qualified teacher had capacity.
    pub teacher_id: Option<TeacherId>,
    /// Assigned room. `None` when no feasible room existed.
    pub room_id: Option<RoomId>,
    /// Weekly meeting periods, in day order.
    pub periods: Vec<Period>,
    /// Enrolled students, in enrollment order.
    pub enrolled: Vec<StudentId>,
    /// Nominal capacity, copied from the course.
    pub capacity: u32,
}

impl Section {
    /// Creates an empty section for a course.
    ///
    /// `number` is the 1-based index within the course.
    pub fn new(course_id: impl Into<CourseId>, number: u32, capacity: u32) -> Self {
        let course_id = course_id.into();
        Self {
            id: format!("{course_id}-{number}"),
            course_id,
            teacher_id: None,
            room_id: None,
            periods: Vec::new(),
            enrolled: Vec::new(),
            capacity,
        }
    }

    /// Number of enrolled students.
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Whether enrollment has reached capacity.
    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.capacity as usize
    }

    /// Whether this section meets at the given period.
    pub fn meets_at(&self, period: Period) -> bool {
        self.periods.contains(&period)
    }

    /// Whether this section shares any period with another.
    pub fn overlaps(&self, other: &Section) -> bool {
        self.periods.iter().any(|p| other.meets_at(*p))
    }

    /// Whether the student is enrolled here.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|s| s == student_id)
    }

    /// Enrolls a student (no capacity or conflict checks).
    pub fn enroll(&mut self, student_id: impl Into<StudentId>) {
        self.enrolled.push(student_id.into());
    }

    /// Removes a student. Returns whether they were enrolled.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        match self.enrolled.iter().position(|s| s == student_id) {
            Some(idx) => {
                self.enrolled.remove(idx);
                true
            }
            None => false,
        }
    }
}
