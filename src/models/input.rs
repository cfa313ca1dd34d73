//! Solve input container.

use serde::{Deserialize, Serialize};

use super::{Course, Room, Student, Teacher, TimeConfig};

/// Everything one solve consumes: the four entity lists plus the time grid.
///
/// Input order is semantic — the engine iterates students, teachers,
/// courses, and rooms in the order given here, and all tie-breaking
/// follows that order. Identical inputs produce identical schedules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Students to enroll.
    #[serde(default)]
    pub students: Vec<Student>,
    /// Available teachers.
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    /// Courses to offer.
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Available rooms.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Dimensions of the weekly grid.
    pub config: TimeConfig,
}

impl ScheduleInput {
    /// Creates an empty input over the given grid.
    pub fn new(config: TimeConfig) -> Self {
        Self {
            students: Vec::new(),
            teachers: Vec::new(),
            courses: Vec::new(),
            rooms: Vec::new(),
            config,
        }
    }

    /// Adds a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }
}
