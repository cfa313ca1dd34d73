//! Timetabling domain models.
//!
//! Provides the core data types for representing a weekly school
//! timetabling problem and its solution. Inputs (students, teachers,
//! courses, rooms) are read-only for the duration of one solve; sections
//! are created and mutated by the engine; a returned [`Schedule`] is
//! immutable.
//!
//! # Entity Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`Student`] | Required courses + ordered elective preferences |
//! | [`Teacher`] | Qualified subjects, section limit, unavailability |
//! | [`Course`] | Capacity, section count, grade/feature requirements |
//! | [`Room`] | Capacity, feature set, unavailability |
//! | [`Section`] | One weekly instance of a course (engine-owned) |
//! | [`Schedule`] | Sections + unassigned entries + metadata |

mod course;
mod input;
mod period;
mod room;
mod schedule;
mod section;
mod student;
mod teacher;

pub use course::Course;
pub use input::ScheduleInput;
pub use period::{Period, TimeConfig};
pub use room::Room;
pub use schedule::{AssignmentStrategy, Schedule, ScheduleMeta, Unassigned};
pub use section::Section;
pub use student::Student;
pub use teacher::Teacher;

/// Opaque student identifier.
pub type StudentId = String;
/// Opaque teacher identifier.
pub type TeacherId = String;
/// Opaque course identifier.
pub type CourseId = String;
/// Opaque room identifier.
pub type RoomId = String;
/// Section identifier, synthesized as `"{course_id}-{1-based-index}"`.
pub type SectionId = String;
