//! Weekly school timetabling engine.
//!
//! Produces a timetable — sections assigned to teachers, rooms, and
//! time slots, with students enrolled into them — that honors hard
//! constraints (no double-booking, capacities, qualifications, grade
//! eligibility) and optimizes soft objectives (balanced section sizes,
//! elective preferences, required-course coverage).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Teacher`, `Course`,
//!   `Room`, `Section`, `Schedule`, `Period`
//! - **`engine`**: The five-phase pipeline and `generate_schedule`
//! - **`solver`**: Solver-independent MIP model and backend seam
//! - **`validation`**: Input integrity checks (duplicate IDs, broken
//!   course references, grade ranges)
//! - **`config`**: Constraint-configuration file grammar
//! - **`progress`**: Progress event types and reporting
//! - **`error`**: Error taxonomy
//!
//! # Pipeline
//!
//! | Phase | Responsibility |
//! |-------|----------------|
//! | 1 | Materialize sections, staff them round-robin |
//! | 2 | Fix one slot per section across the week |
//! | 3 | Assign the smallest feasible room |
//! | 4 | Enroll students (ILP, greedy fallback) |
//! | 5 | Rebalance section sizes |
//!
//! The engine is single-threaded, deterministic, and does no I/O
//! beyond an optional progress callback. Infeasibility is reported in
//! the schedule, never raised as an error.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod progress;
pub mod solver;
pub mod validation;
