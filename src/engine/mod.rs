//! The scheduling pipeline.
//!
//! A fixed five-phase sequence, each phase enriching the shared section
//! list: materialize and staff sections, fix time slots, assign rooms,
//! enroll students (ILP with greedy fallback), then rebalance section
//! sizes. Phases run to completion in order on one thread; iteration
//! follows input order everywhere, so identical inputs produce
//! identical schedules.
//!
//! # Example
//!
//! ```no_run
//! use timetabler::engine::{generate_schedule, SolveOptions};
//! use timetabler::models::{Course, ScheduleInput, Student, Teacher, TimeConfig};
//!
//! let input = ScheduleInput::new(TimeConfig::new(7, 5))
//!     .with_course(Course::new("MATH9").with_sections(2))
//!     .with_teacher(Teacher::new("t1").with_subject("MATH9").with_max_sections(2))
//!     .with_student(Student::new("s1", 9).with_required("MATH9"));
//!
//! let schedule = generate_schedule(&input, &SolveOptions::default())?;
//! println!("score: {}", schedule.meta.score);
//! # Ok::<(), timetabler::error::EngineError>(())
//! ```

mod enroll;
mod rebalance;
mod rooms;
mod sections;
mod times;

pub use rebalance::ScoreWeights;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::info;

use crate::error::EngineError;
use crate::models::{Schedule, ScheduleInput, ScheduleMeta, Section, Teacher};
use crate::progress::{
    ProgressCallback, ProgressCounters, ProgressEvent, ProgressPhase, ProgressReporter,
};
use crate::solver::{LpSolver, MipSolver};
use crate::validation::validate_input;

/// Tunables for one solve.
pub struct SolveOptions {
    /// Iteration budget for the rebalancing pass.
    pub max_optimization_iterations: usize,
    /// Whether to attempt the ILP path before the greedy fallback.
    pub use_ilp: bool,
    /// Inline progress callback.
    pub on_progress: Option<ProgressCallback>,
    /// Coefficients of the informational quality score.
    pub score_weights: ScoreWeights,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_optimization_iterations: 500,
            use_ilp: true,
            on_progress: None,
            score_weights: ScoreWeights::default(),
        }
    }
}

impl SolveOptions {
    /// Sets the rebalancing iteration budget.
    pub fn with_max_optimization_iterations(mut self, iterations: usize) -> Self {
        self.max_optimization_iterations = iterations;
        self
    }

    /// Enables or disables the ILP path.
    pub fn with_use_ilp(mut self, use_ilp: bool) -> Self {
        self.use_ilp = use_ilp;
        self
    }

    /// Sets the progress callback.
    pub fn with_progress(mut self, callback: impl Fn(&ProgressEvent) + 'static) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Sets the score coefficients.
    pub fn with_score_weights(mut self, weights: ScoreWeights) -> Self {
        self.score_weights = weights;
        self
    }
}

impl std::fmt::Debug for SolveOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveOptions")
            .field(
                "max_optimization_iterations",
                &self.max_optimization_iterations,
            )
            .field("use_ilp", &self.use_ilp)
            .field("on_progress", &self.on_progress.is_some())
            .field("score_weights", &self.score_weights)
            .finish()
    }
}

/// The scheduling engine.
///
/// Holds the MIP backend; everything else is per-solve state. Two
/// engines over disjoint inputs are safe to run in parallel — the
/// engine takes no locks and mutates only its own sections.
pub struct Engine {
    solver: Arc<dyn MipSolver>,
}

impl Engine {
    /// Creates an engine backed by the default MIP solver.
    pub fn new() -> Self {
        Self {
            solver: Arc::new(LpSolver::new()),
        }
    }

    /// Replaces the MIP backend.
    pub fn with_solver(mut self, solver: Arc<dyn MipSolver>) -> Self {
        self.solver = solver;
        self
    }

    /// Runs the full pipeline and returns the finished schedule.
    ///
    /// Always produces a schedule on valid input: unplaceable students
    /// land in `unassigned`, and a solver failure activates the greedy
    /// fallback with a warning in the metadata.
    ///
    /// # Errors
    /// [`EngineError::Input`] when validation rejects the input;
    /// [`EngineError::Internal`] when a pipeline invariant is violated.
    pub fn generate(
        &self,
        input: &ScheduleInput,
        options: &SolveOptions,
    ) -> Result<Schedule, EngineError> {
        let started = Instant::now();
        let mut progress = ProgressReporter::new(options.on_progress.as_ref());

        progress.report(ProgressPhase::Initializing, 0, "Validating input");
        validate_input(input).map_err(EngineError::Input)?;

        progress.report(ProgressPhase::Initializing, 5, "Materializing sections");
        let mut sections = sections::materialize(&input.courses, &input.teachers);
        check_staffing(&sections, &input.teachers)?;
        info!("Materialized {} sections", sections.len());
        progress.report_with_counters(
            ProgressPhase::Initializing,
            10,
            format!("Created {} sections", sections.len()),
            ProgressCounters {
                sections_created: Some(sections.len()),
                students_assigned: None,
            },
        );

        progress.report(ProgressPhase::Assigning, 15, "Assigning time slots");
        times::assign_times(&mut sections, &input.courses, &input.teachers, &input.config);

        progress.report(ProgressPhase::Assigning, 30, "Assigning rooms");
        rooms::assign_rooms(&mut sections, &input.courses, &input.rooms);

        progress.report(ProgressPhase::Assigning, 40, "Enrolling students");
        let outcome = enroll::assign_students(
            &mut sections,
            &input.students,
            &input.courses,
            self.solver.as_ref(),
            options.use_ilp,
        );
        let enrolled: usize = sections.iter().map(|s| s.enrolled_count()).sum();
        progress.report_with_counters(
            ProgressPhase::Assigning,
            75,
            format!("Enrolled {enrolled} student-course assignments"),
            ProgressCounters {
                students_assigned: Some(enrolled),
                sections_created: Some(sections.len()),
            },
        );

        progress.report(ProgressPhase::Optimizing, 80, "Rebalancing section sizes");
        let moves = rebalance::rebalance(&mut sections, options.max_optimization_iterations);
        info!("Rebalancer moved {moves} students");
        let score = rebalance::score(&sections, &options.score_weights);

        let schedule = Schedule {
            sections,
            unassigned: outcome.unassigned,
            meta: ScheduleMeta {
                generated_at: Utc::now().to_rfc3339(),
                score,
                solve_ms: started.elapsed().as_millis() as u64,
                algorithm: outcome.strategy,
                warnings: outcome.warnings,
            },
        };

        progress.report(ProgressPhase::Complete, 100, "Schedule complete");
        info!(
            "Schedule complete: score {score:.1}, {} unassigned, via {}",
            schedule.unassigned.len(),
            schedule.meta.algorithm
        );
        Ok(schedule)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a schedule with the default engine.
pub fn generate_schedule(
    input: &ScheduleInput,
    options: &SolveOptions,
) -> Result<Schedule, EngineError> {
    Engine::new().generate(input, options)
}

/// Verifies the section factory's contract: every assigned teacher
/// exists and is qualified for the section's course.
fn check_staffing(sections: &[Section], teachers: &[Teacher]) -> Result<(), EngineError> {
    let teacher_by_id: HashMap<&str, &Teacher> =
        teachers.iter().map(|t| (t.id.as_str(), t)).collect();

    for section in sections {
        if let Some(teacher_id) = section.teacher_id.as_deref() {
            match teacher_by_id.get(teacher_id) {
                None => {
                    return Err(EngineError::Internal {
                        phase: "sections",
                        message: format!(
                            "section {} assigned unknown teacher {teacher_id}",
                            section.id
                        ),
                    })
                }
                Some(teacher) if !teacher.is_qualified(&section.course_id) => {
                    return Err(EngineError::Internal {
                        phase: "sections",
                        message: format!(
                            "teacher {teacher_id} is not qualified for {}",
                            section.course_id
                        ),
                    })
                }
                Some(_) => {}
            }
        }
    }

    Ok(())
}
