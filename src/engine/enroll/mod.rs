//! Phase 4: student assignment.
//!
//! The primary path formulates a binary integer program and submits it
//! to the configured backend; Optimal and Feasible are both accepted.
//! Any other status activates the greedy fallback — the engine always
//! produces an enrollment, and the choice of path is recorded in the
//! schedule metadata as a warning plus the algorithm tag.

mod greedy;
mod ilp;

use log::{info, warn};

use crate::models::{AssignmentStrategy, Course, Section, Student, Unassigned};
use crate::solver::MipSolver;

/// What Phase 4 produced, beyond the enrollments written into sections.
pub(crate) struct EnrollOutcome {
    /// Which path produced the enrollment.
    pub strategy: AssignmentStrategy,
    /// Required requests that could not be placed.
    pub unassigned: Vec<Unassigned>,
    /// Non-fatal conditions (currently only fallback activation).
    pub warnings: Vec<String>,
}

/// Enrolls students into sections via ILP or the greedy fallback.
pub(crate) fn assign_students(
    sections: &mut [Section],
    students: &[Student],
    courses: &[Course],
    solver: &dyn MipSolver,
    use_ilp: bool,
) -> EnrollOutcome {
    if !use_ilp {
        info!("ILP disabled; using greedy assignment");
        return EnrollOutcome {
            strategy: AssignmentStrategy::Greedy,
            unassigned: greedy::assign_students(sections, students, courses),
            warnings: Vec::new(),
        };
    }

    let (model, candidates) = ilp::build_model(sections, students, courses);
    if model.var_count() == 0 {
        // Nothing to decide; the empty solution is trivially optimal
        let unassigned = ilp::apply_solution(sections, students, courses, &candidates, &[]);
        return EnrollOutcome {
            strategy: AssignmentStrategy::Ilp,
            unassigned,
            warnings: Vec::new(),
        };
    }

    let solution = solver.solve(&model);
    if solution.status.is_usable() {
        info!(
            "ILP assignment accepted ({:?}, objective {})",
            solution.status, solution.objective
        );
        let unassigned =
            ilp::apply_solution(sections, students, courses, &candidates, &solution.values);
        return EnrollOutcome {
            strategy: AssignmentStrategy::Ilp,
            unassigned,
            warnings: Vec::new(),
        };
    }

    let warning = format!(
        "MIP solver returned {:?}; falling back to greedy assignment",
        solution.status
    );
    warn!("{warning}");
    EnrollOutcome {
        strategy: AssignmentStrategy::Greedy,
        unassigned: greedy::assign_students(sections, students, courses),
        warnings: vec![warning],
    }
}
