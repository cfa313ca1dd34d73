//! MIP solver seam.
//!
//! Model construction produces a [`MipModel`] value independent of any
//! solver library; a [`MipSolver`] backend submits it and reports
//! `{status, objective, values}`. The engine ships two backends:
//! [`LpSolver`] (the real one, via `good_lp`) and [`StubSolver`] (a
//! fixed-status stand-in for tests and fallback exercises).

mod lp;
mod model;
mod stub;

pub use lp::LpSolver;
pub use model::{MipConstraint, MipModel, MipSolution, MipVar, SolveStatus};
pub use stub::StubSolver;

/// A backend that can solve a binary maximization program.
///
/// Implementations are treated as opaque: time limits and tolerances
/// are the backend's own defaults. The engine only branches on the
/// returned status.
pub trait MipSolver {
    /// Solves the model.
    fn solve(&self, model: &MipModel) -> MipSolution;
}
