//! In-process stub backend.

use super::model::{MipModel, MipSolution, SolveStatus};
use super::MipSolver;

/// A backend that returns a fixed status without solving anything.
///
/// With a usable status it reports every variable at 1.0 (or canned
/// values set via [`StubSolver::with_values`]); with any other status it
/// reports no solution. Lets tests drive the engine's status handling,
/// including fallback activation, without a real solver.
#[derive(Debug, Clone, Default)]
pub struct StubSolver {
    status: Option<SolveStatus>,
    values: Option<Vec<f64>>,
}

impl StubSolver {
    /// A stub reporting every variable at 1.0 with `Optimal` status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the reported status.
    pub fn with_status(mut self, status: SolveStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Fixes the reported variable values (implies a usable status).
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }
}

impl MipSolver for StubSolver {
    fn solve(&self, model: &MipModel) -> MipSolution {
        let status = self.status.unwrap_or(SolveStatus::Optimal);
        if !status.is_usable() {
            return MipSolution::without_solution(status);
        }

        let values = match &self.values {
            Some(values) => values.clone(),
            None => vec![1.0; model.var_count()],
        };
        let objective = model
            .vars
            .iter()
            .zip(&values)
            .map(|(v, x)| v.objective * x)
            .sum();

        MipSolution {
            status,
            objective,
            values,
        }
    }
}
