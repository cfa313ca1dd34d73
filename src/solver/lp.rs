//! `good_lp` backend.

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use log::{debug, info};

use super::model::{MipModel, MipSolution, SolveStatus};
use super::MipSolver;

/// The default MIP backend, delegating to `good_lp`'s default solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LpSolver;

impl LpSolver {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl MipSolver for LpSolver {
    fn solve(&self, model: &MipModel) -> MipSolution {
        info!(
            "Submitting MIP with {} variables and {} constraints",
            model.var_count(),
            model.constraint_count()
        );

        let mut problem = ProblemVariables::new();
        let vars: Vec<Variable> = model
            .vars
            .iter()
            .map(|_| problem.add(variable().binary()))
            .collect();

        let objective: Expression = model
            .vars
            .iter()
            .zip(&vars)
            .map(|(v, x)| Expression::from(*x) * v.objective)
            .sum();

        let mut solver_model = problem.maximise(objective).using(default_solver);
        for row in &model.constraints {
            let lhs: Expression = row
                .terms
                .iter()
                .map(|(idx, coeff)| Expression::from(vars[*idx]) * *coeff)
                .sum();
            solver_model.add_constraint(constraint!(lhs <= row.rhs));
        }

        match solver_model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = vars.iter().map(|v| solution.value(*v)).collect();
                let objective = model
                    .vars
                    .iter()
                    .zip(&values)
                    .map(|(v, x)| v.objective * x)
                    .sum();
                debug!("Solver returned a solution with objective {objective}");
                MipSolution {
                    status: SolveStatus::Optimal,
                    objective,
                    values,
                }
            }
            Err(ResolutionError::Infeasible) => {
                info!("Solver reported infeasible");
                MipSolution::without_solution(SolveStatus::Infeasible)
            }
            Err(ResolutionError::Unbounded) => {
                info!("Solver reported unbounded");
                MipSolution::without_solution(SolveStatus::Unbounded)
            }
            Err(e) => {
                info!("Solver failed: {e}");
                MipSolution::without_solution(SolveStatus::Error)
            }
        }
    }
}
