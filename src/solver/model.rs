//! Solver-independent MIP model.
//!
//! A [`MipModel`] is a plain value: binary variables with objective
//! coefficients and `≤` constraint rows. Nothing here imports a solver
//! library, so model construction is testable without one and any
//! backend can consume the same model.

/// A binary decision variable.
#[derive(Debug, Clone)]
pub struct MipVar {
    /// Diagnostic label (e.g. `"s1/MATH9-2"`).
    pub label: String,
    /// Coefficient in the maximization objective.
    pub objective: f64,
}

/// A linear `Σ coeff·x ≤ rhs` row.
#[derive(Debug, Clone)]
pub struct MipConstraint {
    /// Diagnostic label (e.g. `"capacity/MATH9-1"`).
    pub label: String,
    /// `(variable index, coefficient)` terms.
    pub terms: Vec<(usize, f64)>,
    /// Right-hand side.
    pub rhs: f64,
}

/// A binary maximization program.
#[derive(Debug, Clone, Default)]
pub struct MipModel {
    /// Decision variables, in creation order.
    pub vars: Vec<MipVar>,
    /// Constraint rows, in creation order.
    pub constraints: Vec<MipConstraint>,
}

impl MipModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binary variable; returns its index.
    pub fn add_binary(&mut self, label: impl Into<String>, objective: f64) -> usize {
        self.vars.push(MipVar {
            label: label.into(),
            objective,
        });
        self.vars.len() - 1
    }

    /// Adds a `Σ coeff·x ≤ rhs` row.
    pub fn add_le_constraint(
        &mut self,
        label: impl Into<String>,
        terms: Vec<(usize, f64)>,
        rhs: f64,
    ) {
        self.constraints.push(MipConstraint {
            label: label.into(),
            terms,
            rhs,
        });
    }

    /// Number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of constraint rows.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Outcome classification of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Best objective certified.
    Optimal,
    /// A solution satisfying all constraints, optimality not certified.
    Feasible,
    /// No solution satisfies the constraints.
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The backend failed (timeout, numeric trouble, missing solver).
    Error,
}

impl SolveStatus {
    /// Whether a solution with variable values is available.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

/// The result of submitting a [`MipModel`] to a backend.
#[derive(Debug, Clone)]
pub struct MipSolution {
    /// Outcome classification.
    pub status: SolveStatus,
    /// Objective value; meaningless unless `status.is_usable()`.
    pub objective: f64,
    /// Per-variable values, parallel to `MipModel::vars`; empty unless
    /// `status.is_usable()`.
    pub values: Vec<f64>,
}

impl MipSolution {
    /// A no-solution result with the given status.
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            objective: 0.0,
            values: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_construction() {
        let mut model = MipModel::new();
        let x = model.add_binary("x", 1000.0);
        let y = model.add_binary("y", 9.0);
        model.add_le_constraint("at-most-one", vec![(x, 1.0), (y, 1.0)], 1.0);

        assert_eq!(model.var_count(), 2);
        assert_eq!(model.constraint_count(), 1);
        assert_eq!(model.vars[x].label, "x");
        assert!((model.vars[y].objective - 9.0).abs() < 1e-10);
        assert_eq!(model.constraints[0].terms.len(), 2);
        assert!((model.constraints[0].rhs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_status_usability() {
        assert!(SolveStatus::Optimal.is_usable());
        assert!(SolveStatus::Feasible.is_usable());
        assert!(!SolveStatus::Infeasible.is_usable());
        assert!(!SolveStatus::Unbounded.is_usable());
        assert!(!SolveStatus::Error.is_usable());
    }

    #[test]
    fn test_without_solution() {
        let sol = MipSolution::without_solution(SolveStatus::Infeasible);
        assert_eq!(sol.status, SolveStatus::Infeasible);
        assert!(sol.values.is_empty());
    }
}
