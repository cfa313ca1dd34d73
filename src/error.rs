//! Engine error taxonomy.
//!
//! Only two conditions abort a solve: broken input and violated internal
//! invariants. Infeasibility is never an error — students that cannot be
//! placed are reported in the schedule's `unassigned` list, and a solver
//! failure is recovered by the greedy fallback with a warning recorded
//! in the schedule metadata.

use thiserror::Error;

use crate::validation::ValidationError;

/// A fatal engine error, naming the condition that stopped the solve.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input failed validation; the engine did not start.
    #[error("invalid input: {}", format_validation_errors(.0))]
    Input(Vec<ValidationError>),

    /// An internal invariant was violated mid-pipeline.
    #[error("internal error in {phase}: {message}")]
    Internal {
        /// The pipeline phase that detected the violation.
        phase: &'static str,
        /// Diagnostic description.
        message: String,
    },
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_input_error_display() {
        let err = EngineError::Input(vec![ValidationError {
            kind: ValidationErrorKind::DuplicateId,
            message: "Duplicate course ID: MATH9".to_string(),
        }]);
        let text = err.to_string();
        assert!(text.contains("invalid input"));
        assert!(text.contains("MATH9"));
    }

    #[test]
    fn test_internal_error_display() {
        let err = EngineError::Internal {
            phase: "sections",
            message: "teacher t1 not qualified for GOV".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "internal error in sections: teacher t1 not qualified for GOV"
        );
    }
}
