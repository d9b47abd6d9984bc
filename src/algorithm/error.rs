//! # Verdicts without a solution
//!
//! The simplex method can stop without an optimal solution for three reasons. Each of these is a
//! property of the linear program (or of the pivot budget), not a transient fault, so they are
//! reported to the caller as they are and never retried.
//!
//! Internal inconsistencies, like pivoting on a column that is already basic, are not represented
//! here. Those are bugs and cause a panic.
use thiserror::Error;

use crate::data::linear_program::solution::Status;

/// A `SimplexError` is returned when the simplex method reaches a verdict other than optimality.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimplexError {
    /// The pivot budget was exhausted, in either phase, before a verdict was reached.
    ///
    /// Solving again with a larger budget might succeed.
    #[error("Simplex max iterations limit of {limit} pivots reached")]
    IterationsLimitExceeded {
        /// The budget that was exhausted.
        limit: usize,
    },
    /// The first phase could not reduce the infeasibility to zero.
    #[error("The linear program is INFEASIBLE")]
    ProblemInfeasible,
    /// An improving variable was found without any constraint limiting it.
    #[error("The linear program is UNBOUNDED")]
    ProblemUnbounded,
}

impl SimplexError {
    /// The terminal status that this error represents.
    pub fn status(&self) -> Status {
        match self {
            SimplexError::IterationsLimitExceeded { .. } => Status::IterationLimitExceeded,
            SimplexError::ProblemInfeasible => Status::Infeasible,
            SimplexError::ProblemUnbounded => Status::Unbounded,
        }
    }
}
