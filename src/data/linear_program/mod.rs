//! # Representing linear programs
//!
//! Linear programs are stored in standard form: maximize `c·x` subject to `Ax <= b` and `x >= 0`.
//! Every constraint is a `<=` constraint and every variable is nonnegative; other forms should be
//! rewritten by the caller before constructing a `LinearProgram`.
use thiserror::Error;

use crate::data::number_types::traits::Real;

pub mod solution;

/// A linear program in standard form.
///
/// Validated on construction and immutable afterwards. The solver only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram<F> {
    /// Objective function coefficients, one per variable.
    objective_function: Vec<F>,
    /// Constraint matrix, stored row major with one row per constraint.
    lefthand_side: Vec<Vec<F>>,
    /// Right-hand side, one value per constraint.
    righthand_side: Vec<F>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new linear program `maximize c·x s.t. Ax <= b, x >= 0`.
    ///
    /// # Arguments
    ///
    /// * `objective_function`: Vector `c` of length `n`.
    /// * `lefthand_side`: Matrix `A` with `m` rows of length `n` each.
    /// * `righthand_side`: Vector `b` of length `m`.
    ///
    /// # Return value
    ///
    /// The linear program, or an `InconsistencyError` if the dimensions don't agree.
    pub fn new(
        objective_function: Vec<F>,
        lefthand_side: Vec<Vec<F>>,
        righthand_side: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        if objective_function.is_empty() {
            return Err(InconsistencyError::NoVariables);
        }
        if righthand_side.is_empty() {
            return Err(InconsistencyError::NoConstraints);
        }
        if lefthand_side.len() != righthand_side.len() {
            return Err(InconsistencyError::RowCount {
                rows: lefthand_side.len(),
                righthand_side: righthand_side.len(),
            });
        }
        if let Some((row, coefficients)) = lefthand_side.iter()
            .enumerate()
            .find(|(_, coefficients)| coefficients.len() != objective_function.len()) {
            return Err(InconsistencyError::ColumnCount {
                row,
                columns: coefficients.len(),
                variables: objective_function.len(),
            });
        }

        Ok(Self { objective_function, lefthand_side, righthand_side })
    }

    /// Objective function coefficients `c`.
    pub fn objective_function(&self) -> &[F] {
        &self.objective_function
    }

    /// Constraint matrix `A`, one row per constraint.
    pub fn lefthand_side(&self) -> &[Vec<F>] {
        &self.lefthand_side
    }

    /// Right-hand side `b`.
    pub fn righthand_side(&self) -> &[F] {
        &self.righthand_side
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.objective_function.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.righthand_side.len()
    }

    /// Whether a point satisfies all constraints and nonnegativity bounds up to `tolerance`.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        let nonnegative = x.iter().all(|&value| value >= -tolerance);
        let within_constraints = self.lefthand_side.iter()
            .zip(&self.righthand_side)
            .all(|(row, &b)| {
                let lhs = row.iter().zip(x).fold(F::zero(), |total, (&a, &v)| total + a * v);
                lhs <= b + tolerance
            });

        nonnegative && within_constraints
    }

    /// Value of the objective function at a point.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.objective_function.iter().zip(x).fold(F::zero(), |total, (&c, &v)| total + c * v)
    }
}

/// An `InconsistencyError` is returned when the data describing a linear program doesn't fit
/// together.
///
/// This error is not returned when the linear program is infeasible or unbounded. It is meant only
/// for descriptions of linear programs, and is never produced by the solver.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum InconsistencyError {
    /// The objective function has no coefficients.
    #[error("a linear program needs at least one variable")]
    NoVariables,
    /// The right-hand side has no values.
    #[error("a linear program needs at least one constraint")]
    NoConstraints,
    /// The number of constraint rows and right-hand side values differ.
    #[error("the constraint matrix has {rows} rows, but the right-hand side has {righthand_side} values")]
    RowCount {
        /// Number of rows in the constraint matrix.
        rows: usize,
        /// Number of values in the right-hand side.
        righthand_side: usize,
    },
    /// A constraint row has a different length than the objective function.
    #[error("row {row} of the constraint matrix has {columns} columns, but there are {variables} variables")]
    ColumnCount {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        columns: usize,
        /// Length of the objective function.
        variables: usize,
    },
}
