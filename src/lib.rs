//! # A stepwise linear program solver
//!
//! Linear programs in standard form, `maximize c·x s.t. Ax <= b, x >= 0`, are solved using the two
//! phase Simplex Method on a dense tableau as described in the book Combinatorial Optimization by
//! Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Besides the final solution, the solver can produce every basic solution that it visits along the
//! way, one pivot at a time.
//!
//! ```
//! use lpstep::{LinearProgram, MaxCoefficient, solve};
//!
//! let lp = LinearProgram::new(
//!     vec![5f64, 4f64, 3f64],
//!     vec![vec![2f64, 3f64, 1f64], vec![4f64, 1f64, 2f64], vec![3f64, 4f64, 2f64]],
//!     vec![5f64, 11f64, 8f64],
//! ).unwrap();
//! let solution = solve(&lp, MaxCoefficient, 1000).unwrap();
//! assert_eq!(solution.assignment(), &[2f64, 0f64, 1f64]);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;

pub use crate::algorithm::error::SimplexError;
pub use crate::algorithm::two_phase::{Config, DEFAULT_MAX_ITERATIONS, Simplex, SolutionSteps, solve, solve_steps};
pub use crate::algorithm::two_phase::strategy::pivot_rule::{MaxCoefficient, MinCoefficient, PivotRule};
pub use crate::data::linear_program::{InconsistencyError, LinearProgram};
pub use crate::data::linear_program::solution::{Solution, Status};
