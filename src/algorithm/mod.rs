//! # Algorithms
//!
//! The two phase simplex method, and the ways in which it can stop without an optimal solution.
pub mod error;
pub mod two_phase;
