//! # Strategies
//!
//! Decisions that can be made in different ways while running the simplex method.
pub mod pivot_rule;
