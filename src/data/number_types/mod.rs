//! # Number types
//!
//! The tableau is defined over floating point numbers. Rather than fixing `f64`, the algorithms are
//! written against a small trait such that `f32` (or any other `num_traits::Float`) works without
//! adaptation.
//!
//! Floating point arithmetic accumulates rounding errors, so every sign test in the algorithm is
//! made against a tolerance.
pub mod traits;
