//! # Problems that tests inside the crate share.
//!
//! Convention for function names:
//!
//! * `fn linear_program()`
//! * `fn tableau_form()`
