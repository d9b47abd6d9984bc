//! # Representation of solutions
//!
//! While the simplex method runs, and once it terminates, the state of the tableau is captured in a
//! `Solution`. A `Solution` is a copy: it never refers back to the tableau that it was taken from,
//! so consumers can keep it around for as long as they like.
use std::fmt::{self, Display, Formatter};

use enum_map::Enum;
use itertools::Itertools;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// How far the solver got with a linear program.
///
/// Each completed attempt ends in exactly one of `Optimal`, `Infeasible`, `Unbounded` and
/// `IterationLimitExceeded`. Snapshots taken along the way, before a verdict is known, are
/// `InProgress`.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Status {
    /// No reduced cost is positive; the current vertex is optimal.
    Optimal,
    /// No point satisfies all constraints.
    Infeasible,
    /// The objective can be increased without limit.
    Unbounded,
    /// The pivot budget ran out before a verdict was reached.
    IterationLimitExceeded,
    /// A vertex on the way to a verdict.
    InProgress,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "The linear program is bounded",
            Status::Infeasible => "The linear program is INFEASIBLE",
            Status::Unbounded => "The linear program is UNBOUNDED",
            Status::IterationLimitExceeded => "simplex iteration bounds reached",
            Status::InProgress => "The linear program is being solved",
        })
    }
}

/// Snapshot of the simplex method at one basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    /// Value of each decision variable, in the order of the linear program.
    assignment: Vec<F>,
    /// Objective function value in the basis that was captured.
    ///
    /// During the first phase this is the value of the feasibility objective.
    objective_value: F,
    /// Number of pivots performed up to and including the one that produced this basis.
    iterations: usize,
    /// Name of the pivot rule that was used.
    strategy: &'static str,
    status: Status,
}

impl<F: Real> Solution<F> {
    /// Copy the current basic solution out of a tableau.
    pub(crate) fn capture(tableau: &Tableau<F>, strategy: &'static str, status: Status) -> Self {
        Self {
            assignment: tableau.extract_solution(),
            objective_value: tableau.objective_value(),
            iterations: tableau.pivots_count(),
            strategy,
            status,
        }
    }

    /// Values of the decision variables.
    pub fn assignment(&self) -> &[F] {
        &self.assignment
    }

    /// Value of the objective function at `assignment`.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Number of pivots performed when this snapshot was taken.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Name of the pivot rule used to compute this solution.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Whether this snapshot is optimal or still on its way.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl<F: Real> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.status {
            Status::Optimal | Status::InProgress => {
                writeln!(
                    f,
                    "Possible optimal solution is: {}",
                    self.assignment.iter()
                        .enumerate()
                        .format_with(", ", |(i, value), f| f(&format_args!("x_{} = {}", i + 1, value))),
                )?;
                writeln!(f, "The objective value for this solution is: {}", self.objective_value)?;
                writeln!(f, "Total pivots count: {}", self.iterations)?;
                writeln!(f, "The pivot rule used: {}", self.strategy)
            },
            status => writeln!(f, "{}", status),
        }
    }
}
