use log::trace;

use crate::algorithm::error::SimplexError;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// What a single step of the second phase did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Progress {
    /// A pivot increased (or kept) the objective value; more steps may be needed.
    Pivoted,
    /// No pivot was performed, because the current basis is optimal.
    Optimal,
}

/// Increases the objective value of the basic feasible solution with at most one pivot.
///
/// While calling this method, a number of requirements should be satisfied:
/// - The objective row should be installed and expressed in the current basis.
/// - All constraint values need to be nonnegative (primal feasibility).
///
/// # Return value
///
/// Whether a pivot was performed, or an error if the problem is unbounded or the budget is
/// exhausted. It cannot be infeasible, as a feasible solution is needed to start using this method.
pub(super) fn step<F, PR>(
    tableau: &mut Tableau<F>,
    rule: &PR,
    max_iterations: usize,
) -> Result<Progress, SimplexError>
where
    F: Real,
    PR: PivotRule<F>,
{
    debug_assert!(!tableau.has_artificial_column());
    debug_assert!((1..=tableau.nr_constraints())
        .all(|row| tableau.constraint_value(row) >= -tableau.tolerance()));

    if tableau.is_at_optimum() {
        return Ok(Progress::Optimal);
    }
    if tableau.pivots_count() >= max_iterations {
        return Err(SimplexError::IterationsLimitExceeded { limit: max_iterations });
    }

    let candidates = tableau.entering_candidates();
    let Some(entering) = rule.find_entering(tableau, &candidates) else {
        panic!("Pivot rule {} selected none of the candidates {:?}.", rule.name(), candidates);
    };
    match rule.find_leaving_constraint(tableau, entering) {
        Some(row) => {
            let leaving = tableau.basic_variable(row);
            tableau.pivot(entering, leaving);
            trace!("{}", tableau);

            Ok(Progress::Pivoted)
        },
        None => Err(SimplexError::ProblemUnbounded),
    }
}
