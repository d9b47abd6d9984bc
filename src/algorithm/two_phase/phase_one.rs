//! # Phase one: finding a feasible basis
//!
//! The slack basis is feasible only when `b >= 0`. Otherwise, a single artificial variable is
//! pivoted into the most violated row, after which the simplex method minimizes its value.
use log::{debug, trace};

use crate::algorithm::error::SimplexError;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::artificial::ArtificialTableau;
use crate::data::number_types::traits::Real;

/// What a single step of the first phase did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Progress {
    /// A pivot reduced (or kept) the infeasibility; more steps are needed.
    Pivoted,
    /// The artificial variable is at zero level and the scope can be closed.
    Feasible {
        /// Whether the artificial variable had to be pivoted out of the basis to get there.
        pivoted: bool,
    },
}

/// Row to force the artificial variable into, if the slack basis is infeasible.
pub(super) fn violated_row<F: Real>(tableau: &Tableau<F>) -> Option<usize> {
    if !tableau.requires_initialization() {
        return None;
    }

    let infeasibility = tableau.most_infeasible_row();
    if infeasibility.value <= F::zero() {
        return None;
    }

    debug!(
        "Row {} (basic variable x_{}) is violated by {}, attaching the artificial variable",
        infeasibility.row, infeasibility.basic_variable, infeasibility.value,
    );
    Some(infeasibility.row)
}

/// Attach the artificial column and pivot it into `row`.
///
/// This pivot counts like any other.
pub(super) fn open<F: Real>(tableau: Tableau<F>, row: usize) -> ArtificialTableau<F> {
    let mut artificial = tableau.into_artificial();
    artificial.force_feasible(row);
    trace!("{}", artificial);

    artificial
}

/// Perform at most one pivot towards a feasible basis.
///
/// # Arguments
///
/// * `artificial`: Tableau with the artificial variable in a primal feasible basis.
/// * `rule`: Strategy deciding which variable enters.
/// * `max_iterations`: Budget of pivots, shared with the second phase.
///
/// # Return value
///
/// How the tableau was changed, or an error if the linear program is infeasible or the budget is
/// exhausted. The caller is responsible for closing the artificial scope in either case.
pub(super) fn step<F, PR>(
    artificial: &mut ArtificialTableau<F>,
    rule: &PR,
    max_iterations: usize,
) -> Result<Progress, SimplexError>
where
    F: Real,
    PR: PivotRule<F>,
{
    if artificial.is_at_optimum() {
        let residual = artificial.residual_infeasibility();
        if residual > artificial.tolerance() {
            debug!("Infeasibility of {} remains after {} pivots", residual, artificial.pivots_count());
            return Err(SimplexError::ProblemInfeasible);
        }

        let pivoted = artificial.drive_out_artificial();
        if pivoted {
            trace!("{}", artificial);
        }
        return Ok(Progress::Feasible { pivoted });
    }

    if artificial.pivots_count() >= max_iterations {
        return Err(SimplexError::IterationsLimitExceeded { limit: max_iterations });
    }

    let candidates = artificial.entering_candidates();
    let Some(entering) = rule.find_entering(artificial, &candidates) else {
        panic!("Pivot rule {} selected none of the candidates {:?}.", rule.name(), candidates);
    };
    let Some(row) = rule.find_leaving_constraint(artificial, entering) else {
        // The artificial objective is bounded from above by zero.
        panic!("Artificial cost can not be unbounded.");
    };
    let leaving = artificial.basic_variable(row);
    artificial.pivot(entering, leaving);
    trace!("{}", artificial);

    Ok(Progress::Pivoted)
}
