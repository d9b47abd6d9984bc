//! # The two phase Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm works on a dense tableau, which is brought in canonical form with respect to a new
//! basis by a Gauss-Jordan elimination step on every pivot.
//!
//! The first phase finds a feasible basis, if the slack basis isn't one already. The second phase
//! optimizes the objective function from there. Both share a single budget of pivots.
//!
//! The solver can be driven to completion with `solve`, or one pivot at a time through the
//! `SolutionSteps` iterator returned by `solve_steps`.
use std::iter::FusedIterator;
use std::mem;

use log::debug;

use crate::algorithm::error::SimplexError;
use crate::algorithm::two_phase::strategy::pivot_rule::{MaxCoefficient, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::artificial::ArtificialTableau;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::{Solution, Status};
use crate::data::number_types::traits::Real;

pub mod tableau;
pub mod strategy;
mod phase_one;
mod phase_two;


/// Number of pivots after which the solver gives up, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Parameters of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<F> {
    /// Budget of pivots, for both phases combined.
    pub max_iterations: usize,
    /// Values within this distance from zero are treated as zero in sign tests.
    pub tolerance: F,
}

impl<F: Real> Default for Config<F> {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: F::default_tolerance(),
        }
    }
}

/// A configured solver.
///
/// Holds no state between solves; each call to `solve` or `steps` works on a tableau of its own.
#[derive(Debug, Clone)]
pub struct Simplex<F, PR = MaxCoefficient> {
    rule: PR,
    config: Config<F>,
}

impl<F: Real> Default for Simplex<F> {
    fn default() -> Self {
        Self::with_config(MaxCoefficient, Config::default())
    }
}

impl<F: Real, PR: PivotRule<F>> Simplex<F, PR> {
    /// Create a solver with the default tolerance.
    pub fn new(rule: PR, max_iterations: usize) -> Self {
        Self::with_config(rule, Config { max_iterations, ..Config::default() })
    }

    /// Create a solver with custom parameters.
    pub fn with_config(rule: PR, config: Config<F>) -> Self {
        Self { rule, config }
    }

    /// The parameters this solver uses.
    pub fn config(&self) -> &Config<F> {
        &self.config
    }

    /// Solve a linear program to completion.
    ///
    /// # Return value
    ///
    /// The optimal solution, or an error describing why there is none (or why it wasn't found).
    pub fn solve(&self, linear_program: &LinearProgram<F>) -> Result<Solution<F>, SimplexError> {
        self.steps(linear_program).finish()
    }

    /// Solve a linear program one pivot at a time.
    ///
    /// Nothing is computed until the returned iterator is advanced.
    pub fn steps(&self, linear_program: &LinearProgram<F>) -> SolutionSteps<F, &PR> {
        SolutionSteps::new(linear_program, &self.rule, self.config)
    }
}

/// Solve a linear program to completion.
///
/// # Arguments
///
/// * `linear_program`: Problem to solve.
/// * `rule`: Strategy for choosing the entering variable.
/// * `max_iterations`: Budget of pivots.
///
/// # Return value
///
/// The optimal solution, or the reason why it wasn't found.
pub fn solve<F: Real, PR: PivotRule<F>>(
    linear_program: &LinearProgram<F>,
    rule: PR,
    max_iterations: usize,
) -> Result<Solution<F>, SimplexError> {
    solve_steps(linear_program, rule, max_iterations).finish()
}

/// Solve a linear program one pivot at a time.
///
/// See `SolutionSteps` for what is produced.
pub fn solve_steps<F: Real, PR: PivotRule<F>>(
    linear_program: &LinearProgram<F>,
    rule: PR,
    max_iterations: usize,
) -> SolutionSteps<F, PR> {
    SolutionSteps::new(linear_program, rule, Config { max_iterations, ..Config::default() })
}

/// Lazy trajectory of the simplex method.
///
/// Every call to `next` performs at most one pivot and yields a snapshot of the basis that the
/// pivot produced. Snapshots in the first phase carry the value of the feasibility objective,
/// which reaches zero when a feasible basis is found.
///
/// The snapshot that reaches the optimum has status `Optimal`, earlier ones `InProgress`. If the
/// second phase starts at the optimum, a single `Optimal` snapshot is yielded for it. When the
/// solver fails, the error is the last item.
///
/// Pivoting the artificial variable out of the basis at the end of the first phase is not limited
/// by `max_iterations`, so the reported number of iterations can exceed it by one.
#[derive(Debug)]
pub struct SolutionSteps<F, PR> {
    rule: PR,
    config: Config<F>,
    stage: Stage<F>,
}

/// Where the solver is.
#[derive(Debug)]
enum Stage<F> {
    /// The first phase has not yet been considered.
    Initializing(Tableau<F>),
    PhaseOne(ArtificialTableau<F>),
    PhaseTwo {
        tableau: Tableau<F>,
        /// Whether this phase performed a pivot, and hence yielded a snapshot, already.
        pivoted: bool,
    },
    /// A verdict was reached; the tableau is kept as it was at that moment.
    Done(Tableau<F>),
    /// Only observed while the stage is being replaced.
    Vacant,
}

impl<F: Real, PR: PivotRule<F>> SolutionSteps<F, PR> {
    fn new(linear_program: &LinearProgram<F>, rule: PR, config: Config<F>) -> Self {
        let tableau = Tableau::with_tolerance(linear_program, config.tolerance);

        Self { rule, config, stage: Stage::Initializing(tableau) }
    }

    /// Run the solver to completion.
    ///
    /// # Return value
    ///
    /// The last snapshot, which is optimal, or the error that stopped the solver.
    pub fn finish(self) -> Result<Solution<F>, SimplexError> {
        match self.last() {
            Some(result) => result,
            None => panic!("The solver should yield at least one solution or error."),
        }
    }

    /// The tableau in its current state, not available while a transition is in progress.
    #[cfg(test)]
    pub(crate) fn tableau(&self) -> Option<&Tableau<F>> {
        match &self.stage {
            Stage::Initializing(tableau)
            | Stage::PhaseTwo { tableau, .. }
            | Stage::Done(tableau) => Some(tableau),
            Stage::PhaseOne(artificial) => Some(&**artificial),
            Stage::Vacant => None,
        }
    }

    fn snapshot(&self, tableau: &Tableau<F>, status: Status) -> Solution<F> {
        Solution::capture(tableau, self.rule.name(), status)
    }

    /// Install the objective function and move on to the second phase.
    fn start_phase_two(&mut self, mut tableau: Tableau<F>) {
        debug!("Starting phase two after {} pivots", tableau.pivots_count());
        tableau.install_objective();
        self.stage = Stage::PhaseTwo { tableau, pivoted: false };
    }

    fn fail(&mut self, tableau: Tableau<F>, error: SimplexError) -> Option<Result<Solution<F>, SimplexError>> {
        debug!("Stopped after {} pivots: {}", tableau.pivots_count(), error);
        self.stage = Stage::Done(tableau);

        Some(Err(error))
    }
}

impl<F: Real, PR: PivotRule<F>> Iterator for SolutionSteps<F, PR> {
    type Item = Result<Solution<F>, SimplexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match mem::replace(&mut self.stage, Stage::Vacant) {
                Stage::Initializing(tableau) => match phase_one::violated_row(&tableau) {
                    Some(_) if tableau.pivots_count() >= self.config.max_iterations => {
                        let limit = self.config.max_iterations;
                        return self.fail(tableau, SimplexError::IterationsLimitExceeded { limit });
                    },
                    Some(row) => {
                        let artificial = phase_one::open(tableau, row);
                        let solution = self.snapshot(&artificial, Status::InProgress);
                        self.stage = Stage::PhaseOne(artificial);
                        return Some(Ok(solution));
                    },
                    None => self.start_phase_two(tableau),
                },
                Stage::PhaseOne(mut artificial) => {
                    match phase_one::step(&mut artificial, &self.rule, self.config.max_iterations) {
                        Ok(phase_one::Progress::Pivoted) => {
                            let solution = self.snapshot(&artificial, Status::InProgress);
                            self.stage = Stage::PhaseOne(artificial);
                            return Some(Ok(solution));
                        },
                        Ok(phase_one::Progress::Feasible { pivoted }) => {
                            let solution = pivoted.then(|| self.snapshot(&artificial, Status::InProgress));
                            self.start_phase_two(artificial.close());
                            if let Some(solution) = solution {
                                return Some(Ok(solution));
                            }
                        },
                        Err(error) => return self.fail(artificial.close(), error),
                    }
                },
                Stage::PhaseTwo { mut tableau, pivoted } => {
                    match phase_two::step(&mut tableau, &self.rule, self.config.max_iterations) {
                        Ok(phase_two::Progress::Pivoted) => {
                            let status = if tableau.is_at_optimum() {
                                debug!("Optimal after {} pivots", tableau.pivots_count());
                                Status::Optimal
                            } else {
                                Status::InProgress
                            };
                            let solution = self.snapshot(&tableau, status);
                            self.stage = Stage::PhaseTwo { tableau, pivoted: true };
                            return Some(Ok(solution));
                        },
                        Ok(phase_two::Progress::Optimal) => {
                            let solution = (!pivoted).then(|| {
                                debug!("Optimal after {} pivots", tableau.pivots_count());
                                self.snapshot(&tableau, Status::Optimal)
                            });
                            self.stage = Stage::Done(tableau);
                            return solution.map(Ok);
                        },
                        Err(error) => return self.fail(tableau, error),
                    }
                },
                done @ Stage::Done(_) => {
                    self.stage = done;
                    return None;
                },
                Stage::Vacant => return None,
            }
        }
    }
}

impl<F: Real, PR: PivotRule<F>> FusedIterator for SolutionSteps<F, PR> {}
