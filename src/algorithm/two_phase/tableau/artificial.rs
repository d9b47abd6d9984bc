//! # Artificial variable
//!
//! When the slack basis is infeasible, a single artificial variable with a coefficient of `-1` in
//! every row (the objective row included) is added to the tableau. Pivoting it into the most
//! infeasible row makes every right-hand side nonnegative at once, and turns the objective row
//! into a measure of the remaining infeasibility.
//!
//! The artificial column only exists inside a scope. An `ArtificialTableau` owns the tableau while
//! the column is attached, and `ArtificialTableau::close` is the only way to get the tableau back,
//! so a `Tableau` with an artificial column can't be observed outside of the first phase.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::algorithm::two_phase::tableau::{FREE_COLUMN, OBJECTIVE_ROW, Tableau};
use crate::data::number_types::traits::Real;

/// A tableau with the artificial column attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtificialTableau<F> {
    tableau: Tableau<F>,
}

impl<F: Real> Tableau<F> {
    /// Attach the artificial column and open its scope.
    pub fn into_artificial(mut self) -> ArtificialTableau<F> {
        debug_assert!(!self.has_artificial_column());

        for row in &mut self.rows {
            row.push(-F::one());
        }
        self.basic_vars.push(0);
        self.nr_variables += 1;

        ArtificialTableau { tableau: self }
    }

    /// Run `body` on this tableau with the artificial column attached.
    ///
    /// The column is removed again when `body` returns, whatever it returns. If `body` panics, the
    /// tableau is left in an unusable state.
    pub fn with_artificial_column<R>(
        &mut self,
        body: impl FnOnce(&mut ArtificialTableau<F>) -> R,
    ) -> R {
        let mut artificial = mem::replace(self, Tableau::vacant()).into_artificial();
        let result = body(&mut artificial);
        *self = artificial.close();

        result
    }

    /// A tableau without rows or columns, used as a placeholder while a scope is open.
    fn vacant() -> Self {
        Self {
            rows: Vec::new(),
            objective_function: Vec::new(),
            nr_real_variables: 0,
            nr_constraints: 0,
            nr_variables: 0,
            basic_vars: Vec::new(),
            tight_vars: Vec::new(),
            pivots_count: 0,
            requires_initialization: false,
            tolerance: F::zero(),
        }
    }
}

impl<F: Real> ArtificialTableau<F> {
    /// Index of the artificial variable, the last one.
    pub fn artificial_variable(&self) -> usize {
        self.tableau.nr_variables
    }

    /// Pivot the artificial variable into a row, replacing the variable that is basic there.
    ///
    /// When `row` is the most infeasible row, all right-hand sides are nonnegative afterwards.
    pub fn force_feasible(&mut self, row: usize) {
        let leaving = self.tableau.basic_variable(row);
        self.tableau.pivot(self.artificial_variable(), leaving);
    }

    /// Total infeasibility that the current basis leaves; equal to the artificial variable's value.
    pub fn residual_infeasibility(&self) -> F {
        -self.tableau.rows[OBJECTIVE_ROW][FREE_COLUMN]
    }

    /// Pivot the artificial variable out of the basis, if it is still in it.
    ///
    /// This is a basis change at zero level: the artificial variable should have value zero. The
    /// first nonbasic column, not the artificial one, with a nonzero entry in the artificial row
    /// enters.
    ///
    /// # Return value
    ///
    /// Whether a pivot was performed.
    pub fn drive_out_artificial(&mut self) -> bool {
        let artificial = self.artificial_variable();
        let Some(row) = self.tableau.basic_row(artificial) else {
            return false;
        };
        debug_assert!(self.tableau.constraint_value(row).abs() <= self.tableau.tolerance);

        let entering = (1..artificial)
            .filter(|&j| !self.tableau.is_in_basis(j))
            .find(|&j| self.tableau.rows[row][j].abs() > self.tableau.tolerance);
        match entering {
            Some(entering) => self.tableau.pivot(entering, artificial),
            // The slack columns make the constraint matrix full rank.
            None => panic!("Row {} has no column to replace the artificial variable.", row),
        }

        true
    }

    /// Remove the artificial column and close the scope.
    ///
    /// If the artificial variable is still basic, its row is left without a basic variable. This
    /// happens when the first phase stops early, either because the problem turned out infeasible
    /// or because the pivot budget ran out.
    pub fn close(self) -> Tableau<F> {
        let mut tableau = self.tableau;
        debug_assert!(tableau.has_artificial_column());

        let artificial = tableau.nr_variables;
        if let Some(row) = tableau.basic_row(artificial) {
            tableau.tight_vars[row] = 0;
        }
        for row in &mut tableau.rows {
            row.pop();
        }
        tableau.basic_vars.pop();
        tableau.nr_variables -= 1;

        tableau
    }
}

impl<F> Deref for ArtificialTableau<F> {
    type Target = Tableau<F>;

    fn deref(&self) -> &Self::Target {
        &self.tableau
    }
}

impl<F> DerefMut for ArtificialTableau<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tableau
    }
}

impl<F: Real> Display for ArtificialTableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        self.tableau.fmt(f)
    }
}
