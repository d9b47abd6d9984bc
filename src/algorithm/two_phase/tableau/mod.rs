//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored densely and has the following layout:
//!
//! ```text
//! ------------------------------------------------------------------
//! | objective |  <reduced costs>  |   <zeros>   | <artificial cost> |
//! ------------------------------------------------------------------
//! |   -b_i    | <real variables>  |  <slacks>   |   <artificial>    |
//! ------------------------------------------------------------------
//! ```
//!
//! Column `0` holds the free term of each row, so variables are numbered from `1`, and row `0` is
//! the objective row, so constraints are numbered from `1`. The artificial column is only present
//! while the first phase runs, see the `artificial` module.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Index;

use itertools::Itertools;

use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;

pub mod artificial;

/// Index of the objective function row.
const OBJECTIVE_ROW: usize = 0;
/// Index of the column holding the (negated) right-hand side.
const FREE_COLUMN: usize = 0;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a copy of the problem data, rewritten with respect to the current basis, together with
/// the bookkeeping of which variable is basic in which row.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// Dense matrix of size `(m + 1) x (nr_variables + 1)`.
    ///
    /// This attribute changes with a basis change.
    rows: Vec<Vec<F>>,
    /// Objective function of the original problem, installed at the start of the second phase.
    objective_function: Vec<F>,

    /// Number of variables of the original problem.
    nr_real_variables: usize,
    /// Number of constraints, equal to the number of slack variables.
    nr_constraints: usize,
    /// Number of real, slack and (if attached) artificial variables.
    nr_variables: usize,

    /// Maps each variable to the row in which it is basic, or `0` if it's not basic.
    ///
    /// Index `0` stands for the free column and is unused.
    basic_vars: Vec<usize>,
    /// Maps each row to the variable that is basic in it.
    ///
    /// Reciprocal of `basic_vars`. Index `0` stands for the objective row and is unused.
    tight_vars: Vec<usize>,

    /// Number of pivots performed so far.
    pivots_count: usize,
    /// Whether the slack basis is infeasible, such that the first phase is needed.
    requires_initialization: bool,
    /// Values within this distance from zero are treated as zero in sign tests.
    tolerance: F,
}

/// The row that is most violated by the current basic solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Infeasibility<F> {
    /// Constraint row index, in range `1..=m`.
    pub row: usize,
    /// Amount by which the row is violated; positive if the basic solution is infeasible.
    pub value: F,
    /// Variable that is basic in `row`.
    pub basic_variable: usize,
}

impl<F: Real> Tableau<F> {
    /// Create a tableau with the slack variables as the initial basis.
    ///
    /// Every constraint is read as a `<=` constraint, so one slack variable per constraint is
    /// sufficient. The resulting basic solution is the origin, which is feasible if and only if
    /// `b >= 0`.
    pub fn new(linear_program: &LinearProgram<F>) -> Self {
        Self::with_tolerance(linear_program, F::default_tolerance())
    }

    /// Create a tableau that uses a custom tolerance for its sign tests.
    pub fn with_tolerance(linear_program: &LinearProgram<F>, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero());

        let nr_real_variables = linear_program.nr_variables();
        let nr_constraints = linear_program.nr_constraints();
        let nr_variables = nr_real_variables + nr_constraints;
        let slack_start = 1 + nr_real_variables;

        let mut rows = vec![vec![F::zero(); 1 + nr_variables]; 1 + nr_constraints];
        for (i, (coefficients, &b)) in linear_program.lefthand_side().iter()
            .zip(linear_program.righthand_side())
            .enumerate() {
            let row = &mut rows[1 + i];
            row[FREE_COLUMN] = -b;
            row[1..slack_start].copy_from_slice(coefficients);
            row[slack_start + i] = F::one();
        }

        let mut basic_vars = vec![0; 1 + nr_variables];
        let mut tight_vars = vec![0; 1 + nr_constraints];
        for row in 1..=nr_constraints {
            let slack = nr_real_variables + row;
            basic_vars[slack] = row;
            tight_vars[row] = slack;
        }

        let requires_initialization = linear_program.righthand_side().iter().any(|&b| b < F::zero());

        Self {
            rows,
            objective_function: linear_program.objective_function().to_vec(),
            nr_real_variables,
            nr_constraints,
            nr_variables,
            basic_vars,
            tight_vars,
            pivots_count: 0,
            requires_initialization,
            tolerance,
        }
    }

    /// All variables that could improve the objective function when brought into the basis.
    ///
    /// # Return value
    ///
    /// Nonbasic variable indices with a positive reduced cost, in increasing order.
    pub fn entering_candidates(&self) -> Vec<usize> {
        (1..=self.nr_variables)
            .filter(|&j| !self.is_in_basis(j))
            .filter(|&j| self.relative_cost(j) > self.tolerance)
            .collect()
    }

    /// Whether no reduced cost is positive.
    ///
    /// This is the stopping criterion of both phases, regardless of the pivot rule.
    pub fn is_at_optimum(&self) -> bool {
        self.rows[OBJECTIVE_ROW][1..].iter().all(|&cost| cost <= self.tolerance)
    }

    /// Exchange a basic variable for a nonbasic one with a Gauss-Jordan elimination step.
    ///
    /// # Arguments
    ///
    /// * `entering`: Variable that is not in the basis and will enter it.
    /// * `leaving`: Variable that is in the basis and will leave it.
    ///
    /// # Panics
    ///
    /// If `entering` is already basic or `leaving` is not. That can only be caused by a bug in the
    /// caller.
    pub fn pivot(&mut self, entering: usize, leaving: usize) {
        assert!(1 <= entering && entering <= self.nr_variables, "no variable {}", entering);
        assert!(1 <= leaving && leaving <= self.nr_variables, "no variable {}", leaving);
        assert_eq!(self.basic_vars[entering], 0, "entering variable {} must be nonbasic", entering);
        assert_ne!(self.basic_vars[leaving], 0, "leaving variable {} must be basic", leaving);

        let pivot_row = self.basic_vars[leaving];
        log::trace!(
            "pivot #{}: x_{} enters, x_{} leaves at row {}",
            self.pivots_count + 1, entering, leaving, pivot_row,
        );
        self.eliminate(pivot_row, entering);

        self.basic_vars[entering] = pivot_row;
        self.tight_vars[pivot_row] = entering;
        self.basic_vars[leaving] = 0;

        self.pivots_count += 1;
        debug_assert!(self.is_canonical());
    }

    /// Normalize a row on the pivot element and clear the pivot column from all other rows.
    fn eliminate(&mut self, pivot_row: usize, pivot_column: usize) {
        let pivot_value = self.rows[pivot_row][pivot_column];
        assert_ne!(pivot_value, F::zero(), "pivot element at ({}, {}) is zero", pivot_row, pivot_column);

        for value in &mut self.rows[pivot_row] {
            *value = *value / pivot_value;
        }

        let normalized = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row {
                continue;
            }

            let factor = row[pivot_column];
            for (value, &normalized_value) in row.iter_mut().zip(&normalized) {
                *value = *value - factor * normalized_value;
            }
        }
    }

    /// Replace the objective row by the objective function of the original problem.
    ///
    /// The new row is expressed with respect to the current basis, which the first phase might have
    /// changed: each basic column is eliminated from the objective row. This should happen exactly
    /// once, when the second phase starts.
    pub fn install_objective(&mut self) {
        debug_assert!(!self.has_artificial_column());

        let objective_row = &mut self.rows[OBJECTIVE_ROW];
        objective_row.iter_mut().for_each(|value| *value = F::zero());
        objective_row[1..=self.nr_real_variables].copy_from_slice(&self.objective_function);

        for variable in 1..=self.nr_variables {
            let row = self.basic_vars[variable];
            if row == 0 {
                continue;
            }

            let factor = self.rows[OBJECTIVE_ROW][variable] / self.rows[row][variable];
            let (objective_row, constraint_rows) = self.rows.split_at_mut(1);
            for (value, &basic_value) in objective_row[OBJECTIVE_ROW].iter_mut().zip(&constraint_rows[row - 1]) {
                *value = *value - factor * basic_value;
            }
        }
    }

    /// Find the constraint that the current basic solution violates the most.
    ///
    /// If several rows are violated equally, the first one is returned.
    pub fn most_infeasible_row(&self) -> Infeasibility<F> {
        let mut most = Infeasibility {
            row: 1,
            value: self.rows[1][FREE_COLUMN],
            basic_variable: self.tight_vars[1],
        };
        for row in 2..=self.nr_constraints {
            let value = self.rows[row][FREE_COLUMN];
            if value > most.value {
                most = Infeasibility { row, value, basic_variable: self.tight_vars[row] };
            }
        }

        most
    }

    /// Values of the original problem's variables in the current basic solution.
    ///
    /// Nonbasic variables are zero. A basic variable takes the right-hand side of its row, divided
    /// by its coefficient in that row. The coefficient is one after each completed pivot.
    pub fn extract_solution(&self) -> Vec<F> {
        (1..=self.nr_real_variables)
            .map(|variable| match self.basic_vars[variable] {
                0 => F::zero(),
                row => -self.rows[row][FREE_COLUMN] / self.rows[row][variable],
            })
            .collect()
    }

    /// Reduced cost of a variable, as currently in the objective row.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(1 <= j && j <= self.nr_variables);

        self.rows[OBJECTIVE_ROW][j]
    }

    /// Current right-hand side value of a constraint row.
    pub fn constraint_value(&self, row: usize) -> F {
        debug_assert!(1 <= row && row <= self.nr_constraints);

        -self.rows[row][FREE_COLUMN]
    }

    /// Current value of the objective function that is installed in the objective row.
    pub fn objective_value(&self) -> F {
        self.rows[OBJECTIVE_ROW][FREE_COLUMN]
    }

    /// Row in which a variable is basic, if any.
    pub fn basic_row(&self, variable: usize) -> Option<usize> {
        match self.basic_vars[variable] {
            0 => None,
            row => Some(row),
        }
    }

    /// Variable that is basic in a constraint row.
    pub fn basic_variable(&self, row: usize) -> usize {
        debug_assert!(1 <= row && row <= self.nr_constraints);

        self.tight_vars[row]
    }

    /// Whether a variable is in the basis.
    pub fn is_in_basis(&self, variable: usize) -> bool {
        self.basic_vars[variable] != 0
    }

    /// Whether the first phase is needed, because the origin violates a constraint.
    pub fn requires_initialization(&self) -> bool {
        self.requires_initialization
    }

    /// Number of pivots performed on this tableau.
    pub fn pivots_count(&self) -> usize {
        self.pivots_count
    }

    /// Number of constraint rows `m`.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Number of variables of the original problem `n`.
    pub fn nr_real_variables(&self) -> usize {
        self.nr_real_variables
    }

    /// Number of variables currently in the tableau, slacks and artificial included.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Whether the first phase artificial column is currently attached.
    pub fn has_artificial_column(&self) -> bool {
        self.nr_variables > self.nr_real_variables + self.nr_constraints
    }

    /// Tolerance of the sign tests.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Check whether the tableau is in canonical form with respect to its basis.
    ///
    /// Only used for debug purposes and in tests. Exact comparisons are intended: a pivot writes
    /// exact ones and zeros in the basic columns.
    pub fn is_canonical(&self) -> bool {
        let shape = self.rows.len() == self.nr_constraints + 1
            && self.rows.iter().all(|row| row.len() == self.nr_variables + 1)
            && self.basic_vars.len() == self.nr_variables + 1
            && self.tight_vars.len() == self.nr_constraints + 1;
        if !shape {
            return false;
        }

        let reciprocal = (1..=self.nr_constraints)
            .all(|row| self.basic_vars[self.tight_vars[row]] == row);
        let nr_basic = self.basic_vars[1..].iter().filter(|&&row| row != 0).count();
        let unit_columns = (1..=self.nr_constraints).all(|row| {
            let column = self.tight_vars[row];
            (0..=self.nr_constraints).all(|i| {
                let expected = if i == row { F::one() } else { F::zero() };
                self.rows[i][column] == expected
            })
        });

        reciprocal && nr_basic == self.nr_constraints && unit_columns
    }
}

impl<F> Index<(usize, usize)> for Tableau<F> {
    type Output = F;

    /// Element at `(row, column)`, with the objective row and free column at index `0`.
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.rows[row][column]
    }
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Tableau:")?;

        let column_width = 10;
        let counter_width = 8;
        // Column counter
        write!(f, "{0:width$}", "", width = counter_width)?;
        write!(f, "{0:^width$}", "b", width = column_width)?;
        write!(f, "|")?;
        for column in 1..=self.nr_variables {
            write!(f, "{0:^width$}", column, width = column_width)?;
        }
        writeln!(f)?;

        // Separator
        let separator = "-".repeat(counter_width + (1 + self.nr_variables) * column_width);
        writeln!(f, "{}", separator)?;

        for (i, row) in self.rows.iter().enumerate() {
            let label = if i == OBJECTIVE_ROW { "cost".to_string() } else { i.to_string() };
            write!(f, "{0:>width$}", format!("{}  |", label), width = counter_width)?;
            let free = if i == OBJECTIVE_ROW { row[FREE_COLUMN] } else { -row[FREE_COLUMN] };
            write!(f, "{0:^width$.4}", free, width = column_width)?;
            write!(f, "|")?;
            for value in &row[1..] {
                write!(f, "{0:^width$.4}", value, width = column_width)?;
            }
            writeln!(f)?;

            if i == OBJECTIVE_ROW {
                writeln!(f, "{}", separator)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(
            f,
            "[{}]",
            (1..=self.nr_constraints).format_with(", ", |row, f| f(&format_args!("({}, {})", row, self.tight_vars[row]))),
        )
    }
}
