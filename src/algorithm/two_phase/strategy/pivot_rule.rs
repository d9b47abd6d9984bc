//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. By default this is the ratio test,
/// which is independent of the strategy.
pub trait PivotRule<F: Real> {
    /// Name of the rule, as reported in solutions.
    fn name(&self) -> &'static str;

    /// Column selection rule.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau to read the reduced costs from.
    /// * `candidates`: Nonbasic variables with a positive reduced cost, in increasing order.
    ///
    /// # Return value
    ///
    /// The variable to bring into the basis, or `None` if there are no candidates.
    fn find_entering(&self, tableau: &Tableau<F>, candidates: &[usize]) -> Option<usize>;

    /// Row selection rule.
    ///
    /// # Return value
    ///
    /// Index of the constraint row to pivot on, or `None` if no row limits the entering variable.
    fn find_leaving_constraint(&self, tableau: &Tableau<F>, entering: usize) -> Option<usize> {
        ratio_test(tableau, entering)
    }
}

impl<F: Real, R: PivotRule<F> + ?Sized> PivotRule<F> for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_entering(&self, tableau: &Tableau<F>, candidates: &[usize]) -> Option<usize> {
        (**self).find_entering(tableau, candidates)
    }

    fn find_leaving_constraint(&self, tableau: &Tableau<F>, entering: usize) -> Option<usize> {
        (**self).find_leaving_constraint(tableau, entering)
    }
}

impl<F: Real, R: PivotRule<F> + ?Sized> PivotRule<F> for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_entering(&self, tableau: &Tableau<F>, candidates: &[usize]) -> Option<usize> {
        (**self).find_entering(tableau, candidates)
    }

    fn find_leaving_constraint(&self, tableau: &Tableau<F>, entering: usize) -> Option<usize> {
        (**self).find_leaving_constraint(tableau, entering)
    }
}

/// Determine the row to pivot on.
///
/// This is the row with the minimal ratio between the current right-hand side and the entering
/// column, among the rows in which the entering column is positive.
///
/// When there are multiple choices for the pivot row, the one with the lowest row index is chosen.
/// Note that this is keyed on the row, not on the index of the leaving variable as in Bland's rule.
///
/// # Return value
///
/// Index of the row to pivot on. If not found, the problem is unbounded in the direction of the
/// entering variable.
pub fn ratio_test<F: Real>(tableau: &Tableau<F>, entering: usize) -> Option<usize> {
    let mut min_ratio: Option<(usize, F)> = None;
    for row in 1..=tableau.nr_constraints() {
        let coefficient = tableau[(row, entering)];
        if coefficient <= tableau.tolerance() {
            continue;
        }

        let ratio = tableau.constraint_value(row) / coefficient;
        // Strictly smaller, such that the first row wins ties
        match min_ratio {
            Some((_, min)) if ratio >= min => {},
            _ => min_ratio = Some((row, ratio)),
        }
    }

    min_ratio.map(|(row, _)| row)
}

/// Pivot on the candidate with the largest reduced cost.
///
/// The classic rule by Dantzig. Typically needs few pivots, but there are problems (like the cubes
/// of Klee and Minty) on which it visits every vertex.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MaxCoefficient;

impl<F: Real> PivotRule<F> for MaxCoefficient {
    fn name(&self) -> &'static str {
        "MaxCoefficient"
    }

    fn find_entering(&self, tableau: &Tableau<F>, candidates: &[usize]) -> Option<usize> {
        candidates.iter()
            .copied()
            .reduce(|best, j| if tableau.relative_cost(j) > tableau.relative_cost(best) { j } else { best })
    }
}

/// Pivot on the candidate with the smallest positive reduced cost.
///
/// Makes as little progress per pivot as possible, which is useful to expose worst case behavior.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MinCoefficient;

impl<F: Real> PivotRule<F> for MinCoefficient {
    fn name(&self) -> &'static str {
        "MinCoefficient"
    }

    fn find_entering(&self, tableau: &Tableau<F>, candidates: &[usize]) -> Option<usize> {
        candidates.iter()
            .copied()
            .reduce(|best, j| if tableau.relative_cost(j) < tableau.relative_cost(best) { j } else { best })
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::strategy::pivot_rule::{MaxCoefficient, MinCoefficient, PivotRule, ratio_test};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::LinearProgram;
    use crate::tests::problem_1;

    #[test]
    fn find_entering_column() {
        let tableau = problem_1::tableau_form(&problem_1::linear_program());
        let candidates = tableau.entering_candidates();
        assert_eq!(candidates, vec![1, 2, 3]);

        assert_eq!(MaxCoefficient.find_entering(&tableau, &candidates), Some(1));
        assert_eq!(MinCoefficient.find_entering(&tableau, &candidates), Some(3));
        assert_eq!(MaxCoefficient.find_entering(&tableau, &[]), None);
        assert_eq!(MinCoefficient.find_entering(&tableau, &[]), None);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let lp = LinearProgram::new(
            vec![2f64, 1f64, 2f64, 1f64],
            vec![vec![1f64, 1f64, 1f64, 1f64]],
            vec![1f64],
        ).unwrap();
        let mut tableau = Tableau::new(&lp);
        tableau.install_objective();
        let candidates = tableau.entering_candidates();

        assert_eq!(MaxCoefficient.find_entering(&tableau, &candidates), Some(1));
        assert_eq!(MinCoefficient.find_entering(&tableau, &candidates), Some(2));
    }

    #[test]
    fn find_pivot_row() {
        let tableau = problem_1::tableau_form(&problem_1::linear_program());
        // Ratios 5 / 2, 11 / 4 and 8 / 3
        assert_eq!(ratio_test(&tableau, 1), Some(1));
        // Ratios 5 / 3, 11 / 1 and 8 / 4
        assert_eq!(ratio_test(&tableau, 2), Some(1));
        // Ratios 5 / 1, 11 / 2 and 8 / 2
        assert_eq!(ratio_test(&tableau, 3), Some(3));
        assert_eq!(MaxCoefficient.find_leaving_constraint(&tableau, 3), Some(3));
    }

    #[test]
    fn lowest_row_wins_ties() {
        let lp = LinearProgram::new(
            vec![1f64],
            vec![vec![3f64], vec![1f64], vec![2f64]],
            vec![6f64, 2f64, 4f64],
        ).unwrap();
        let tableau = Tableau::new(&lp);

        assert_eq!(ratio_test(&tableau, 1), Some(1));
    }

    #[test]
    fn tie_break_is_keyed_on_row() {
        let lp = LinearProgram::new(
            vec![1f64, 1f64],
            vec![vec![0f64, 1f64], vec![1f64, 1f64]],
            vec![1f64, 1f64],
        ).unwrap();
        let mut tableau = Tableau::new(&lp);
        tableau.pivot(1, 4);
        assert_eq!(tableau.basic_variable(1), 3);
        assert_eq!(tableau.basic_variable(2), 1);

        // Column 2 has ratio 1 in both rows, row 1 wins although x_1 < x_3
        assert_eq!(ratio_test(&tableau, 2), Some(1));
    }

    #[test]
    fn unbounded_direction() {
        let lp = LinearProgram::new(
            vec![1f64, -1f64],
            vec![vec![-2f64, 3f64], vec![0f64, 4f64], vec![0f64, -1f64]],
            vec![5f64, 7f64, 0f64],
        ).unwrap();
        let tableau = Tableau::new(&lp);

        assert_eq!(ratio_test(&tableau, 1), None);
        // Ratios 5 / 3 and 7 / 4
        assert_eq!(ratio_test(&tableau, 2), Some(1));
    }

    #[test]
    fn dynamic_rule() {
        let rules: Vec<Box<dyn PivotRule<f64>>> = vec![Box::new(MaxCoefficient), Box::new(MinCoefficient)];
        let names = rules.iter().map(|rule| PivotRule::<f64>::name(rule)).collect::<Vec<_>>();
        assert_eq!(names, vec!["MaxCoefficient", "MinCoefficient"]);
    }
}
