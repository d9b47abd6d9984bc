use approx::{assert_abs_diff_eq, assert_relative_eq};

use lpstep::{
    Config, DEFAULT_MAX_ITERATIONS, InconsistencyError, LinearProgram, MaxCoefficient,
    MinCoefficient, PivotRule, Simplex, SimplexError, Solution, Status, solve, solve_steps,
};

use crate::scenarios::{basic, cycle, infeasible, klee_minty, klee_minty2, need_init, unbounded};

fn assert_assignment(solution: &Solution<f64>, expected: &[f64]) {
    assert_eq!(solution.assignment().len(), expected.len());
    for (&actual, &expected) in solution.assignment().iter().zip(expected) {
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-7);
    }
}

#[test]
fn basic_optimum() {
    let solution = solve(&basic(), MaxCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();

    assert_eq!(solution.status(), Status::Optimal);
    assert_assignment(&solution, &[2f64, 0f64, 1f64]);
    assert_relative_eq!(solution.objective_value(), 13f64);
    assert_eq!(solution.iterations(), 2);
    assert_eq!(solution.strategy(), "MaxCoefficient");
    assert_eq!(
        solution.to_string(),
        "Possible optimal solution is: x_1 = 2, x_2 = 0, x_3 = 1\n\
        The objective value for this solution is: 13\n\
        Total pivots count: 2\n\
        The pivot rule used: MaxCoefficient\n",
    );
}

#[test]
fn unbounded_verdict() {
    for rule in [&MaxCoefficient as &dyn PivotRule<f64>, &MinCoefficient] {
        let error = solve(&unbounded(), rule, DEFAULT_MAX_ITERATIONS).unwrap_err();
        assert_eq!(error, SimplexError::ProblemUnbounded);
        assert_eq!(error.status(), Status::Unbounded);
        assert_eq!(error.to_string(), "The linear program is UNBOUNDED");
    }
}

#[test]
fn initialization_phase() {
    let steps = solve_steps(&need_init(), MaxCoefficient, DEFAULT_MAX_ITERATIONS)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(steps.len() >= 2);

    let last = steps.last().unwrap();
    assert_eq!(last.status(), Status::Optimal);
    assert_relative_eq!(last.objective_value(), -3f64, epsilon = 1e-9);
    assert_assignment(last, &[4f64 / 3f64, 1f64 / 3f64]);
    assert!(need_init().is_feasible(last.assignment(), 1e-9));
}

#[test]
fn klee_minty_pivot_counts() {
    let classic = klee_minty(&[100f64, 10f64, 1f64]);
    let max = solve(&classic, MaxCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    let min = solve(&classic, MinCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    // All 2^3 vertices are visited
    assert_eq!(max.iterations(), 7);
    assert_eq!(min.iterations(), 1);
    assert_relative_eq!(max.objective_value(), min.objective_value());

    let reversed = klee_minty(&[1f64, 10f64, 100f64]);
    let max = solve(&reversed, MaxCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    let min = solve(&reversed, MinCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    assert!(min.iterations() >= max.iterations());
    assert_eq!((max.iterations(), min.iterations()), (1, 5));
    assert_relative_eq!(max.objective_value(), 1_000_000f64);
    assert_relative_eq!(min.objective_value(), 1_000_000f64);

    let max = solve(&klee_minty2(), MaxCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    let min = solve(&klee_minty2(), MinCoefficient, DEFAULT_MAX_ITERATIONS).unwrap();
    assert_eq!((max.iterations(), min.iterations()), (7, 1));
    assert_assignment(&max, &[0f64, 0f64, 125f64]);
}

#[test]
fn degenerate_problem_terminates() {
    for rule in [&MaxCoefficient as &dyn PivotRule<f64>, &MinCoefficient] {
        match solve(&cycle(), rule, 20) {
            Ok(solution) => {
                assert!(cycle().is_feasible(solution.assignment(), 1e-9));
                assert_relative_eq!(solution.objective_value(), 1f64, epsilon = 1e-9);
            },
            Err(error) => assert_eq!(error, SimplexError::IterationsLimitExceeded { limit: 20 }),
        }
    }
}

#[test]
fn infeasible_verdict() {
    let error = solve(&infeasible(), MaxCoefficient, DEFAULT_MAX_ITERATIONS).unwrap_err();
    assert_eq!(error, SimplexError::ProblemInfeasible);
    assert_eq!(error.status(), Status::Infeasible);

    // The error is the last item, after the snapshots of the first phase
    let mut steps = solve_steps(&infeasible(), MinCoefficient, DEFAULT_MAX_ITERATIONS);
    assert!(steps.by_ref().take_while(Result::is_ok).count() > 0);
    assert_eq!(steps.next(), None);
}

#[test]
fn budget_is_shared() {
    let budget = 2;
    let steps = solve_steps(&need_init(), MaxCoefficient, budget).collect::<Vec<_>>();
    assert_eq!(steps.len(), budget + 1);
    assert!(steps[..budget].iter().all(|step| step.as_ref().is_ok_and(|s| s.status() == Status::InProgress)));
    assert_eq!(steps[budget], Err(SimplexError::IterationsLimitExceeded { limit: budget }));
}

#[test]
fn configured_solver() {
    let solver = Simplex::with_config(MinCoefficient, Config { max_iterations: 50, tolerance: 1e-12 });
    let from_steps = solver.steps(&basic()).last().unwrap().unwrap();
    let solved = solver.solve(&basic()).unwrap();
    assert_eq!(from_steps, solved);
    assert_eq!(solved.strategy(), "MinCoefficient");

    let single_precision = LinearProgram::new(
        vec![5f32, 4f32, 3f32],
        vec![vec![2f32, 3f32, 1f32], vec![4f32, 1f32, 2f32], vec![3f32, 4f32, 2f32]],
        vec![5f32, 11f32, 8f32],
    ).unwrap();
    let solution = Simplex::new(MaxCoefficient, DEFAULT_MAX_ITERATIONS).solve(&single_precision).unwrap();
    assert_relative_eq!(solution.objective_value(), 13f32);
}

#[test]
fn inconsistent_input() {
    assert_eq!(
        LinearProgram::new(vec![1f64, 2f64], vec![vec![1f64, 2f64]], vec![1f64, 2f64]),
        Err(InconsistencyError::RowCount { rows: 1, righthand_side: 2 }),
    );
    let error = LinearProgram::new(vec![1f64, 2f64], vec![vec![1f64]], vec![1f64]).unwrap_err();
    assert_eq!(error, InconsistencyError::ColumnCount { row: 0, columns: 1, variables: 2 });
    assert_eq!(error.to_string(), "row 0 of the constraint matrix has 1 columns, but there are 2 variables");
}
