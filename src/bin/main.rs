use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use enum_map::EnumMap;

use lpstep::{InconsistencyError, LinearProgram, MaxCoefficient, MinCoefficient, PivotRule, Status};
use lpstep::{solve, solve_steps};

/// Solve a set of small demo linear programs with the two phase simplex method.
#[derive(Parser, Debug)]
#[command(name = "lpstep")]
#[command(version, about, long_about = None)]
struct Opts {
    /// Pivot rule used to select the entering variable
    #[arg(long, value_enum, default_value_t = Rule::Max)]
    rule: Rule,

    /// Budget of pivots for each problem
    #[arg(long, default_value_t = 20)]
    max_iterations: usize,

    /// Print every basic solution that is visited, not just the final one
    #[arg(long)]
    steps: bool,

    /// Names of the problems to solve; all of them if none are given
    problems: Vec<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rule {
    /// Largest reduced cost
    Max,
    /// Smallest positive reduced cost
    Min,
}

impl Rule {
    fn pivot_rule(self) -> Box<dyn PivotRule<f64>> {
        match self {
            Rule::Max => Box::new(MaxCoefficient),
            Rule::Min => Box::new(MinCoefficient),
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();
    let opts = Opts::parse();

    let problems = demo_problems()?;
    let unknown = opts.problems.iter()
        .filter(|name| problems.iter().all(|(known, _)| *known != name.as_str()))
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        let known = problems.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        eprintln!("Unknown problem(s) {:?}, choose from {:?}.", unknown, known);
        return Ok(ExitCode::FAILURE);
    }

    let rule = opts.rule.pivot_rule();
    let mut tally = EnumMap::<Status, usize>::default();
    for (name, linear_program) in &problems {
        if !opts.problems.is_empty() && !opts.problems.iter().any(|selected| selected.as_str() == *name) {
            continue;
        }

        println!("=== {} ===", name);
        let result = if opts.steps {
            let mut last = None;
            for (i, step) in solve_steps(linear_program, &rule, opts.max_iterations).enumerate() {
                if let Ok(solution) = &step {
                    println!("Step {}:\n{}", i + 1, solution);
                }
                last = Some(step);
            }
            last.ok_or("the solver produced no result")?
        } else {
            solve(linear_program, &rule, opts.max_iterations)
        };

        match result {
            Ok(solution) => {
                if !opts.steps {
                    println!("{}", solution);
                }
                tally[solution.status()] += 1;
            },
            Err(error) => {
                println!("{}\n", error);
                tally[error.status()] += 1;
            },
        }
    }

    println!("=== Summary ({}) ===", PivotRule::<f64>::name(&rule));
    for (status, count) in &tally {
        if *count > 0 {
            println!("{:?}: {}", status, count);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn demo_problems() -> Result<Vec<(&'static str, LinearProgram<f64>)>, InconsistencyError> {
    Ok(vec![
        ("basic", LinearProgram::new(
            vec![5f64, 4f64, 3f64],
            vec![vec![2f64, 3f64, 1f64], vec![4f64, 1f64, 2f64], vec![3f64, 4f64, 2f64]],
            vec![5f64, 11f64, 8f64],
        )?),
        ("need_init", LinearProgram::new(
            vec![-2f64, -1f64],
            vec![vec![-1f64, 1f64], vec![-1f64, -2f64], vec![0f64, 1f64]],
            vec![-1f64, -2f64, 1f64],
        )?),
        ("klee_minty", LinearProgram::new(
            vec![100f64, 10f64, 1f64],
            vec![vec![1f64, 0f64, 0f64], vec![20f64, 1f64, 0f64], vec![200f64, 20f64, 1f64]],
            vec![1f64, 100f64, 10000f64],
        )?),
        ("klee_minty_reversed", LinearProgram::new(
            vec![1f64, 10f64, 100f64],
            vec![vec![1f64, 0f64, 0f64], vec![20f64, 1f64, 0f64], vec![200f64, 20f64, 1f64]],
            vec![1f64, 100f64, 10000f64],
        )?),
        ("klee_minty2", LinearProgram::new(
            vec![4f64, 2f64, 1f64],
            vec![vec![1f64, 0f64, 0f64], vec![4f64, 1f64, 0f64], vec![8f64, 4f64, 1f64]],
            vec![5f64, 25f64, 125f64],
        )?),
        ("unbounded", LinearProgram::new(
            vec![1f64, -1f64],
            vec![vec![-2f64, 3f64], vec![0f64, 4f64], vec![0f64, -1f64]],
            vec![5f64, 7f64, 0f64],
        )?),
        ("cycle", LinearProgram::new(
            vec![10f64, -57f64, -9f64, -24f64],
            vec![
                vec![0.5f64, -5.5f64, -2.5f64, 9f64],
                vec![0.5f64, -1.5f64, -0.5f64, 1f64],
                vec![1f64, 0f64, 0f64, 0f64],
            ],
            vec![0f64, 0f64, 1f64],
        )?),
        ("infeasible", LinearProgram::new(
            vec![1f64, 1f64],
            vec![vec![1f64, 1f64], vec![-1f64, -1f64]],
            vec![1f64, -2f64],
        )?),
    ])
}
