//! Small problems with a known verdict, solved through the public interface only.
use lpstep::LinearProgram;

mod test;

fn linear_program(c: &[f64], a: &[&[f64]], b: &[f64]) -> LinearProgram<f64> {
    LinearProgram::new(
        c.to_vec(),
        a.iter().map(|row| row.to_vec()).collect(),
        b.to_vec(),
    ).unwrap()
}

fn basic() -> LinearProgram<f64> {
    linear_program(&[5f64, 4f64, 3f64], &[&[2f64, 3f64, 1f64], &[4f64, 1f64, 2f64], &[3f64, 4f64, 2f64]], &[5f64, 11f64, 8f64])
}

fn need_init() -> LinearProgram<f64> {
    linear_program(&[-2f64, -1f64], &[&[-1f64, 1f64], &[-1f64, -2f64], &[0f64, 1f64]], &[-1f64, -2f64, 1f64])
}

fn unbounded() -> LinearProgram<f64> {
    linear_program(&[1f64, -1f64], &[&[-2f64, 3f64], &[0f64, 4f64], &[0f64, -1f64]], &[5f64, 7f64, 0f64])
}

fn klee_minty(c: &[f64]) -> LinearProgram<f64> {
    linear_program(c, &[&[1f64, 0f64, 0f64], &[20f64, 1f64, 0f64], &[200f64, 20f64, 1f64]], &[1f64, 100f64, 10000f64])
}

fn klee_minty2() -> LinearProgram<f64> {
    linear_program(&[4f64, 2f64, 1f64], &[&[1f64, 0f64, 0f64], &[4f64, 1f64, 0f64], &[8f64, 4f64, 1f64]], &[5f64, 25f64, 125f64])
}

fn cycle() -> LinearProgram<f64> {
    linear_program(
        &[10f64, -57f64, -9f64, -24f64],
        &[&[0.5f64, -5.5f64, -2.5f64, 9f64], &[0.5f64, -1.5f64, -0.5f64, 1f64], &[1f64, 0f64, 0f64, 0f64]],
        &[0f64, 0f64, 1f64],
    )
}

fn infeasible() -> LinearProgram<f64> {
    linear_program(&[1f64, 1f64], &[&[1f64, 1f64], &[-1f64, -1f64]], &[1f64, -2f64])
}
