//! Benchmarks the continued-fraction cosine and prints the mean round duration.

use std::io::{self, Write};

use convbench::{fraction, harness, report};

const ROUNDS: usize = 10;
const ITERATIONS_PER_ROUND: usize = 10_000;

/// Representative input for the benchmark run.
const Z: f64 = 4.0;

fn main() -> io::Result<()> {
    let result = harness::run(ROUNDS, ITERATIONS_PER_ROUND, || fraction::cosine(Z));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_average(&mut out, &result)?;
    out.flush()
}
