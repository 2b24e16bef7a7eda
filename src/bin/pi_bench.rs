//! Benchmarks the π series converger and prints the mean round duration.

use std::io::{self, Write};

use convbench::{harness, report, series};

const ROUNDS: usize = 10;
const ITERATIONS_PER_ROUND: usize = 10_000;

fn main() -> io::Result<()> {
    let result = harness::run(ROUNDS, ITERATIONS_PER_ROUND, series::compute_pi);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_average(&mut out, &result)?;
    out.flush()
}
