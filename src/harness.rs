//! Wall-clock timing harness for repeated algorithm invocations.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Per-round timings and the derived mean for one harness run.
///
/// Immutable once returned; the durations appear in round order.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    durations: Vec<Duration>,
    mean: Duration,
    last_value: f64,
}

impl BenchmarkResult {
    /// The recorded elapsed time of each round, in order.
    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    /// Arithmetic mean of the per-round durations.
    pub fn mean(&self) -> Duration {
        self.mean
    }

    /// Number of rounds measured.
    pub fn rounds(&self) -> usize {
        self.durations.len()
    }

    /// The value returned by the final invocation of the benchmarked
    /// function. Exposed so callers can observe the benchmarked output; its
    /// primary purpose is keeping the inner loop alive under optimization.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

/// Runs `f` for `rounds` rounds of `iterations_per_round` back-to-back
/// invocations, timing each round's inner loop only.
///
/// The timer starts immediately before a round's inner loop and stops
/// immediately after it; bookkeeping between rounds is not measured. Every
/// return value is written into a harness-owned sink that is pushed through
/// [`black_box`] once per round, so the compiler cannot discard the loop as
/// dead code. The sink is an anti-optimization device, not algorithm state.
///
/// Callers must pass positive `rounds` and `iterations_per_round`; this is a
/// documented precondition, not a runtime check. Non-finite values returned
/// by `f` are recorded unchanged; the harness measures time, never output.
pub fn run<F>(rounds: usize, iterations_per_round: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut() -> f64,
{
    let mut durations = Vec::with_capacity(rounds);
    let mut sink = 0.0_f64;

    for round in 0..rounds {
        let start = Instant::now();
        for _ in 0..iterations_per_round {
            sink = f();
        }
        let elapsed = start.elapsed();
        black_box(sink);
        log::debug!("round {round}: {elapsed:?} ({iterations_per_round} iterations)");
        durations.push(elapsed);
    }

    let total: Duration = durations.iter().sum();
    let mean = total / rounds as u32;

    BenchmarkResult {
        durations,
        mean,
        last_value: sink,
    }
}
