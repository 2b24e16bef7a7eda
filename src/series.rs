//! Fixed-point series that converges to π by repeated floating-point refinement.

use crate::options::{SeriesOptions, Tolerance};

/// Diagnostics returned alongside the converged series value.
#[derive(Clone, Debug)]
pub struct SeriesSummary {
    /// Number of refinement steps performed before the value stopped moving.
    pub iterations: usize,
}

/// Computes π with the default bit-equality termination policy.
///
/// The series accumulates a hypergeometric-style term whose magnitude shrinks
/// by roughly a factor of four per step, so under double precision the sum
/// reaches a fixed point after a few dozen iterations. The function is pure
/// and deterministic: repeated calls within one process return bit-identical
/// results.
pub fn compute_pi() -> f64 {
    compute_pi_with(&SeriesOptions::default()).0
}

/// Computes π under the supplied termination policy, returning the converged
/// value together with iteration diagnostics.
///
/// The recurrence never fails: the denominator accumulator starts at 24 and
/// strictly increases, so no division by zero can occur, and the term ratio
/// tends to 1/4 so the sum is unconditionally convergent.
pub fn compute_pi_with(options: &SeriesOptions) -> (f64, SeriesSummary) {
    // Seed values from the classic hypergeometric π series. The previous-sum
    // sentinel of 0.0 guarantees at least one refinement step.
    let mut lasts = 0.0_f64;
    let mut t = 3.0_f64;
    let mut s = 3.0_f64;
    let mut n = 1.0_f64;
    let mut na = 0.0_f64;
    let mut d = 0.0_f64;
    let mut da = 24.0_f64;

    let mut iterations = 0usize;
    while !options.tolerance.converged(s, lasts) {
        lasts = s;
        n += na;
        na += 8.0;
        d += da;
        da += 32.0;
        t = (t * n) / d;
        s += t;
        iterations += 1;
    }

    log::debug!("pi series converged to {s} after {iterations} iterations");
    (s, SeriesSummary { iterations })
}

impl Tolerance {
    /// Whether the current sum has reached the prior sum under this policy.
    fn converged(&self, current: f64, previous: f64) -> bool {
        match self {
            // Exact floating-point equality is the convergence signal: the
            // term magnitude underflows past the sum's ulp, at which point
            // the accumulator stops changing at all.
            Tolerance::BitEquality => current.to_bits() == previous.to_bits(),
            Tolerance::Absolute(eps) => (current - previous).abs() < *eps,
        }
    }
}
