//! Generalized continued fractions and their forward-recurrence evaluation.
//!
//! A continued fraction `b0 + a1/(b1 + a2/(b2 + ...))` is described by a
//! stream of [`Term`]s and collapsed into a scalar with the classic
//! Euler/Wallis two-term recurrence over convergent numerators and
//! denominators. Only the most recent two convergents are retained, so
//! evaluation is O(1) in memory regardless of depth.

use crate::error::{ConvergenceError, Result};
use crate::options::FractionOptions;

/// A single term of a generalized continued fraction. `a` and `b` correspond
/// with the partial numerator and partial denominator of the usual notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// Partial numerator.
    pub a: f64,
    /// Partial denominator.
    pub b: f64,
}

/// A stream of continued-fraction terms.
///
/// Generators are pure, monotonically-advancing sequences: each call advances
/// the internal index by exactly one, and a generator cannot be rewound or
/// restarted mid-sequence.
pub trait TermGenerator {
    /// Returns the next term in the fraction.
    fn next_term(&mut self) -> Term;
}

/// Term generator for the continued fraction of `1/cos(z)`.
///
/// Term 0 is the fixed pair `(0, 1)`; term m ≥ 1 is
/// `a = z²/(m·(4m − 2))`, `b = 1 − a`. The `a` formula never divides by zero
/// because the step index is at least 1 by the time it runs.
#[derive(Clone, Debug)]
pub struct CosineFraction {
    z_squared: f64,
    step: i64,
}

impl CosineFraction {
    /// Creates a generator for the input value `z` (radians, unreduced).
    pub fn new(z: f64) -> Self {
        Self {
            z_squared: z * z,
            step: -1,
        }
    }
}

impl TermGenerator for CosineFraction {
    fn next_term(&mut self) -> Term {
        self.step += 1;
        if self.step == 0 {
            return Term { a: 0.0, b: 1.0 };
        }
        let m = self.step as f64;
        let a = self.z_squared / (m * (4.0 * m - 2.0));
        Term { a, b: 1.0 - a }
    }
}

/// Diagnostics returned alongside a converged continued-fraction value.
#[derive(Clone, Debug)]
pub struct FractionSummary {
    /// Number of terms consumed, counting the leading `b0` term.
    pub terms: usize,
}

/// Evaluates a continued fraction to convergence via the forward two-term
/// recurrence.
///
/// Convergent numerators start at `h₋₁ = 1, h₀ = b₀` and denominators at
/// `k₋₁ = 0, k₀ = 1`; each term folds in as `hᵢ = bᵢ·hᵢ₋₁ + aᵢ·hᵢ₋₂` (and
/// likewise for `kᵢ`), with the running approximant `hᵢ/kᵢ`. Terms stop once
/// the relative change between successive approximants is below
/// `options.epsilon`.
///
/// # Errors
///
/// Returns [`ConvergenceError::DidNotConverge`] if the approximants fail to
/// agree within `options.max_terms` terms, which for the fractions in this
/// crate is reachable only with non-finite inputs.
pub fn evaluate<G: TermGenerator>(
    generator: &mut G,
    options: &FractionOptions,
) -> Result<(f64, FractionSummary)> {
    let leading = generator.next_term();
    let mut h_prev = 1.0_f64;
    let mut h = leading.b;
    let mut k_prev = 0.0_f64;
    let mut k = 1.0_f64;
    let mut approximant = h / k;

    for terms in 2..=options.max_terms {
        let term = generator.next_term();
        let h_next = term.b * h + term.a * h_prev;
        let k_next = term.b * k + term.a * k_prev;
        h_prev = h;
        h = h_next;
        k_prev = k;
        k = k_next;

        let next = h / k;
        if (next - approximant).abs() <= options.epsilon * next.abs() {
            log::debug!("continued fraction converged to {next} after {terms} terms");
            return Ok((next, FractionSummary { terms }));
        }
        approximant = next;
    }

    Err(ConvergenceError::DidNotConverge {
        terms: options.max_terms,
        last_approximant: approximant,
    })
}

/// Computes the cosine of `z` (radians) via its continued fraction.
///
/// The fraction converges to `1/cos(z)`, which is then inverted. Inputs are
/// not range-reduced, matching the reference algorithm: accuracy degrades
/// for |z| ≥ 5 and is unspecified far outside that band. If the fraction
/// converges to exactly zero the inversion yields an infinity; that boundary
/// is propagated, not trapped. Non-finite inputs yield NaN.
pub fn cosine(z: f64) -> f64 {
    match evaluate(&mut CosineFraction::new(z), &FractionOptions::default()) {
        Ok((v, _)) => 1.0 / v,
        Err(_) => f64::NAN,
    }
}

/// Like [`cosine`], but surfaces non-finite outcomes as errors instead of
/// propagating them silently.
pub fn cosine_checked(z: f64) -> Result<f64> {
    let (v, _) = evaluate(&mut CosineFraction::new(z), &FractionOptions::default())?;
    let result = 1.0 / v;
    if !result.is_finite() {
        return Err(ConvergenceError::non_finite("cosine inversion", result));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn leading_term_is_the_fixed_pair() {
        let mut generator = CosineFraction::new(3.5);
        assert_eq!(generator.next_term(), Term { a: 0.0, b: 1.0 });
    }

    #[test]
    fn generator_advances_by_one_per_call() {
        let z = 2.0_f64;
        let mut generator = CosineFraction::new(z);
        generator.next_term();
        for m in 1..6 {
            let m = m as f64;
            let expected_a = (z * z) / (m * (4.0 * m - 2.0));
            let term = generator.next_term();
            assert_relative_eq!(term.a, expected_a);
            assert_relative_eq!(term.b, 1.0 - expected_a);
        }
    }

    #[test]
    fn cosine_of_zero_collapses_to_leading_term() {
        assert_relative_eq!(cosine(0.0), 1.0, epsilon = 1e-9);
    }

    /// Near π/2 the converged value is enormous and the inversion step loses
    /// precision, hence the looser bound.
    #[test]
    fn cosine_near_pole_stays_close_to_zero() {
        let value = cosine(std::f64::consts::FRAC_PI_2);
        assert!(value.abs() < 1e-6, "cos(π/2) ≈ {value}");
    }

    #[test]
    fn cosine_matches_reference_for_moderate_inputs() {
        for z in [-4.5, -3.0, -1.2, -0.3, 0.7, 1.9, 3.3, 4.9] {
            assert_relative_eq!(cosine(z), z.cos(), epsilon = 1e-6);
        }
    }

    #[test]
    fn checked_cosine_agrees_on_the_normal_path() {
        let value = cosine_checked(4.0).unwrap();
        assert_relative_eq!(value, 4.0_f64.cos(), epsilon = 1e-6);
    }

    #[test]
    fn non_finite_input_yields_nan() {
        assert!(cosine(f64::NAN).is_nan());
    }

    #[test]
    fn exhausted_term_budget_is_reported() {
        let options = FractionOptions::default().with_max_terms(3);
        let err = evaluate(&mut CosineFraction::new(50.0), &options).unwrap_err();
        assert!(matches!(err, ConvergenceError::DidNotConverge { terms: 3, .. }));
    }
}
