use thiserror::Error;

/// Unified error type for `convbench` operations.
#[derive(Debug, Error)]
pub enum ConvergenceError {
    /// Raised when a continued-fraction evaluation exhausts its term budget
    /// before successive approximants agree.
    #[error(
        "continued fraction did not converge after {terms} terms; last approximant {last_approximant}"
    )]
    DidNotConverge {
        /// Number of terms consumed before termination.
        terms: usize,
        /// The approximant reached when the budget ran out.
        last_approximant: f64,
    },

    /// Raised by checked entry points when an evaluation produces a
    /// non-finite value (for example inverting a converged value of zero).
    #[error("encountered non-finite result during {context}: {value}")]
    NonFiniteResult {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The offending value (NaN or an infinity).
        value: f64,
    },
}

impl ConvergenceError {
    /// Helper to raise when a checked evaluation yields NaN or an infinity.
    pub fn non_finite(context: &'static str, value: f64) -> Self {
        Self::NonFiniteResult { context, value }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ConvergenceError>;
