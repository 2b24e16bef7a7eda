//! Configuration structures for the convergence algorithms.

/// Termination policy for the π series.
///
/// The reference algorithm stops on exact floating-point equality between
/// successive sums. Switching to a tolerance changes both convergence speed
/// and returned precision, so the epsilon variant is an explicit opt-in
/// rather than a silent replacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Stop once a step reproduces the prior sum bit for bit.
    BitEquality,
    /// Stop once the absolute change between successive sums drops below the
    /// given epsilon.
    Absolute(f64),
}

/// Configuration for the π series converger.
#[derive(Clone, Debug)]
pub struct SeriesOptions {
    /// Termination policy applied between refinement steps.
    pub tolerance: Tolerance,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::BitEquality,
        }
    }
}

impl SeriesOptions {
    /// Override the termination policy while preserving other defaults.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Configuration for continued-fraction evaluation.
#[derive(Clone, Debug)]
pub struct FractionOptions {
    /// Relative agreement required between successive approximants. The
    /// default leaves a few ulps of headroom over machine epsilon: the
    /// convergent ratio jitters at the ulp level once converged, and an
    /// exact machine-epsilon criterion can stall on that jitter.
    pub epsilon: f64,
    /// Term budget after which evaluation gives up. Double-precision
    /// convergence needs a few dozen terms for moderate inputs, so the
    /// default is generous; it exists to bound non-finite inputs whose
    /// approximants never agree.
    pub max_terms: usize,
}

impl Default for FractionOptions {
    fn default() -> Self {
        Self {
            epsilon: 4.0 * f64::EPSILON,
            max_terms: 10_000,
        }
    }
}

impl FractionOptions {
    /// Override the agreement threshold while preserving other defaults.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Override the term budget while preserving other defaults.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms.max(1);
        self
    }
}
