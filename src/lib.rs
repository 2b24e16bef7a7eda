//! Micro-benchmarks for iterative floating-point convergence algorithms.
//!
//! This crate packages two small numeric kernels together with the timing
//! harness used to measure them:
//!
//! - a fixed-point series that converges to π by repeated refinement
//!   (`series` module),
//! - a generalized continued-fraction evaluation of cosine via the forward
//!   Euler/Wallis recurrence (`fraction` module), and
//! - a wall-clock harness that times batched invocations and reports the
//!   mean round duration (`harness` and `report` modules).
//!
//! Both kernels are pure functions that run to internal convergence per
//! call, share no state, and can be measured independently. The harness
//! retains the last computed value behind a `black_box` sink so optimizing
//! builds cannot eliminate the benchmarked loop.
//!
//! # Quick start
//!
//! ```
//! use convbench::{fraction, harness, report, series};
//!
//! let pi = series::compute_pi();
//! assert!((pi - std::f64::consts::PI).abs() < 1e-10);
//!
//! let result = harness::run(3, 100, || fraction::cosine(4.0));
//! let mut out = Vec::new();
//! report::write_average(&mut out, &result).unwrap();
//! assert!(out.starts_with(b"average: "));
//! ```
//!
//! The cosine fraction is evaluated without range reduction, faithful to the
//! reference algorithm: accuracy degrades for inputs beyond |z| ≈ 5.

pub mod error;
pub mod fraction;
pub mod harness;
pub mod options;
pub mod report;
pub mod series;

pub use error::{ConvergenceError, Result};
pub use fraction::{cosine, CosineFraction, Term, TermGenerator};
pub use harness::BenchmarkResult;
pub use options::{FractionOptions, SeriesOptions, Tolerance};
pub use series::compute_pi;
