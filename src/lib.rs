//! Empirical equidistribution statistics for real roots of integer
//! polynomials of degree 2 and 3.
//!
//! For every coefficient tuple up to a height bound, the classifier computes
//! the real roots in closed form, the evaluator tests whether each root's
//! fractional part is anomalously small relative to `1/log|root|`, and
//! per-height tallies are aggregated across a fixed parallel worker pool.

pub mod cubic;
pub mod diagnostics;
pub mod driver;
pub mod height;
pub mod quadratic;
pub mod score;

use serde::Serialize;

/// Largest supported coefficient height. The degree-2 discriminant
/// `b^2 - 4ac` is bounded by `5h^2`, which stays inside `i64` up to this
/// height.
pub const HEIGHT_LIMIT: u32 = 1 << 30;

/// Polynomial degree under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Degree {
    Quadratic,
    Cubic,
}

impl Degree {
    pub fn as_u32(self) -> u32 {
        match self {
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
        }
    }
}

/// Run-wide configuration, read-only for the duration of a run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunConfig {
    /// Coefficient height bound; heights `1..=max_height` are processed.
    /// Must not exceed [`HEIGHT_LIMIT`].
    pub max_height: u32,
    /// Fixed worker pool size.
    pub num_workers: usize,
    /// Restrict the leading coefficient to 1 (algebraic integers only).
    pub int_only: bool,
    /// Exclude roots with `|root| < height/2` from scoring.
    pub no_small: bool,
    /// Use the inverted form of the bad-root predicate.
    pub invert_q: bool,
}

/// Counter block shared by both degrees; one tagged tally type instead of a
/// near-duplicate struct per degree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Roots scored (small roots excluded).
    pub count: u64,
    /// Scored roots failing the equidistribution heuristic.
    pub bad: u64,
    /// Roots excluded by the small-root filter.
    pub small: u64,
    /// Irreducible quadratics with a repeated root.
    pub double_root: u64,
    /// Tuples whose other roots are complex: 0 real roots for a quadratic,
    /// exactly 1 for a cubic.
    pub imaginary: u64,
    /// Tuples with exactly 2 distinct real roots.
    pub two_roots: u64,
    /// Cubics with 3 distinct real roots (reducible by the heuristic).
    pub three_roots: u64,
    /// Tuples skipped as reducible or degenerate.
    pub not_irreducible: u64,
}

impl Tally {
    pub fn merge(&mut self, other: &Tally) {
        self.count += other.count;
        self.bad += other.bad;
        self.small += other.small;
        self.double_root += other.double_root;
        self.imaginary += other.imaginary;
        self.two_roots += other.two_roots;
        self.three_roots += other.three_roots;
        self.not_irreducible += other.not_irreducible;
    }
}

/// Completed statistics for one height, owned by the worker that produced it
/// and immutable once reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightTally {
    pub height: u32,
    pub degree: Degree,
    pub counts: Tally,
}

/// Per-height result handed to the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct HeightReport {
    pub height: u32,
    pub degree: u32,
    /// Closed-form size of the enumerated coefficient space.
    pub tuples_enumerated: u64,
    pub counts: Tally,
    /// `100 * bad / count`; NaN when nothing was scored.
    pub bad_percent: f64,
    /// `100 / ln(height)`, the heuristic's expected bad rate.
    pub inv_log_height_percent: f64,
    /// `100 / sqrt(ln(height))`.
    pub inv_sqrt_log_height_percent: f64,
}

impl HeightReport {
    pub fn new(tally: &HeightTally, int_only: bool) -> Self {
        let h = f64::from(tally.height);
        let counts = tally.counts;
        HeightReport {
            height: tally.height,
            degree: tally.degree.as_u32(),
            tuples_enumerated: height::tuples_enumerated(tally.height, tally.degree, int_only),
            counts,
            bad_percent: 100.0 * counts.bad as f64 / counts.count as f64,
            inv_log_height_percent: 100.0 / h.ln(),
            inv_sqrt_log_height_percent: 100.0 / h.ln().sqrt(),
        }
    }
}

/// Aggregate result of one driver run over all heights.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub degree: u32,
    pub config: RunConfig,
    pub heights_processed: u32,
    pub totals: Tally,
    /// `100 * bad / count` over the whole run; 0 when nothing was scored.
    pub bad_percent: f64,
    pub wall_seconds: f64,
}

/// Fatal errors. The computation is otherwise pure; recoverable numerical
/// degeneracies are absorbed by floating-point comparison semantics.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A genuine cubic always has at least one real root; an empty root set
    /// signals a solver defect and aborts the run.
    #[error("cubic {a}x^3 + {b}x^2 + {c}x + {d} produced no real roots")]
    NoRealRoots { a: i64, b: i64, c: i64, d: i64 },
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
