//! Root Statistics Evaluator: small-root filter and the equidistribution
//! "bad root" predicate.
//!
//! A scored root is "bad" when its fractional part is anomalously small
//! relative to `1/log|root|`. Roots with `|root|` of exactly 0 or 1 produce
//! infinite or NaN intermediates; they are deliberately not special-cased and
//! IEEE comparison semantics decide the verdict.

/// Outcome of scoring a single real root at a given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Excluded from statistics: magnitude below half the height bound.
    Small,
    /// Scored, and the fractional part fails the equidistribution heuristic.
    Bad,
    /// Scored, heuristic satisfied.
    Good,
}

/// Fractional part of `x`, normalized into `[0, 1)`.
pub fn frac_part(x: f64) -> f64 {
    let frac = x % 1.0;
    if frac < 0.0 {
        frac + 1.0
    } else {
        frac
    }
}

/// The bad-root predicate in its two canonical forms.
///
/// With invert-q off the test is `frac < 1/ln|root|`; with invert-q on it is
/// `1/frac > |ln|root||`. The two forms agree for roots of magnitude above 1
/// with nonzero fractional part and differ in how they resolve the degenerate
/// sign cases.
pub fn is_bad(root: f64, invert_q: bool) -> bool {
    let frac = frac_part(root);
    let log_mag = root.abs().ln();
    if invert_q {
        frac.recip() > log_mag.abs()
    } else {
        frac < log_mag.recip()
    }
}

/// Apply the small-root filter, then the bad-root predicate.
pub fn evaluate(root: f64, height: u32, no_small: bool, invert_q: bool) -> Verdict {
    if no_small && root.abs() < height as f64 / 2.0 {
        return Verdict::Small;
    }
    if is_bad(root, invert_q) {
        Verdict::Bad
    } else {
        Verdict::Good
    }
}
