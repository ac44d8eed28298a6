//! Height Processor: brute-force coefficient enumeration for one height.
//!
//! Enumeration cost dominates the experiment: O(h^2) tuples per height for
//! monic quadratics, one order higher per free coefficient, which is what
//! justifies sharding the run by height.

use crate::diagnostics::{self, DiagnosticPolicy, DiagnosticSampler};
use crate::score::{self, Verdict};
use crate::{cubic, quadratic, Degree, HeightTally, RunConfig, RunError, Tally};

/// Closed-form size of the coefficient space enumerated at `height`.
///
/// Each free coefficient ranges over `[-h, h]` (2h+1 values). The leading
/// coefficient is fixed to 1 in integer-only mode, ranges over `[-h, h]` for
/// degree 2, and over `[1, h]` for degree 3 (negating a cubic preserves its
/// root set).
pub fn tuples_enumerated(height: u32, degree: Degree, int_only: bool) -> u64 {
    let h = u64::from(height);
    let span = 2 * h + 1;
    match (degree, int_only) {
        (Degree::Quadratic, true) => span * span,
        (Degree::Quadratic, false) => span * span * span,
        (Degree::Cubic, true) => span * span * span,
        (Degree::Cubic, false) => h * span * span * span,
    }
}

/// Enumerate every coefficient tuple at `height`, classify each polynomial,
/// score its real roots, and return the completed tally.
///
/// Deterministic: the same `(height, degree, config, policy)` always yields
/// the same tally.
pub fn process_height(
    height: u32,
    degree: Degree,
    config: &RunConfig,
    policy: &DiagnosticPolicy,
) -> Result<HeightTally, RunError> {
    debug_assert!(
        height <= crate::HEIGHT_LIMIT,
        "height {} exceeds the supported bound {}",
        height,
        crate::HEIGHT_LIMIT
    );
    match degree {
        Degree::Quadratic => Ok(process_quadratic(height, config, policy)),
        Degree::Cubic => process_cubic(height, config, policy),
    }
}

/// Score every root of one tuple, spot-checking at the sampled rate.
fn score_roots(
    roots: &[f64],
    coeffs: &[i64],
    height: u32,
    config: &RunConfig,
    sampler: &mut DiagnosticSampler,
    counts: &mut Tally,
) {
    for &root in roots {
        if sampler.should_check() {
            diagnostics::check_root(coeffs, root);
        }
        match score::evaluate(root, height, config.no_small, config.invert_q) {
            Verdict::Small => counts.small += 1,
            Verdict::Bad => {
                counts.count += 1;
                counts.bad += 1;
            }
            Verdict::Good => counts.count += 1,
        }
    }
}

fn process_quadratic(height: u32, config: &RunConfig, policy: &DiagnosticPolicy) -> HeightTally {
    let h = i64::from(height);
    let (a_lo, a_hi) = if config.int_only { (1, 1) } else { (-h, h) };
    let mut counts = Tally::default();
    let mut sampler = policy.sampler_for(height);

    for a in a_lo..=a_hi {
        for b in -h..=h {
            for c in -h..=h {
                // a = 0 is a degenerate (linear) tuple; c = 0 has the
                // rational root 0. Both skip the solver.
                if a == 0 || c == 0 {
                    counts.not_irreducible += 1;
                    continue;
                }
                if !quadratic::is_irreducible(a, b, c) {
                    counts.not_irreducible += 1;
                    continue;
                }

                let roots = quadratic::real_roots(a, b, c);
                match roots.len() {
                    0 => counts.imaginary += 1,
                    1 => counts.double_root += 1,
                    _ => counts.two_roots += 1,
                }
                score_roots(&roots, &[a, b, c], height, config, &mut sampler, &mut counts);
            }
        }
    }

    HeightTally {
        height,
        degree: Degree::Quadratic,
        counts,
    }
}

fn process_cubic(
    height: u32,
    config: &RunConfig,
    policy: &DiagnosticPolicy,
) -> Result<HeightTally, RunError> {
    let h = i64::from(height);
    let a_hi = if config.int_only { 1 } else { h };
    let mut counts = Tally::default();
    let mut sampler = policy.sampler_for(height);

    for a in 1..=a_hi {
        for b in -h..=h {
            for c in -h..=h {
                for d in -h..=h {
                    // d = 0: 0 is a root, leaving a quadratic factor.
                    if d == 0 {
                        counts.not_irreducible += 1;
                        continue;
                    }

                    let (roots, irreducible) = cubic::real_roots(a, b, c, d);
                    match roots.len() {
                        0 => return Err(RunError::NoRealRoots { a, b, c, d }),
                        1 => counts.imaginary += 1,
                        2 => counts.two_roots += 1,
                        _ => counts.three_roots += 1,
                    }
                    if !irreducible {
                        counts.not_irreducible += 1;
                        continue;
                    }
                    score_roots(&roots, &[a, b, c, d], height, config, &mut sampler, &mut counts);
                }
            }
        }
    }

    Ok(HeightTally {
        height,
        degree: Degree::Cubic,
        counts,
    })
}
