//! Sampled spot-check that re-evaluates a polynomial at a computed root.
//!
//! Purely diagnostic: a discrepancy is logged as a warning record and never
//! touches the tallies. Sampling is an injectable policy with a seeded RNG so
//! tests can disable it or make it deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Residual tolerance: 0.2% of the smallest nonzero coefficient magnitude.
const RESIDUAL_REL_TOL: f64 = 0.002;

/// Sampling policy for the spot-check. `rate == 0` disables it entirely;
/// otherwise roughly 1-in-`rate` roots are checked.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticPolicy {
    pub rate: u32,
    pub seed: u64,
}

impl DiagnosticPolicy {
    pub const DISABLED: DiagnosticPolicy = DiagnosticPolicy { rate: 0, seed: 0 };

    /// Per-height sampler with a derived seed, so a height's diagnostic draws
    /// are reproducible no matter which worker processes it.
    pub fn sampler_for(&self, height: u32) -> DiagnosticSampler {
        DiagnosticSampler {
            rate: self.rate,
            rng: StdRng::seed_from_u64(self.seed.wrapping_add(u64::from(height))),
        }
    }
}

/// Stateful per-height sampler owned by the worker processing that height.
pub struct DiagnosticSampler {
    rate: u32,
    rng: StdRng,
}

impl DiagnosticSampler {
    pub fn should_check(&mut self) -> bool {
        self.rate != 0 && self.rng.gen_range(0..self.rate) == 0
    }
}

/// Horner evaluation of an integer-coefficient polynomial (leading
/// coefficient first) at `x`.
pub fn eval(coeffs: &[i64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c as f64)
}

/// Re-evaluate the polynomial at a computed root. Returns the residual and
/// logs a warning record when it exceeds the tolerance; `None` means the
/// root checks out.
pub fn check_root(coeffs: &[i64], root: f64) -> Option<f64> {
    let tol = coeffs
        .iter()
        .filter(|&&c| c != 0)
        .map(|&c| (c as f64).abs())
        .fold(f64::MAX, f64::min)
        * RESIDUAL_REL_TOL;

    let residual = eval(coeffs, root);
    if residual.abs() > tol {
        log::warn!(
            "root check failed: coeffs {:?}, root {:.17}, residual {:.3e}",
            coeffs,
            root,
            residual
        );
        Some(residual)
    } else {
        None
    }
}
