//! Degree-3 classifier: closed-form real roots via the depressed cubic.
//!
//! The solver picks between the trigonometric branch (negative discriminant,
//! casus irreducibilis, three distinct real roots) and the Cardano branch
//! (one real root, plus a repeated root when the discriminant vanishes).
//! "Irreducible over the reals" is the heuristic used throughout this crate:
//! fewer than 3 distinct real roots after deduplication.

use std::f64::consts::PI;

use crate::quadratic;

/// Absolute tolerance for repeated-root detection and root deduplication.
pub const ROOT_TOL: f64 = 1e-10;

/// Real cube root, defined for negative inputs.
fn cbrt_real(x: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(1.0 / 3.0)
    } else {
        x.powf(1.0 / 3.0)
    }
}

/// Collapse adjacent entries of a sorted root list closer than [`ROOT_TOL`].
fn dedup_close(roots: &mut Vec<f64>) {
    roots.dedup_by(|next, prev| (*next - *prev).abs() <= ROOT_TOL);
}

/// Real roots of `ax^3 + bx^2 + cx + d`, ascending and deduplicated within
/// [`ROOT_TOL`], together with the irreducible-over-the-reals flag
/// (`roots.len() < 3`).
///
/// A leading coefficient of zero degrades to the quadratic solver; such a
/// tuple is never a genuine cubic and keeps the same root-count heuristic.
pub fn real_roots(a: i64, b: i64, c: i64, d: i64) -> (Vec<f64>, bool) {
    if a == 0 {
        let roots = quadratic::real_roots(b, c, d);
        let irreducible = roots.len() < 3;
        return (roots, irreducible);
    }

    let (fa, fb, fc, fd) = (a as f64, b as f64, c as f64, d as f64);

    // Depress via x = t - b/3a to t^3 + pt + q = 0.
    let b2 = fb * fb;
    let p = (3.0 * fa * fc - b2) / (3.0 * fa * fa);
    let q = (2.0 * b2 * fb - 9.0 * fa * fb * fc + 27.0 * fa * fa * fd) / (27.0 * fa * fa * fa);
    let shift = fb / (3.0 * fa);

    // t^3 = 0: triple root at -b/3a, returned once.
    if p.abs() < ROOT_TOL && q.abs() < ROOT_TOL {
        return (vec![-shift], true);
    }

    let discriminant = q * q / 4.0 + p * p * p / 27.0;
    let mut roots = Vec::with_capacity(3);

    if discriminant < 0.0 {
        // Casus irreducibilis: three distinct real roots. Negative
        // discriminant forces p < 0 and puts the acos argument in (-1, 1).
        let m = -p;
        let amplitude = 2.0 * (m / 3.0).sqrt();
        let phi = (-q / 2.0 * (27.0 / (m * m * m)).sqrt()).acos();
        for k in 0..3 {
            roots.push(amplitude * ((phi + 2.0 * PI * k as f64) / 3.0).cos() - shift);
        }
    } else {
        // One real root via Cardano, using real cube roots.
        let sqrt_disc = discriminant.sqrt();
        let u = cbrt_real(-q / 2.0 + sqrt_disc);
        let v = cbrt_real(-q / 2.0 - sqrt_disc);
        roots.push(u + v - shift);

        if discriminant.abs() < ROOT_TOL {
            // Vanishing discriminant: a repeated root at -(u+v)/2. Pushed
            // twice when p is nonzero so a genuine double root survives the
            // triple-root collapse; deduplication below keeps one copy.
            let repeated = -(u + v) / 2.0 - shift;
            roots.push(repeated);
            if p.abs() > ROOT_TOL {
                roots.push(repeated);
            }
        }
    }

    roots.sort_by(f64::total_cmp);
    dedup_close(&mut roots);
    let irreducible = roots.len() < 3;
    (roots, irreducible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_one_real_root_x3_minus_8() {
        let (roots, irreducible) = real_roots(1, 0, 0, -8);
        assert_eq!(roots.len(), 1, "x^3 - 8 has exactly one real root");
        assert!((roots[0] - 2.0).abs() < 1e-10, "expected 2, got {}", roots[0]);
        assert!(irreducible);
    }

    #[test]
    fn test_three_real_roots_one_two_three() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let (roots, irreducible) = real_roots(1, -6, 11, -6);
        assert_eq!(roots.len(), 3);
        for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert!(
                (root - expected).abs() < 1e-9,
                "expected {}, got {}",
                expected,
                root
            );
        }
        assert!(!irreducible, "3 distinct real roots is reducible by the heuristic");
    }

    #[test]
    fn test_triple_root() {
        // (x-1)^3 = x^3 - 3x^2 + 3x - 1
        let (roots, irreducible) = real_roots(1, -3, 3, -1);
        assert_eq!(roots, vec![1.0]);
        assert!(irreducible);
    }

    #[test]
    fn test_double_root_collapses_to_two() {
        // (x-1)^2(x+2) = x^3 - 3x + 2
        let (roots, irreducible) = real_roots(1, 0, -3, 2);
        assert_eq!(roots.len(), 2, "double root kept once, got {:?}", roots);
        assert!((roots[0] + 2.0).abs() < 1e-9);
        assert!((roots[1] - 1.0).abs() < 1e-9);
        assert!(irreducible);
    }

    #[test]
    fn test_zero_leading_coefficient_degrades_to_quadratic() {
        // 0x^3 + x^2 - 2 = x^2 - 2
        let (roots, irreducible) = real_roots(0, 1, 0, -2);
        assert_eq!(roots.len(), 2);
        assert!((roots[1] - 2.0f64.sqrt()).abs() < 1e-12);
        assert!(irreducible);
    }

    #[test]
    fn test_cbrt_real_handles_negatives() {
        assert!((cbrt_real(-27.0) + 3.0).abs() < 1e-12);
        assert!((cbrt_real(27.0) - 3.0).abs() < 1e-12);
        assert_eq!(cbrt_real(0.0), 0.0);
    }

    #[test]
    fn test_random_cubics_root_count_and_residual() {
        // Every genuine cubic has 1 to 3 real roots, sorted with no two
        // closer than the dedup tolerance, and each root must survive the
        // spot-check residual test.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5000 {
            let a = rng.gen_range(1..=5i64);
            let b = rng.gen_range(-10..=10i64);
            let c = rng.gen_range(-10..=10i64);
            let mut d = rng.gen_range(-10..=10i64);
            if d == 0 {
                d = 1;
            }

            let (roots, irreducible) = real_roots(a, b, c, d);
            assert!(
                (1..=3).contains(&roots.len()),
                "cubic ({},{},{},{}) produced {} roots",
                a,
                b,
                c,
                d,
                roots.len()
            );
            assert_eq!(irreducible, roots.len() < 3);

            for pair in roots.windows(2) {
                assert!(
                    pair[1] - pair[0] > ROOT_TOL,
                    "roots {:?} of ({},{},{},{}) not separated",
                    roots,
                    a,
                    b,
                    c,
                    d
                );
            }

            for &root in &roots {
                assert!(
                    diagnostics::check_root(&[a, b, c, d], root).is_none(),
                    "root {} of ({},{},{},{}) failed the residual check",
                    root,
                    a,
                    b,
                    c,
                    d
                );
            }
        }
    }
}
