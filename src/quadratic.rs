//! Degree-2 classifier: rational irreducibility filter and closed-form roots.

use num_integer::Roots;

/// Is `ax^2 + bx + c` irreducible over the rationals?
///
/// True iff the discriminant `b^2 - 4ac` is negative, or non-negative but not
/// a perfect square. The perfect-square test is exact: integer square root
/// and re-squaring, no floating tolerance.
pub fn is_irreducible(a: i64, b: i64, c: i64) -> bool {
    let discriminant = b * b - 4 * a * c;
    if discriminant < 0 {
        return true;
    }
    let sqrt_disc = discriminant.sqrt();
    sqrt_disc * sqrt_disc != discriminant
}

/// Real roots of `ax^2 + bx + c` (leading coefficient nonzero), ascending.
///
/// Returns the single repeated root when the integer discriminant is exactly
/// zero, an empty set when the roots are complex, and both roots otherwise.
pub fn real_roots(a: i64, b: i64, c: i64) -> Vec<f64> {
    let discriminant_int = b * b - 4 * a * c;
    let (fa, fb, fc) = (a as f64, b as f64, c as f64);

    if discriminant_int == 0 {
        return vec![-fb / (2.0 * fa)];
    }

    let discriminant = fb * fb - 4.0 * fa * fc;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_disc = discriminant.sqrt();
    let root1 = (-fb + sqrt_disc) / (2.0 * fa);
    let root2 = (-fb - sqrt_disc) / (2.0 * fa);
    if root1 > root2 {
        vec![root2, root1]
    } else {
        vec![root1, root2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square_discriminant_is_reducible() {
        // x^2 - 1 = (x-1)(x+1), discriminant 4
        assert!(!is_irreducible(1, 0, -1));
        // x^2 + 2x + 1 = (x+1)^2, discriminant 0
        assert!(!is_irreducible(1, 2, 1));
        // x^2 - 5x + 6 = (x-2)(x-3), discriminant 1
        assert!(!is_irreducible(1, -5, 6));
    }

    #[test]
    fn test_negative_discriminant_is_irreducible() {
        assert!(is_irreducible(1, 0, 1));
        assert!(is_irreducible(3, 1, 2));
    }

    #[test]
    fn test_nonsquare_discriminant_is_irreducible() {
        // x^2 - 2, discriminant 8
        assert!(is_irreducible(1, 0, -2));
        // x^2 - x - 1, discriminant 5
        assert!(is_irreducible(1, -1, -1));
    }

    #[test]
    fn test_roots_of_x2_minus_2() {
        let roots = real_roots(1, 0, -2);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] + 2.0f64.sqrt()).abs() < 1e-12, "expected -sqrt(2), got {}", roots[0]);
        assert!((roots[1] - 2.0f64.sqrt()).abs() < 1e-12, "expected sqrt(2), got {}", roots[1]);
    }

    #[test]
    fn test_complex_roots_are_empty() {
        assert!(real_roots(1, 0, 1).is_empty());
        assert!(real_roots(2, 1, 3).is_empty());
    }

    #[test]
    fn test_repeated_root_returned_once() {
        // (x+1)^2
        let roots = real_roots(1, 2, 1);
        assert_eq!(roots, vec![-1.0]);
    }

    #[test]
    fn test_roots_ascending_with_negative_leading_coefficient() {
        // -x^2 + 3: roots +/- sqrt(3); division by negative 2a must not
        // break the ordering.
        let roots = real_roots(-1, 0, 3);
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < roots[1]);
    }
}
