//! Ranking transform behind equality and ordering of [`TriFuzzyNum`].
//!
//! The key is a distance-weighted centroid of the triangular membership
//! function. It is a lossy projection: distinct triples may share a key and
//! then compare equal.
//!
//! [`TriFuzzyNum`]: crate::TriFuzzyNum

use std::cmp::Ordering;

/// Ordering key `(x - y/2, 1 - y, modal)` derived from a triple
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankKey(f64, f64, f64);

impl RankKey {
    /// Compute the key for sorted bounds `l <= m <= u`
    pub(crate) fn of(l: f64, m: f64, u: f64) -> Self {
        let width = u - l;
        // sqrt(1 + d^2) without overflowing for large d
        let spread_lm = 1.0_f64.hypot(m - l);
        let spread_mu = 1.0_f64.hypot(u - m);

        // Both spreads are >= 1, so z > 0 even for crisp numbers
        let z = width + spread_mu + spread_lm;
        let y = width / z;
        // Weights sum to 1; scaling before multiplying keeps x finite
        let x = y * m + (spread_mu / z) * l + (spread_lm / z) * u;

        RankKey(x - y / 2.0, 1.0 - y, m)
    }

    /// Lexicographic comparison of the three components
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        compare_component(self.0, other.0)
            .then_with(|| compare_component(self.1, other.1))
            .then_with(|| compare_component(self.2, other.2))
    }
}

/// IEEE comparison, with `total_cmp` deciding only when a NaN is involved.
///
/// Keeps `-0.0 == 0.0` while still giving NaN a fixed place in the order.
fn compare_component(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_crisp_key() {
        let key = RankKey::of(5.0, 5.0, 5.0);
        assert_eq!(key.0, 5.0);
        assert_eq!(key.1, 1.0);
        assert_eq!(key.2, 5.0);
    }

    #[test]
    fn test_symmetric_key() {
        // Symmetric triangle: centroid x equals the modal value
        let key = RankKey::of(1.0, 2.0, 3.0);
        let z = 2.0 + 2.0 * 2.0_f64.sqrt();
        let y = 2.0 / z;
        assert!((key.0 - (2.0 - y / 2.0)).abs() < EPS);
        assert!((key.1 - (1.0 - y)).abs() < EPS);
        assert_eq!(key.2, 2.0);
    }

    #[test]
    fn test_asymmetric_key() {
        let (l, m, u) = (0.0, 1.0, 4.0);
        let spread_lm = 2.0_f64.sqrt();
        let spread_mu = 10.0_f64.sqrt();
        let z = 4.0 + spread_mu + spread_lm;
        let x = (4.0 * m + spread_mu * l + spread_lm * u) / z;
        let y = 4.0 / z;

        let key = RankKey::of(l, m, u);
        assert!((key.0 - (x - y / 2.0)).abs() < EPS);
        assert!((key.1 - (1.0 - y)).abs() < EPS);
    }

    #[test]
    fn test_large_bounds_stay_finite() {
        let key = RankKey::of(0.0, 1e200, 2e200);
        assert!(key.0.is_finite());
        assert!(key.1.is_finite());
        assert!((key.0 / 1e200 - 1.0).abs() < EPS);

        let below = RankKey::of(-5.0, -5.0, -5.0);
        assert_eq!(key.compare(&below), Ordering::Greater);

        let wide = RankKey::of(-1e300, 1e200, 1e300);
        assert_ne!(key.compare(&wide), Ordering::Equal);
        assert!(wide.0.is_finite());

        let shifted = RankKey::of(1e200, 2e200, 3e200);
        assert_eq!(key.compare(&shifted), Ordering::Less);
    }

    #[test]
    fn test_signed_zero_compares_equal() {
        let a = RankKey::of(0.0, 0.0, 0.0);
        let b = RankKey::of(-0.0, -0.0, -0.0);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_nan_has_fixed_place() {
        let nan = RankKey::of(f64::NAN, f64::NAN, f64::NAN);
        let one = RankKey::of(1.0, 1.0, 1.0);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
        assert_eq!(nan.compare(&one), one.compare(&nan).reverse());
    }
}
