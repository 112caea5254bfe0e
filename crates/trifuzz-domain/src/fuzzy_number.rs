//! Triangular fuzzy number value type
//!
//! A number is three reals `lower <= modal <= upper`. Arithmetic produces new
//! values; equality and ordering go through a centroid-style ranking
//! transform, not through the raw bounds.

use crate::error::{FuzzyError, Result};
use crate::rank::RankKey;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

/// Triangular fuzzy number `(lower, modal, upper)`
///
/// Bounds are kept sorted at all times. Two numbers are equal when their
/// rank keys are equal, which can hold for different bounds:
///
/// ```
/// use trifuzz_domain::TriFuzzyNum;
///
/// let a = TriFuzzyNum::new(0.0, 1.0, 2.0);
/// let b = TriFuzzyNum::new(1e-300, 1.0, 2.0);
/// assert_eq!(a, b);
/// assert_ne!(a.lower_value(), b.lower_value());
/// ```
///
/// NaN and infinities are propagated per IEEE-754 by [`TriFuzzyNum::new`];
/// use [`TriFuzzyNum::try_new`] to reject them up front.
#[derive(Debug, Clone, Copy)]
pub struct TriFuzzyNum {
    lower: f64,
    modal: f64,
    upper: f64,
}

impl TriFuzzyNum {
    /// The crisp zero `(0, 0, 0)`
    pub const ZERO: TriFuzzyNum = TriFuzzyNum::crisp(0.0);

    /// Create a number from three values given in any order
    ///
    /// # Examples
    /// ```
    /// use trifuzz_domain::TriFuzzyNum;
    ///
    /// let n = TriFuzzyNum::new(3.0, 1.0, 2.0);
    /// assert_eq!(n.lower_value(), 1.0);
    /// assert_eq!(n.modal_value(), 2.0);
    /// assert_eq!(n.upper_value(), 3.0);
    /// ```
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let (lower, modal, upper) = order_bounds(a, b, c);
        Self { lower, modal, upper }
    }

    /// Create a number, rejecting NaN and infinite values
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(FuzzyError::NonFinite {
                lower: a,
                modal: b,
                upper: c,
            });
        }
        Ok(Self::new(a, b, c))
    }

    /// Crisp number `(value, value, value)`
    pub const fn crisp(value: f64) -> Self {
        Self {
            lower: value,
            modal: value,
            upper: value,
        }
    }

    /// Same as [`TriFuzzyNum::ZERO`]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Lower bound
    pub fn lower_value(&self) -> f64 {
        self.lower
    }

    /// Modal (peak) value
    pub fn modal_value(&self) -> f64 {
        self.modal
    }

    /// Upper bound
    pub fn upper_value(&self) -> f64 {
        self.upper
    }

    /// Whether all three bounds coincide
    pub fn is_crisp(&self) -> bool {
        self.lower == self.modal && self.modal == self.upper
    }

    /// Whether every bound is finite
    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.modal.is_finite() && self.upper.is_finite()
    }

    /// Divide every bound by a scalar
    ///
    /// The result is re-sorted, so negative divisors are accepted.
    ///
    /// # Errors
    /// [`FuzzyError::DivisionByZero`] if `divisor` is zero or NaN.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 || divisor.is_nan() {
            return Err(FuzzyError::DivisionByZero);
        }
        Ok(Self::new(
            self.lower / divisor,
            self.modal / divisor,
            self.upper / divisor,
        ))
    }

    /// Raw bounds as a tuple
    pub fn bounds(&self) -> (f64, f64, f64) {
        (self.lower, self.modal, self.upper)
    }

    fn rank(&self) -> RankKey {
        RankKey::of(self.lower, self.modal, self.upper)
    }
}

/// Sort three values ascending with a three-swap network
fn order_bounds(mut a: f64, mut b: f64, mut c: f64) -> (f64, f64, f64) {
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }
    if a > c {
        std::mem::swap(&mut a, &mut c);
    }
    if b > c {
        std::mem::swap(&mut b, &mut c);
    }
    (a, b, c)
}

impl PartialEq for TriFuzzyNum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TriFuzzyNum {}

impl PartialOrd for TriFuzzyNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TriFuzzyNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().compare(&other.rank())
    }
}

impl AddAssign for TriFuzzyNum {
    fn add_assign(&mut self, that: Self) {
        // Sum of two sorted triples is sorted
        self.lower += that.lower;
        self.modal += that.modal;
        self.upper += that.upper;
    }
}

impl SubAssign for TriFuzzyNum {
    fn sub_assign(&mut self, that: Self) {
        // Cross terms keep the result sorted and widen it
        self.lower -= that.upper;
        self.modal -= that.modal;
        self.upper -= that.lower;
    }
}

impl MulAssign for TriFuzzyNum {
    fn mul_assign(&mut self, that: Self) {
        // Negative bounds break the order, e.g. (-100, 2, 3) * (-1, 2, 3)
        *self = Self::new(
            self.lower * that.lower,
            self.modal * that.modal,
            self.upper * that.upper,
        );
    }
}

impl Add for TriFuzzyNum {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for TriFuzzyNum {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul for TriFuzzyNum {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl Sum for TriFuzzyNum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a TriFuzzyNum> for TriFuzzyNum {
    fn sum<I: Iterator<Item = &'a TriFuzzyNum>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(f64, f64, f64)> for TriFuzzyNum {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<TriFuzzyNum> for (f64, f64, f64) {
    fn from(n: TriFuzzyNum) -> Self {
        n.bounds()
    }
}

impl fmt::Display for TriFuzzyNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.*}, {:.*}, {:.*})",
                p, self.lower, p, self.modal, p, self.upper
            ),
            None => write!(f, "({}, {}, {})", self.lower, self.modal, self.upper),
        }
    }
}

impl FromStr for TriFuzzyNum {
    type Err = FuzzyError;

    /// Parse `"(l, m, u)"`; parentheses are optional
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let values = inner
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| FuzzyError::Parse(format!("'{}': {}", part.trim(), e)))
            })
            .collect::<Result<Vec<f64>>>()?;

        match values.as_slice() {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(FuzzyError::Parse(format!(
                "expected three comma-separated values, got {} in '{}'",
                values.len(),
                s
            ))),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        -1e6_f64..1e6
    }

    fn number() -> impl Strategy<Value = TriFuzzyNum> {
        (finite(), finite(), finite()).prop_map(|(a, b, c)| TriFuzzyNum::new(a, b, c))
    }

    fn sorted_multiset(a: f64, b: f64, c: f64) -> [f64; 3] {
        let mut v = [a, b, c];
        v.sort_by(f64::total_cmp);
        v
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Property: construction sorts and keeps the same three values
        #[test]
        fn test_construction_invariant(a in finite(), b in finite(), c in finite()) {
            let n = TriFuzzyNum::new(a, b, c);
            prop_assert!(n.lower_value() <= n.modal_value());
            prop_assert!(n.modal_value() <= n.upper_value());
            prop_assert_eq!(
                [n.lower_value(), n.modal_value(), n.upper_value()],
                sorted_multiset(a, b, c)
            );
        }

        /// Property: addition is componentwise and stays sorted
        #[test]
        fn test_addition_componentwise(x in number(), y in number()) {
            let sum = x + y;
            prop_assert_eq!(sum.lower_value(), x.lower_value() + y.lower_value());
            prop_assert_eq!(sum.modal_value(), x.modal_value() + y.modal_value());
            prop_assert_eq!(sum.upper_value(), x.upper_value() + y.upper_value());
            prop_assert!(sum.lower_value() <= sum.modal_value());
            prop_assert!(sum.modal_value() <= sum.upper_value());
        }

        /// Property: subtraction follows the cross-term law and stays sorted
        #[test]
        fn test_subtraction_cross_terms(x in number(), y in number()) {
            let diff = x - y;
            prop_assert_eq!(diff.lower_value(), x.lower_value() - y.upper_value());
            prop_assert_eq!(diff.modal_value(), x.modal_value() - y.modal_value());
            prop_assert_eq!(diff.upper_value(), x.upper_value() - y.lower_value());
            prop_assert!(diff.lower_value() <= diff.modal_value());
            prop_assert!(diff.modal_value() <= diff.upper_value());
        }

        /// Property: multiplication yields the sorted componentwise products
        #[test]
        fn test_multiplication_sorted(x in number(), y in number()) {
            let product = x * y;
            let expected = sorted_multiset(
                x.lower_value() * y.lower_value(),
                x.modal_value() * y.modal_value(),
                x.upper_value() * y.upper_value(),
            );
            prop_assert_eq!(
                [product.lower_value(), product.modal_value(), product.upper_value()],
                expected
            );
        }

        /// Property: ordering is reflexive, antisymmetric and transitive
        #[test]
        fn test_total_order(x in number(), y in number(), z in number()) {
            prop_assert_eq!(x, x);
            prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
            prop_assert_eq!(x == y, x.cmp(&y) == Ordering::Equal);
            if x <= y && y <= z {
                prop_assert!(x <= z);
            }
        }

        /// Property: display output parses back to equal bounds
        #[test]
        fn test_display_parses(x in number()) {
            let parsed: TriFuzzyNum = x.to_string().parse().unwrap();
            prop_assert_eq!(parsed.bounds(), x.bounds());
        }
    }
}
