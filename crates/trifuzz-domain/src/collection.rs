//! Multiset of triangular fuzzy numbers with arithmetic-mean aggregation.

use crate::error::{FuzzyError, Result};
use crate::TriFuzzyNum;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Unordered multiset of [`TriFuzzyNum`] values
///
/// Membership is decided by the number's own total order, so values whose
/// rank keys coincide land in one class even when their bounds differ. Every
/// inserted value is kept as its own entry; nothing is merged.
///
/// # Examples
/// ```
/// use trifuzz_domain::{TriFuzzyNum, TriFuzzyNumSet};
///
/// let mut set = TriFuzzyNumSet::new();
/// set.insert(TriFuzzyNum::new(1.0, 2.0, 3.0));
/// set.insert(TriFuzzyNum::new(3.0, 4.0, 5.0));
///
/// let mean = set.arithmetic_mean().unwrap();
/// assert_eq!(mean.bounds(), (2.0, 3.0, 4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriFuzzyNumSet {
    classes: BTreeMap<TriFuzzyNum, Vec<TriFuzzyNum>>,
    len: usize,
}

impl TriFuzzyNumSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a value; equal values are retained separately
    pub fn insert(&mut self, value: TriFuzzyNum) {
        self.classes.entry(value).or_default().push(value);
        self.len += 1;
        trace!(%value, len = self.len, "inserted fuzzy number");
    }

    /// Remove one occurrence equal to `value`
    ///
    /// Within the matching rank class an entry with identical bounds is
    /// preferred, otherwise the most recently inserted one goes. Returns
    /// `false`, leaving the set untouched, when nothing matches.
    pub fn remove(&mut self, value: &TriFuzzyNum) -> bool {
        let Some(members) = self.classes.get_mut(value) else {
            trace!(%value, "remove found no matching fuzzy number");
            return false;
        };

        match members.iter().rposition(|m| m.bounds() == value.bounds()) {
            Some(idx) => {
                members.remove(idx);
            }
            None => {
                members.pop();
            }
        }
        if members.is_empty() {
            self.classes.remove(value);
        }
        self.len -= 1;
        trace!(%value, len = self.len, "removed fuzzy number");
        true
    }

    /// Whether any stored value equals `value`
    pub fn contains(&self, value: &TriFuzzyNum) -> bool {
        self.classes.contains_key(value)
    }

    /// Number of stored values equal to `value`
    pub fn count(&self, value: &TriFuzzyNum) -> usize {
        self.classes.get(value).map_or(0, Vec::len)
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.classes.clear();
        self.len = 0;
    }

    /// Iterate in ascending order; equal values come in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TriFuzzyNum> + '_ {
        self.classes.values().flatten()
    }

    /// Componentwise sum of all values divided by their count
    ///
    /// # Errors
    /// [`FuzzyError::EmptyCollection`] when the set is empty.
    pub fn arithmetic_mean(&self) -> Result<TriFuzzyNum> {
        if self.is_empty() {
            return Err(FuzzyError::EmptyCollection);
        }

        let total: TriFuzzyNum = self.iter().sum();
        let mean = total.checked_div(self.len as f64)?;
        debug!(count = self.len, %mean, "computed arithmetic mean");
        Ok(mean)
    }
}

impl From<Vec<TriFuzzyNum>> for TriFuzzyNumSet {
    fn from(values: Vec<TriFuzzyNum>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<TriFuzzyNum> for TriFuzzyNumSet {
    fn from_iter<I: IntoIterator<Item = TriFuzzyNum>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<TriFuzzyNum> for TriFuzzyNumSet {
    fn extend<I: IntoIterator<Item = TriFuzzyNum>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
