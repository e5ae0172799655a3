//! Set-like operations over Sequences.
//!
//! Nothing here hashes or orders elements. Membership is decided by a caller-supplied equality
//! function, which isn't assumed to be an equivalence relation, by comparing every pair of
//! elements. Duplicates are never collapsed unless an operation says so.

use super::Sequence;

/// Returns true if `eq(item, other)` holds for any element of `others`.
fn matches_any<T, F: FnMut(&T, &T) -> bool>(item: &T, others: &[T], eq: &mut F) -> bool {
    others.iter().any(|other| eq(item, other))
}

/// Returns true if `eq(other, item)` holds for any element of `others`.
fn matched_by_any<T, F: FnMut(&T, &T) -> bool>(item: &T, others: &[T], eq: &mut F) -> bool {
    others.iter().any(|other| eq(other, item))
}

impl<T: Clone> Sequence<T> {
    /// Returns every element of `self` which matches no element of `other`, followed by every
    /// element of `other` which matches no element of `self`. Duplicates and relative order are
    /// preserved on both sides.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let a = Sequence::from([1, 2, 3, 3, 1, 4]);
    /// let b = Sequence::from([5, 4, 3, 5]);
    /// assert_eq!(a.difference(&b, |x, y| x == y), Sequence::from([1, 2, 1, 5, 5]));
    /// ```
    pub fn difference<F: FnMut(&T, &T) -> bool>(
        &self,
        other: &Sequence<T>,
        mut eq: F,
    ) -> Sequence<T> {
        let mut result = Sequence::new();
        for item in self.inner.iter() {
            if !matches_any(item, &other.inner, &mut eq) {
                result.push(item.clone());
            }
        }
        for item in other.inner.iter() {
            if !matched_by_any(item, &self.inner, &mut eq) {
                result.push(item.clone());
            }
        }
        result
    }

    /// Returns the elements of the Sequence with later duplicates removed, keeping the first
    /// element of each group of equal elements in its original position.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([3, 1, 3, 2, 1]);
    /// assert_eq!(seq.distinct(|a, b| a == b), Sequence::from([3, 1, 2]));
    /// ```
    pub fn distinct<F: FnMut(&T, &T) -> bool>(&self, mut eq: F) -> Sequence<T> {
        let mut result: Sequence<T> = Sequence::new();
        for item in self.inner.iter() {
            if !matched_by_any(item, &result.inner, &mut eq) {
                result.push(item.clone());
            }
        }
        result
    }

    /// Returns every element of `self` which matches at least one element of `other`, in the
    /// order of `self`. Duplicates in `self` are all kept, even if `other` only has one match for
    /// them.
    pub fn intersection<F: FnMut(&T, &T) -> bool>(
        &self,
        other: &Sequence<T>,
        mut eq: F,
    ) -> Sequence<T> {
        self.inner
            .iter()
            .filter(|&item| matches_any(item, &other.inner, &mut eq))
            .cloned()
            .collect()
    }

    /// Returns all elements of `self`, followed by the elements of `other` which match no element
    /// of `self`.
    pub fn union<F: FnMut(&T, &T) -> bool>(&self, other: &Sequence<T>, mut eq: F) -> Sequence<T> {
        let mut result = self.clone();
        for item in other.inner.iter() {
            if !matched_by_any(item, &self.inner, &mut eq) {
                result.push(item.clone());
            }
        }
        result
    }
}

impl<T> Sequence<T> {
    /// Returns true if every element of `self` matches some element of `other`. (`self ⊆ other`)
    ///
    /// Matches aren't consumed, so duplicates in `self` don't need an equal number of duplicates
    /// in `other`: `[1, 1]` is a subset of `[1]`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let eq = |a: &u8, b: &u8| a == b;
    /// assert!(Sequence::from([1, 1]).is_subset(&Sequence::from([1]), eq));
    /// assert!(!Sequence::from([1, 2]).is_subset(&Sequence::from([1]), eq));
    /// ```
    pub fn is_subset<F: FnMut(&T, &T) -> bool>(&self, other: &Sequence<T>, mut eq: F) -> bool {
        self.inner
            .iter()
            .all(|item| matches_any(item, &other.inner, &mut eq))
    }

    /// Returns true if every element of `other` matches some element of `self`. (`self ⊇ other`)
    pub fn is_superset<F: FnMut(&T, &T) -> bool>(&self, other: &Sequence<T>, mut eq: F) -> bool {
        other.is_subset(self, |a, b| eq(b, a))
    }

    /// Returns true if `self` is a subset of `other` and `other` still has elements left once
    /// every element matching `self` is removed. (`self ⊂ other`)
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let eq = |a: &u8, b: &u8| a == b;
    /// assert!(Sequence::from([1]).is_proper_subset(&Sequence::from([1, 2]), eq));
    /// assert!(!Sequence::from([1, 2]).is_proper_subset(&Sequence::from([2, 1, 1]), eq));
    /// ```
    pub fn is_proper_subset<F: FnMut(&T, &T) -> bool>(
        &self,
        other: &Sequence<T>,
        mut eq: F,
    ) -> bool {
        self.is_subset(other, &mut eq)
            && other
                .inner
                .iter()
                .any(|item| !matched_by_any(item, &self.inner, &mut eq))
    }

    /// Returns true if `other` is a proper subset of `self`. (`self ⊃ other`)
    pub fn is_proper_superset<F: FnMut(&T, &T) -> bool>(
        &self,
        other: &Sequence<T>,
        mut eq: F,
    ) -> bool {
        other.is_proper_subset(self, |a, b| eq(b, a))
    }
}
