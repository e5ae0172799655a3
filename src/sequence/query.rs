use super::Sequence;

impl<T> Sequence<T> {
    /// Returns true if every element satisfies `pred`. An empty Sequence vacuously satisfies any
    /// predicate.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([2, 4, 6]);
    /// assert!(seq.all(|i| i % 2 == 0));
    /// assert!(Sequence::<u8>::new().all(|_| false));
    /// ```
    pub fn all<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        self.inner.iter().all(pred)
    }

    /// Returns true if at least one element satisfies `pred`.
    pub fn any<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        self.inner.iter().any(pred)
    }

    /// Returns true if no element satisfies `pred`.
    pub fn none<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        !self.any(pred)
    }

    /// Returns the number of elements which satisfy `pred`.
    pub fn count<F: FnMut(&T) -> bool>(&self, mut pred: F) -> usize {
        self.inner.iter().filter(|item| pred(item)).count()
    }

    /// Returns the index of the first element which satisfies `pred`.
    pub fn find_index<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        self.inner.iter().position(pred)
    }

    /// Returns the first element which satisfies `pred`.
    pub fn first<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        self.inner.iter().find(|item| pred(item))
    }

    /// Returns the last element which satisfies `pred`.
    pub fn last<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        self.inner.iter().rev().find(|item| pred(item))
    }

    /// Returns the first element of the Sequence.
    pub fn head(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the last element of the Sequence.
    pub fn end(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns the element at `index`, or [`None`] if `index` is negative or past the end of the
    /// Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from(['a', 'b', 'c']);
    /// assert_eq!(seq.item(1), Some(&'b'));
    /// assert_eq!(seq.item(-1), None);
    /// assert_eq!(seq.item(3), None);
    /// ```
    pub fn item(&self, index: isize) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.inner.get(i))
    }

    /// Returns the element at `index`, saturating to the head for negative indices and to the end
    /// for indices past the end. Only returns [`None`] if the Sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from(['a', 'b', 'c']);
    /// assert_eq!(seq.item_fuzzy(-10), Some(&'a'));
    /// assert_eq!(seq.item_fuzzy(1), Some(&'b'));
    /// assert_eq!(seq.item_fuzzy(10), Some(&'c'));
    /// ```
    pub fn item_fuzzy(&self, index: isize) -> Option<&T> {
        match usize::try_from(index) {
            Err(_) => self.head(),
            Ok(i) if i >= self.len() => self.end(),
            Ok(i) => self.inner.get(i),
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new Sequence with every element except the head.
    pub fn tail(&self) -> Sequence<T> {
        self.inner.iter().skip(1).cloned().collect()
    }
}
