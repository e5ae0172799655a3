use super::{Grid, Sequence};

impl<T> Sequence<T> {
    /// Applies `f` to a window of up to `size` elements ending at each position, producing one
    /// output per element. Windows near the head are cut short rather than skipped.
    ///
    /// A `size` of 0 produces an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4]);
    /// let sums = seq.window_left(2, |w| w.iter().sum::<i32>());
    /// assert_eq!(sums, Sequence::from([1, 3, 5, 7]));
    /// ```
    pub fn window_left<U, F: FnMut(&[T]) -> U>(&self, size: usize, f: F) -> Sequence<U> {
        self.window_with(size, size.saturating_sub(1), 0, f)
    }

    /// Applies `f` to a window of up to `size` elements starting at each position, producing one
    /// output per element. Windows near the end are cut short rather than skipped.
    ///
    /// A `size` of 0 produces an empty Sequence.
    pub fn window_right<U, F: FnMut(&[T]) -> U>(&self, size: usize, f: F) -> Sequence<U> {
        self.window_with(size, 0, size.saturating_sub(1), f)
    }

    /// Applies `f` to a window of up to `size` elements centered on each position, producing one
    /// output per element. Windows are cut short at both ends of the Sequence.
    ///
    /// The `size - 1` neighbours are split between both sides of the position, with the extra one
    /// going before it when the split is uneven. A window of 4 covers two elements before the
    /// position and one after.
    ///
    /// A `size` of 0 produces an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from(["1", "2", "3"]);
    /// assert_eq!(
    ///     seq.window_centered(3, |w| w.concat()),
    ///     Sequence::from(["12", "123", "23"].map(String::from)),
    /// );
    /// ```
    pub fn window_centered<U, F: FnMut(&[T]) -> U>(&self, size: usize, f: F) -> Sequence<U> {
        let spread = size.saturating_sub(1);
        self.window_with(size, spread.div_ceil(2), spread / 2, f)
    }

    /// Applies `f` to the window spanning `before` elements before and `after` elements after each
    /// position, clipped to the bounds of the Sequence.
    fn window_with<U, F>(&self, size: usize, before: usize, after: usize, mut f: F) -> Sequence<U>
    where
        F: FnMut(&[T]) -> U,
    {
        if size == 0 {
            return Sequence::new();
        }

        let len = self.len();
        (0..len)
            .map(|i| {
                let start = i.saturating_sub(before);
                let end = i.saturating_add(after).saturating_add(1).min(len);
                f(&self.inner[start..end])
            })
            .collect()
    }

    /// Applies `f` to every pair of adjacent elements, producing one fewer output than there are
    /// elements. Sequences with fewer than two elements produce an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 4, 9, 16]);
    /// assert_eq!(seq.pairwise(|a, b| b - a), Sequence::from([3, 5, 7]));
    /// ```
    pub fn pairwise<U, F: FnMut(&T, &T) -> U>(&self, mut f: F) -> Sequence<U> {
        self.inner.windows(2).map(|pair| f(&pair[0], &pair[1])).collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Interleaves the Sequence with `other`, starting with the head of `self`. Once the shorter
    /// one runs out, the rest of the longer one is appended as is.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let a = Sequence::from([1, 2]);
    /// let b = Sequence::from([7, 8, 9]);
    /// assert_eq!(a.zip(&b), Sequence::from([1, 7, 2, 8, 9]));
    /// assert_eq!(Sequence::new().zip(&b), b);
    /// ```
    pub fn zip(&self, other: &Sequence<T>) -> Sequence<T> {
        let shared = self.len().min(other.len());
        let mut result = Sequence::with_cap(self.len() + other.len());

        for (a, b) in self.inner.iter().zip(other.inner.iter()) {
            result.push(a.clone());
            result.push(b.clone());
        }
        result.append(self.inner[shared..].iter().cloned());
        result.append(other.inner[shared..].iter().cloned());

        result
    }

    /// Splits the Sequence into two rows: the elements at even indices and the elements at odd
    /// indices. This undoes [`zip`](Sequence::zip) for Sequences of equal length.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let rows = Sequence::from([1, 7, 2, 8, 3]).unzip();
    /// assert_eq!(*rows[0], [1, 2, 3]);
    /// assert_eq!(*rows[1], [7, 8]);
    /// ```
    pub fn unzip(&self) -> Grid<T> {
        let mut even = Sequence::with_cap(self.len().div_ceil(2));
        let mut odd = Sequence::with_cap(self.len() / 2);

        for (i, item) in self.inner.iter().enumerate() {
            if i % 2 == 0 {
                even.push(item.clone());
            } else {
                odd.push(item.clone());
            }
        }

        Grid::from_rows([even, odd])
    }
}
