use super::{Grid, Sequence};

impl<T> Sequence<T> {
    /// Inserts `item` at `index`, shifting all following elements back. Negative indices insert at
    /// the head and indices past the end append, so this never fails.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// seq.insert_at(1, 10);
    /// seq.insert_at(-5, 20);
    /// seq.insert_at(100, 30);
    /// assert_eq!(seq, Sequence::from([20, 1, 10, 2, 3, 30]));
    /// ```
    pub fn insert_at(&mut self, index: isize, item: T) {
        let index = self.clamp_index(index);
        self.inner.insert(index, item);
    }

    /// Inserts `item` directly before the first element which satisfies `pred`. If no element
    /// does, the missing index is treated as `-1` and clamped, inserting `item` at the head.
    pub fn insert_before<F: FnMut(&T) -> bool>(&mut self, pred: F, item: T) {
        let index = self.find_index(pred).map_or(-1, |i| i as isize);
        self.insert_at(index, item);
    }

    /// Inserts `item` directly after the first element which satisfies `pred`. If no element does,
    /// the missing index is treated as `-1`, inserting `item` at the head.
    pub fn insert_after<F: FnMut(&T) -> bool>(&mut self, pred: F, item: T) {
        let index = self.find_index(pred).map_or(-1, |i| i as isize);
        self.insert_at(index + 1, item);
    }

    /// Removes and returns the element at `index`. Does nothing and returns [`None`] if `index` is
    /// out of bounds in either direction.
    pub fn remove_at(&mut self, index: isize) -> Option<T> {
        let index = usize::try_from(index).ok().filter(|&i| i < self.len())?;
        Some(self.inner.remove(index))
    }

    /// Swaps the elements at `a` and `b`. Does nothing if either index is out of bounds.
    pub fn swap_index(&mut self, a: isize, b: isize) {
        let len = self.len();
        let in_bounds = |index: isize| usize::try_from(index).ok().filter(|&i| i < len);

        if let (Some(a), Some(b)) = (in_bounds(a), in_bounds(b)) {
            self.inner.swap(a, b);
        }
    }

    /// Clamps a possibly negative or overlong index to the range `0..=len`.
    pub(crate) fn clamp_index(&self, index: isize) -> usize {
        usize::try_from(index).map_or(0, |i| i.min(self.len()))
    }
}

impl<T: Clone> Sequence<T> {
    /// Splits the Sequence into a [`Grid`] of exactly two rows, where the first row holds the
    /// elements before `index` and the second holds the rest. Concatenating both rows always
    /// results in the original Sequence.
    ///
    /// A negative `index` puts everything in the second row and an `index` past the end puts
    /// everything in the first.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// let split = seq.split_at(1);
    /// assert_eq!(*split[0], [1]);
    /// assert_eq!(*split[1], [2, 3]);
    ///
    /// let split = seq.split_at(-1);
    /// assert!(split[0].is_empty());
    /// assert_eq!(split[1], seq);
    /// ```
    pub fn split_at(&self, index: isize) -> Grid<T> {
        let (front, back) = self.inner.split_at(self.clamp_index(index));
        Grid::from_rows([Sequence::from(front), Sequence::from(back)])
    }

    /// Splits the Sequence directly before the first element which satisfies `pred`, so that
    /// element starts the second row. If no element matches, everything is in the first row.
    pub fn split_before<F: FnMut(&T) -> bool>(&self, pred: F) -> Grid<T> {
        match self.find_index(pred) {
            Some(i) => self.split_at(i as isize),
            None => self.split_at(self.len() as isize),
        }
    }

    /// Splits the Sequence directly after the first element which satisfies `pred`, so that
    /// element ends the first row. If no element matches, everything is in the first row.
    pub fn split_after<F: FnMut(&T) -> bool>(&self, pred: F) -> Grid<T> {
        match self.find_index(pred) {
            Some(i) => self.split_at(i as isize + 1),
            None => self.split_at(self.len() as isize),
        }
    }

    /// Returns a new Sequence of the first `n` elements. Negative `n` takes nothing and `n` past
    /// the end takes everything.
    pub fn take(&self, n: isize) -> Sequence<T> {
        Sequence::from(&self.inner[..self.clamp_index(n)])
    }

    /// Returns a new Sequence of the longest prefix whose elements all satisfy `pred`.
    pub fn take_while<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Sequence<T> {
        self.inner.iter().take_while(|item| pred(item)).cloned().collect()
    }

    /// Returns a new Sequence without the first `n` elements. Negative `n` skips nothing and `n`
    /// past the end skips everything.
    pub fn skip(&self, n: isize) -> Sequence<T> {
        Sequence::from(&self.inner[self.clamp_index(n)..])
    }

    /// Returns a new Sequence without the longest prefix whose elements all satisfy `pred`.
    pub fn skip_while<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Sequence<T> {
        self.inner.iter().skip_while(|item| pred(item)).cloned().collect()
    }
}
