use std::cmp::Ordering;

use super::{Sequence, Signal};

impl<T> Sequence<T> {
    /// Replaces every element in place with the result of `f`.
    ///
    /// Use [`collect`](Sequence::collect) when the result should have a different element type.
    pub fn map<F: FnMut(&T) -> T>(&mut self, mut f: F) {
        for item in self.inner.iter_mut() {
            *item = f(item);
        }
    }

    /// Creates a new Sequence by applying `f` to every element.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// assert_eq!(seq.collect(|i| i.to_string()), Sequence::from(["1", "2", "3"].map(String::from)));
    /// ```
    pub fn collect<U, F: FnMut(&T) -> U>(&self, f: F) -> Sequence<U> {
        self.inner.iter().map(f).collect()
    }

    /// Creates a new Sequence by applying `f` to every element and concatenating everything it
    /// produces, in order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3]);
    /// assert_eq!(seq.expand(|&i| vec![i; i]), Sequence::from([1, 2, 2, 3, 3, 3]));
    /// ```
    pub fn expand<U, I, F>(&self, f: F) -> Sequence<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.inner.iter().flat_map(f).collect()
    }

    /// Retains only the elements which satisfy `pred`, preserving their order.
    pub fn filter<F: FnMut(&T) -> bool>(&mut self, pred: F) {
        self.inner.retain(pred);
    }

    /// Removes every element which satisfies `pred`, preserving the order of the rest.
    pub fn remove<F: FnMut(&T) -> bool>(&mut self, mut pred: F) {
        self.inner.retain(|item| !pred(item));
    }

    /// Folds every element into an accumulator, starting with `init`.
    pub fn fold<A, F: FnMut(A, &T) -> A>(&self, init: A, f: F) -> A {
        self.inner.iter().fold(init, f)
    }

    /// Folds every element into an accumulator, starting with `init`, additionally passing the
    /// index of each element to `f`.
    pub fn fold_i<A, F: FnMut(usize, A, &T) -> A>(&self, init: A, mut f: F) -> A {
        self.inner
            .iter()
            .enumerate()
            .fold(init, |acc, (i, item)| f(i, acc, item))
    }

    /// Calls `f` on each element from front to back, stopping after the first [`Signal::Stop`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::{Sequence, Signal};
    /// let mut seen = Vec::new();
    /// Sequence::from([1, 2, 3, 4]).for_each(|&i| {
    ///     seen.push(i);
    ///     Signal::from(i < 2)
    /// });
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn for_each<F: FnMut(&T) -> Signal>(&self, mut f: F) {
        for item in self.inner.iter() {
            if f(item).is_stop() {
                break;
            }
        }
    }

    /// Calls `f` on each element from back to front, stopping after the first [`Signal::Stop`].
    pub fn for_each_r<F: FnMut(&T) -> Signal>(&self, mut f: F) {
        for item in self.inner.iter().rev() {
            if f(item).is_stop() {
                break;
            }
        }
    }

    /// Sorts the Sequence in place using `less` as a strict "less than" comparison. The sort is
    /// stable, so elements which are neither less nor greater than each other keep their relative
    /// order. A non-strict `less` such as `<=` is tolerated: elements which are each "less" than the
    /// other are treated as equal.
    ///
    /// # Panics
    /// May panic if `less` doesn't describe a consistent ordering, for example if it isn't
    /// transitive.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let mut seq = Sequence::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    /// seq.sort(|a, b| a.0 < b.0);
    /// assert_eq!(seq, Sequence::from([(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));
    /// ```
    pub fn sort<F: FnMut(&T, &T) -> bool>(&mut self, mut less: F) {
        self.inner.sort_by(|a, b| match (less(a, b), less(b, a)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        });
    }
}

impl<T: Clone> Sequence<T> {
    /// Reduces the Sequence to a single value, using the head as the initial accumulator. Returns
    /// [`None`] if the Sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// assert_eq!(Sequence::from([1, 2, 3, 4]).reduce(|acc, i| acc * i), Some(24));
    /// assert_eq!(Sequence::<u8>::new().reduce(|acc, i| acc + i), None);
    /// ```
    pub fn reduce<F: FnMut(T, &T) -> T>(&self, f: F) -> Option<T> {
        let (head, rest) = self.inner.split_first()?;
        Some(rest.iter().fold(head.clone(), f))
    }

    /// Returns a new Sequence with the elements in reverse order.
    pub fn reverse(&self) -> Sequence<T> {
        self.inner.iter().rev().cloned().collect()
    }
}
