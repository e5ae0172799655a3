use ibig::UBig;

use super::{Grid, NotPermutable, Sequence};
use crate::util::result::ResultExtension;

impl<T> Sequence<T> {
    /// Returns the number of orderings of the Sequence, `len!`, without any risk of overflow.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// # use ibig::UBig;
    /// assert_eq!(Sequence::from(['a', 'b', 'c', 'd']).permutations(), UBig::from(24_u8));
    /// assert_eq!(Sequence::<u8>::new().permutations(), UBig::from(1_u8));
    /// ```
    pub fn permutations(&self) -> UBig {
        (1..=self.len()).fold(UBig::from(1_u8), |acc, k| acc * UBig::from(k))
    }

    /// Returns true if the number of [`permutations`](Sequence::permutations) fits in an [`i64`],
    /// which is the case for Sequences of up to 20 elements.
    ///
    /// The product stops at the first factor that overflows, so this takes the same time for any
    /// Sequence longer than 20 elements.
    pub fn permutable(&self) -> bool {
        (1..=self.len())
            .try_fold(1_i64, |acc, k| i64::try_from(k).ok().and_then(|k| acc.checked_mul(k)))
            .is_some()
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns every ordering of the Sequence, generated by Heap's algorithm.
    ///
    /// Orderings are positional, so a Sequence containing equal elements produces equal rows. The
    /// result always has exactly [`permutations`](Sequence::permutations) rows, including the
    /// single empty row for an empty Sequence.
    ///
    /// # Errors
    /// Returns [`NotPermutable`] without doing any work if the Sequence isn't
    /// [`permutable`](Sequence::permutable).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let rows = Sequence::from([1, 2, 3]).try_permute().unwrap();
    /// assert_eq!(rows.len(), 6);
    /// assert_eq!(*rows[0], [1, 2, 3]);
    ///
    /// assert!(Sequence::from_iter(0..21).try_permute().is_err());
    /// ```
    pub fn try_permute(&self) -> Result<Grid<T>, NotPermutable> {
        if !self.permutable() {
            return Err(NotPermutable { len: self.len() });
        }

        let mut items = self.inner.clone();
        let n = items.len();
        let mut rows = Grid::new();
        rows.push(Sequence::from(items.clone()));

        // Iterative form of Heap's algorithm, where counters[i] tracks the swaps made at depth i.
        let mut counters = vec![0_usize; n];
        let mut i = 1;
        while i < n {
            if counters[i] < i {
                if i % 2 == 0 {
                    items.swap(0, i);
                } else {
                    items.swap(counters[i], i);
                }
                rows.push(Sequence::from(items.clone()));
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }

        Ok(rows)
    }

    /// Returns every ordering of the Sequence. See [`try_permute`](Sequence::try_permute).
    ///
    /// # Panics
    /// Panics if the Sequence isn't [`permutable`](Sequence::permutable).
    #[track_caller]
    pub fn permute(&self) -> Grid<T> {
        self.try_permute().throw()
    }
}
