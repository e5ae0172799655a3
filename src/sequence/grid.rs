use super::Sequence;

/// A two-dimensional Sequence: a Sequence whose elements are themselves Sequences.
///
/// Grids are what `group`, `partition`, `split_at`, `unzip` and `permute` produce. Since every
/// operation on [`Sequence`] is generic over the element type, a Grid supports all of them too,
/// treating each row as a single element. The methods here are only those which need to look
/// inside the rows.
pub type Grid<T> = Sequence<Sequence<T>>;

impl<T> Sequence<Sequence<T>> {
    /// Creates a Grid from any collection of rows.
    pub fn from_rows<I: IntoIterator<Item = Sequence<T>>>(rows: I) -> Grid<T> {
        rows.into_iter().collect()
    }

    /// Concatenates every row into a single Sequence, in order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4, 5]);
    /// assert_eq!(seq.split_at(2).flatten(), seq);
    /// ```
    pub fn flatten(self) -> Sequence<T> {
        self.into_iter().flatten().collect()
    }

    /// Returns the length of each row.
    pub fn lengths(&self) -> Sequence<usize> {
        self.inner.iter().map(|row| row.len()).collect()
    }
}
