use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{Grid, Sequence};

impl<T: Clone> Sequence<T> {
    /// Buckets the elements of the Sequence by the key produced by `key`, returning one row per
    /// distinct key. Within a row, elements keep their original order.
    ///
    /// The order of the rows is unspecified and may differ between runs. Buckets are kept in a
    /// randomly seeded hash map and emitted in its iteration order. Sort the result if a stable
    /// order is needed.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4, 5]);
    /// let mut groups = seq.group(|i| i % 2);
    /// groups.sort(|a, b| a[0] < b[0]);
    /// assert_eq!(*groups[0], [1, 3, 5]);
    /// assert_eq!(*groups[1], [2, 4]);
    /// ```
    pub fn group<K, F>(&self, mut key: F) -> Grid<T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        self.group_i(|_, item| key(item))
    }

    /// Behaves like [`group`](Sequence::group), additionally passing the index of each element to
    /// `key`. Row order is likewise unspecified.
    pub fn group_i<K, F>(&self, mut key: F) -> Grid<T>
    where
        K: Hash + Eq,
        F: FnMut(usize, &T) -> K,
    {
        let mut buckets: HashMap<K, Sequence<T>> = HashMap::new();

        for (i, item) in self.inner.iter().enumerate() {
            buckets.entry(key(i, item)).or_default().push(item.clone());
        }

        buckets.into_values().collect()
    }

    /// Splits the Sequence into the elements which satisfy `pred` and those which don't. This is
    /// [`group`](Sequence::group) keyed on a boolean, so there is no row for an empty side and the
    /// order of the (at most two) rows is unspecified.
    pub fn partition<F: FnMut(&T) -> bool>(&self, pred: F) -> Grid<T> {
        self.group(pred)
    }

    /// Groups elements which share a trait according to `shares`, where an element may belong to
    /// more than one group.
    ///
    /// Each element in turn forms a candidate group of every element `e` for which
    /// `shares(candidate, e)` holds, in input order. The candidate is dropped if it is a subset of
    /// a group that has already been established. Otherwise it is established and any previously
    /// established groups which are now subsets of it are pruned. Membership is positional, so
    /// equal elements at different indices are distinct members. Groups are returned in the order
    /// they were established.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq = Sequence::from([1, 2, 3, 4, 10]);
    /// let groups = seq.group_by_trait(|a: &i32, b: &i32| (a - b).abs() <= 1);
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(*groups[0], [1, 2, 3]);
    /// assert_eq!(*groups[1], [2, 3, 4]);
    /// assert_eq!(*groups[2], [10]);
    /// ```
    pub fn group_by_trait<F: FnMut(&T, &T) -> bool>(&self, mut shares: F) -> Grid<T> {
        let mut established: Vec<Vec<usize>> = Vec::new();

        for candidate in self.inner.iter() {
            let group: Vec<usize> = self
                .inner
                .iter()
                .enumerate()
                .filter(|(_, other)| shares(candidate, other))
                .map(|(i, _)| i)
                .collect();

            if established.iter().any(|existing| is_index_subset(&group, existing)) {
                continue;
            }

            established.retain(|existing| !is_index_subset(existing, &group));
            established.push(group);
        }

        established
            .into_iter()
            .map(|group| group.into_iter().map(|i| self.inner[i].clone()).collect())
            .collect()
    }
}

/// Returns true if every index in `a` is also in `b`. Both are sorted, as they are built by
/// enumerating the Sequence.
fn is_index_subset(a: &[usize], b: &[usize]) -> bool {
    a.iter().all(|i| b.binary_search(i).is_ok())
}
