use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::{slice, vec};

/// An ordered, resizable collection of elements of one type, and the home of every operation in
/// this crate.
///
/// There is no distinction between an absent and an empty Sequence. Every operation treats an
/// empty Sequence as "no elements" and produces an empty Sequence from one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `m`: The number of items in the second Sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` / `pop` / `enqueue` | `O(1)`* |
/// | `dequeue` | `O(n)` |
/// | `insert_at` / `remove_at` | `O(n)` |
/// | `map` / `filter` / `remove` / `fold` | `O(n)` |
/// | `distinct` | `O(n²)` |
/// | `difference` / `intersection` / `union` / `is_subset` | `O(n·m)` |
/// | `group` / `partition` | `O(n)`** |
/// | `group_by_trait` | `O(n²)` |
/// | `permute` | `O(n·n!)` |
/// | `window_*` | `O(n·w)` |
///
/// \* Amortized, the backing storage grows geometrically.
///
/// \** Expected, bucket lookup is hash based.
pub struct Sequence<T> {
    pub(crate) inner: Vec<T>,
}

pub type IntoIter<T> = vec::IntoIter<T>;

impl<T> Sequence<T> {
    /// Creates a new, empty Sequence. No memory is allocated until an element is added.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> Sequence<T> {
        Sequence { inner: Vec::new() }
    }

    /// Creates a new, empty Sequence with room for at least `cap` elements.
    pub fn with_cap(cap: usize) -> Sequence<T> {
        Sequence {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the Sequence.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Sequence contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let mut seq = Sequence::new();
    /// assert!(seq.is_empty());
    /// seq.push(1);
    /// assert!(!seq.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the Sequence can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Consumes the Sequence, returning the underlying [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    /// Pushes `item` onto the end of the Sequence.
    pub fn push(&mut self, item: T) {
        self.inner.push(item);
    }

    /// Pops the last element off the end of the Sequence, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let mut seq = Sequence::from([1, 2]);
    /// assert_eq!(seq.pop(), Some(2));
    /// assert_eq!(seq.pop(), Some(1));
    /// assert_eq!(seq.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Adds `item` to the tail of the Sequence when treating it as a queue. The head of the queue
    /// is index 0.
    pub fn enqueue(&mut self, item: T) {
        self.inner.push(item);
    }

    /// Removes and returns the element at the head (index 0) of the Sequence, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::sequence::Sequence;
    /// let mut seq = Sequence::new();
    /// seq.enqueue('a');
    /// seq.enqueue('b');
    /// assert_eq!(seq.dequeue(), Some('a'));
    /// assert_eq!(seq.dequeue(), Some('b'));
    /// assert_eq!(seq.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.remove(0))
        }
    }

    /// Appends every item produced by `items` to the end of the Sequence, in order.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.inner.extend(items);
    }

    /// Removes all elements from the Sequence.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence { inner: value }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence {
            inner: Vec::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        Sequence {
            inner: value.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.inner
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("contents", &&**self)
            .field("len", &self.len())
            .finish()
    }
}

/// An informational rendering of the Sequence as an array, using each element's [`Display`]
/// implementation. This is not intended as a stable serialization format.
///
/// # Examples
/// ```
/// # use sequence_lib::sequence::{Grid, Sequence};
/// assert_eq!(Sequence::from([1, 2, 3]).to_string(), "[1, 2, 3]");
/// let grid: Grid<u8> = Grid::from_rows([Sequence::from([1, 2]), Sequence::from([3])]);
/// assert_eq!(grid.to_string(), "[[1, 2], [3]]");
/// ```
impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.inner.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
