//! A [`List`] is an insertion-ordered, growable sequence with index-based, stack/queue-style and set-like operations.
//! Every fallible operation returns a [`Result`] instead of panicking, and a failed call leaves the list untouched.

use crate::error::{ListError, Result};
use std::fmt::{self, Debug, Display, Write};

/// An ordered collection of elements of type `T`.
/// Duplicates are kept, and order is exactly the order of insertion and later mutation.
///
/// # Examples
/// ```
/// use linguine::List;
/// let mut list = List::new();
/// list.add(1);
/// list.add_all(&[2, 3]);
/// assert_eq!(list.get(0), Ok(&1));
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
///
/// # Naming
/// [`pop`](List::pop) removes from the *front* and [`dequeue`](List::dequeue) removes from the *back*.
/// This is the inverse of the usual convention and is kept as-is for compatibility with existing callers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T: Debug> Debug for List<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T> List<T> {
    /// Creates a new, empty `List`.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "[]");
    /// ```
    #[inline]
    pub fn new() -> Self {
        List { items: Vec::new() }
    }

    /// Creates a new, empty `List` that can hold at least `cap` elements without reallocating.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        List {
            items: Vec::with_capacity(cap),
        }
    }

    fn check_index(&self, op: &'static str, index: usize) -> Result<()> {
        let len = self.items.len();
        if index < len {
            Ok(())
        } else {
            log::debug!("{op}: index {index} out of bounds for list of length {len}");
            Err(ListError::IndexOutOfBounds { index, len })
        }
    }

    fn empty(op: &'static str) -> ListError {
        log::debug!("{op}: list is empty");
        ListError::EmptyCollection
    }

    /// Appends an element to the end of the list.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let mut list = List::new();
    /// list.add(7);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.tail(), Ok(&7));
    /// ```
    #[inline]
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Examples
    /// ```
    /// # use linguine::{List, ListError};
    /// let list = List::from([10, 20]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index("get", index)?;
        Ok(&self.items[index])
    }

    /// Overwrites the element at `index`, dropping the old one.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index("set", index)?;
        self.items[index] = item;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element one place toward the front.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.as_slice(), &[1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index("remove", index)?;
        Ok(self.items.remove(index))
    }

    /// Exchanges the elements at `a` and `b`. Swapping an index with itself does nothing.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if either index is `>= self.len()`. Neither element is moved in that case.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index("swap", a)?;
        self.check_index("swap", b)?;
        self.items.swap(a, b);
        Ok(())
    }

    /// Returns the first element without removing it.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    pub fn head(&self) -> Result<&T> {
        self.items.first().ok_or_else(|| Self::empty("head"))
    }

    /// Returns the last element without removing it.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    pub fn tail(&self) -> Result<&T> {
        self.items.last().ok_or_else(|| Self::empty("tail"))
    }

    /// Removes and returns the **first** element. The remaining elements shift toward the front.
    ///
    /// Note that this is the front of the list, unlike [`Vec::pop`]. Use [`dequeue`](List::dequeue) to remove from the back.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use linguine::{List, ListError};
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.pop(), Ok(2));
    /// assert_eq!(list.pop(), Err(ListError::EmptyCollection));
    /// ```
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Self::empty("pop"));
        }
        Ok(self.items.remove(0))
    }

    /// Removes and returns the **last** element.
    ///
    /// Note that this is the back of the list. Use [`pop`](List::pop) to remove from the front.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.dequeue(), Ok(2));
    /// assert_eq!(list.as_slice(), &[1]);
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(|| Self::empty("dequeue"))
    }

    /// Removes all elements from the list.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reverses the order of the elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sorts the list in place so that it is non-decreasing under `less`, which must be a strict ordering.
    ///
    /// For each position `i`, every later element `j` is compared in turn and swapped into `i` whenever
    /// `less(&list[j], &list[i])` holds. This takes O(n²) comparisons and is **not** stable: elements that
    /// compare equal can end up in a different relative order. The exact tie-break order is relied upon,
    /// so large lists should be sorted elsewhere rather than through this method.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let mut list = List::from([3, 1, 5]);
    /// list.sort(|a, b| a < b);
    /// assert_eq!(list.as_slice(), &[1, 3, 5]);
    /// ```
    pub fn sort<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = self.items.len();
        log::trace!("sort: exchange-selection over {len} elements");
        for i in 0..len {
            for j in (i + 1)..len {
                if less(&self.items[j], &self.items[i]) {
                    self.items.swap(i, j);
                }
            }
        }
    }

    /// Returns the elements as a read-only slice, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> List<T> {
    /// Appends a copy of each element of `items`, in order.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let mut list = List::from([1]);
    /// list.add_all(&[2, 3]);
    /// list.add_all(&[]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn add_all(&mut self, items: &[T]) {
        self.items.extend_from_slice(items);
    }

    /// Appends a copy of every element of `other`, in `other`'s order. `other` is left unchanged.
    #[inline]
    pub fn append(&mut self, other: &List<T>) {
        self.items.extend_from_slice(&other.items);
    }

    /// Returns a new list holding this list's elements followed by `other`'s.
    ///
    /// Despite the name, nothing is deduplicated: this is a concatenation.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let a = List::from([1, 2, 3]);
    /// let b = List::from([3, 4, 5]);
    /// assert_eq!(a.union(&b).as_slice(), &[1, 2, 3, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &List<T>) -> List<T> {
        let mut union = List::with_capacity(self.len() + other.len());
        union.append(self);
        union.append(other);
        union
    }
}

impl<T: PartialEq> List<T> {
    /// Returns true if some element is equal to `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|x| x == item)
    }
}

impl<T: PartialEq + Clone> List<T> {
    /// Returns a new list holding each element of this list that `other` contains.
    /// Order and duplicate count come from `self`; `other` is only used for membership.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let a = List::from([1, 3, 2, 3]);
    /// let b = List::from([3, 4, 5, 3]);
    /// assert_eq!(a.intersection(&b).as_slice(), &[3, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &List<T>) -> List<T> {
        self.items
            .iter()
            .filter(|&item| other.contains(item))
            .cloned()
            .collect()
    }
}

impl<T: Display> List<T> {
    fn write_joined<W: Write>(&self, out: &mut W, separator: &str) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.write_str(separator)?;
            }
            write!(out, "{item}")?;
        }
        Ok(())
    }

    /// Renders every element joined by `separator`, without enclosing brackets.
    ///
    /// # Examples
    /// ```
    /// # use linguine::List;
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.to_string_with_separator("; "), "1; 2; 3");
    /// ```
    pub fn to_string_with_separator(&self, separator: &str) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_joined(&mut out, separator);
        out
    }
}

/// Renders as `[e0, e1, ...]`, or `[]` when empty.
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        self.write_joined(f, ", ")?;
        f.write_char(']')
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        List::new()
    }
}

impl<T> AsRef<[T]> for List<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        List { items }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        List {
            items: Vec::from(array),
        }
    }
}

impl<T> From<List<T>> for Vec<T> {
    #[inline]
    fn from(list: List<T>) -> Vec<T> {
        list.items
    }
}
