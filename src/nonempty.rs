//! Non-empty vector, the error payload of an invalid `Validation`
//!
//! An `Invalid` validation always explains itself with at least one error.
//! `NonEmptyVec<T>` makes that a type-level fact: there is no way to build an
//! empty one, and concatenation (its only way to grow) preserves insertion
//! order.
//!
//! # Examples
//!
//! ```
//! use tidewater::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("e1", vec!["e2", "e3"]);
//! assert_eq!(errors.head(), &"e1");
//! assert_eq!(errors.tail(), &["e2", "e3"]);
//! assert_eq!(errors.len(), 3);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// # Example
///
/// ```
/// use tidewater::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(nev.last(), &3);
/// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a one-element vector.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("only");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to build a non-empty vector from a `Vec`; `None` when it is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut items = vec.into_iter();
        let head = items.next()?;
        Some(Self::new(head, items.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Apply `f` to every element, preserving order.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::NonEmptyVec;
    ///
    /// let codes = NonEmptyVec::new(404, vec![500]).map(|c| format!("HTTP {c}"));
    /// assert_eq!(codes.into_vec(), vec!["HTTP 404", "HTTP 500"]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain `Vec`, keeping order.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

// Concatenation: receiver's elements, then the argument's.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            n => &self.tail[n - 1],
        }
    }
}
