//! Associative combination, the engine behind error accumulation
//!
//! `Validation` never decides on its own how two failures merge: it asks the
//! error collection to `combine` with the next one. Every `combine` must be
//! associative so that accumulating `a`, `b` and `c` yields the same errors in
//! the same order regardless of how the applicative steps were grouped:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tidewater::{NonEmptyVec, Semigroup};
//!
//! let first = NonEmptyVec::singleton("name is required");
//! let second = NonEmptyVec::new("age must be positive", vec!["email is invalid"]);
//!
//! let all = first.combine(second);
//! assert_eq!(
//!     all.into_vec(),
//!     vec!["name is required", "age must be positive", "email is invalid"]
//! );
//! ```

/// A type with an associative, order-preserving binary operation.
///
/// `combine` consumes both operands; the receiver's content always comes
/// first in the result.
pub trait Semigroup: Sized {
    /// Combine `self` followed by `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
