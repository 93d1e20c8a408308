//! Presence or absence of a value.
//!
//! `Maybe<T>` is the leaf of the family: it carries a value (`Present`) or
//! nothing at all (`Absent`). Absence is a unit failure, there is nothing to
//! report about *why*. Every combinator follows one rule: on `Absent`, no
//! caller-supplied function runs (apart from the single fallback of
//! `or_else`, `get_or_else` and `fold`).
//!
//! `Maybe` deliberately mirrors the shape of [`Either`](crate::Either) and
//! [`Validation`](crate::Validation) so pipelines read the same across all
//! three. Conversions to and from `std::option::Option` are free.
//!
//! # Examples
//!
//! ```rust
//! use tidewater::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .flat_map(|raw| Maybe::from_option(raw.parse::<u16>().ok()))
//!     .filter(|port| *port >= 1024)
//!     .get_or_else(|| 3000);
//! assert_eq!(port, 8080);
//!
//! let missing: Maybe<u16> = Maybe::none();
//! assert_eq!(missing.map(|p| p + 1).get_or_else(|| 3000), 3000);
//! ```

use crate::Either;

/// An optional value: `Present(T)` or `Absent`.
///
/// # Example
///
/// ```rust
/// use tidewater::Maybe;
///
/// let doubled = Maybe::some(5).map(|n| n * 2);
/// assert_eq!(doubled, Maybe::Present(10));
///
/// let label = doubled.fold(|| "nothing".to_string(), |n| format!("got {}", n));
/// assert_eq!(label, "got 10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value
    Absent,
    /// A value is present
    Present(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Wrap a value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Present(value)
    }

    /// The absent value.
    #[inline]
    pub fn none() -> Self {
        Maybe::Absent
    }

    /// Convert from a nullable host value (`std::option::Option`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// let env = std::collections::HashMap::from([("HOME", "/root")]);
    /// assert_eq!(Maybe::from_option(env.get("HOME").copied()), Maybe::some("/root"));
    /// assert_eq!(Maybe::from_option(env.get("SHELL").copied()), Maybe::none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Borrow the contents: `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    // ========== Transformations ==========

    /// Transform the present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).map(|n| n * 2), Maybe::some(10));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that may itself be absent.
    ///
    /// `f` decides the resulting variant. On `Absent`, `f` is never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).flat_map(half), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if `predicate` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).filter(|n| n % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(v) if predicate(&v) => Maybe::Present(v),
            _ => Maybe::Absent,
        }
    }

    /// Pair two present values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    /// assert_eq!(Maybe::some(1).zip(Maybe::<&str>::none()), Maybe::none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present((a, b)),
            _ => Maybe::Absent,
        }
    }

    /// Recover from absence with another `Maybe`.
    ///
    /// A present value is returned unchanged and `fallback` is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// let cached: Maybe<&str> = Maybe::none();
    /// assert_eq!(cached.or_else(|| Maybe::some("fresh")), Maybe::some("fresh"));
    /// assert_eq!(Maybe::some("hit").or_else(|| Maybe::some("fresh")), Maybe::some("hit"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => fallback(),
        }
    }

    // ========== Side effects ==========

    /// Run `f` on the present value, returning `self` unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Present(v) = &self {
            f(v);
        }
        self
    }

    /// Run `f` if absent, returning `self` unchanged.
    #[inline]
    pub fn tap_absent<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            f();
        }
        self
    }

    // ========== Terminals ==========

    /// Collapse both variants into one value (total, no default case).
    #[inline]
    pub fn fold<R, A, P>(self, on_absent: A, on_present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Maybe::Present(v) => on_present(v),
            Maybe::Absent => on_absent(),
        }
    }

    /// The present value, or the result of `fallback`.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => fallback(),
        }
    }

    /// A one-element vector when present, an empty one when absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).into_vec(), vec![3]);
    /// assert!(Maybe::<i32>::none().into_vec().is_empty());
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Maybe::Present(v) => vec![v],
            Maybe::Absent => Vec::new(),
        }
    }

    /// Convert to a nullable host value (`std::option::Option`).
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Turn absence into a typed failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Either, Maybe};
    ///
    /// let user: Maybe<&str> = Maybe::none();
    /// assert_eq!(user.to_either(|| "user not found"), Either::left("user not found"));
    /// ```
    #[inline]
    pub fn to_either<E, F>(self, on_absent: F) -> Either<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Present(v) => Either::Right(v),
            Maybe::Absent => Either::Left(on_absent()),
        }
    }

    // ========== Multi-value helpers ==========

    /// Combine two values with `f` when both are present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::map2(Maybe::some(2), Maybe::some(3), |a, b| a * b), Maybe::some(6));
    /// assert_eq!(Maybe::map2(Maybe::some(2), Maybe::<i32>::none(), |a, b| a * b), Maybe::none());
    /// ```
    pub fn map2<A, B, F>(a: Maybe<A>, b: Maybe<B>, f: F) -> Maybe<T>
    where
        F: FnOnce(A, B) -> T,
    {
        a.zip(b).map(|(a, b)| f(a, b))
    }

    /// Combine three values with `f` when all are present.
    pub fn map3<A, B, C, F>(a: Maybe<A>, b: Maybe<B>, c: Maybe<C>, f: F) -> Maybe<T>
    where
        F: FnOnce(A, B, C) -> T,
    {
        a.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
    }

    /// Turn a sequence of `Maybe` into a `Maybe` of a `Vec`.
    ///
    /// Stops at the first `Absent`; later elements are not inspected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// assert_eq!(Maybe::sequence(vec![Maybe::some(1), Maybe::some(2)]), Maybe::some(vec![1, 2]));
    /// assert_eq!(Maybe::sequence(vec![Maybe::some(1), Maybe::none()]), Maybe::none());
    /// ```
    pub fn sequence<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        Maybe::from_option(items.into_iter().map(Maybe::into_option).collect())
    }

    /// Apply `f` to every item and sequence the results.
    ///
    /// `f` is not called again after the first `Absent`.
    pub fn traverse<A, I, F>(items: I, f: F) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Maybe<T>,
    {
        Maybe::sequence(items.into_iter().map(f))
    }
}

impl<F> Maybe<F> {
    /// Apply a present function to a present argument.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Maybe;
    ///
    /// let add_one = Maybe::some(|n: i32| n + 1);
    /// assert_eq!(add_one.ap(Maybe::some(41)), Maybe::some(42));
    ///
    /// let missing_fn: Maybe<fn(i32) -> i32> = Maybe::none();
    /// assert_eq!(missing_fn.ap(Maybe::some(41)), Maybe::none());
    /// ```
    #[inline]
    pub fn ap<A, B>(self, arg: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Maybe::Present(f), Maybe::Present(a)) => Maybe::Present(f(a)),
            _ => Maybe::Absent,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::Absent`.
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
