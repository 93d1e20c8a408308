//! Success or a single typed failure, short-circuiting.
//!
//! `Either<E, T>` holds a `Right(T)` on the happy path or a `Left(E)` that
//! explains what went wrong. It is *right-biased*: `map`, `flat_map`, `ap`
//! and `zip` operate on `Right` and pass a `Left` through untouched.
//!
//! # Short-circuiting
//!
//! Once a pipeline is `Left`, no later step runs and no later error is ever
//! computed. In particular, when both sides of `ap` (or `zip`, `map2`, ...)
//! are `Left`, the **receiver's** error wins and the argument's is dropped:
//!
//! ```rust
//! use tidewater::Either;
//!
//! let f: Either<&str, fn(i32) -> i32> = Either::left("e1");
//! let arg: Either<&str, i32> = Either::left("e2");
//! assert_eq!(f.ap(arg), Either::left("e1"));
//! ```
//!
//! This is the single behavioural difference from
//! [`Validation`](crate::Validation), which concatenates both errors instead.
//!
//! # Examples
//!
//! ```rust
//! use tidewater::Either;
//!
//! fn divide(x: i32) -> Either<&'static str, i32> {
//!     if x == 0 {
//!         Either::left("div0")
//!     } else {
//!         Either::right(100 / x)
//!     }
//! }
//!
//! assert_eq!(Either::right(2).flat_map(divide), Either::right(50));
//! assert_eq!(Either::right(0).flat_map(divide), Either::left("div0"));
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{Maybe, Thrown, Validation};

/// A value that is either a failure `Left(E)` or a success `Right(T)`.
///
/// # Example
///
/// ```rust
/// use tidewater::Either;
///
/// let parsed: Either<String, u16> = Either::from_result("8080".parse::<u16>())
///     .map_left(|e| e.to_string());
///
/// let description = parsed.fold(
///     |err| format!("bad port: {}", err),
///     |port| format!("listening on {}", port),
/// );
/// assert_eq!(description, "listening on 8080");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<E, T> {
    /// The failure variant
    Left(E),
    /// The success variant
    Right(T),
}

impl<E, T> Either<E, T> {
    // ========== Constructors ==========

    /// Create a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("boom");
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(error: E) -> Self {
        Either::Left(error)
    }

    /// Create a success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: T) -> Self {
        Either::Right(value)
    }

    /// Turn a `Maybe` into an `Either`, using `on_absent` for the error.
    ///
    /// `on_absent` is only called when the value is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Either, Maybe};
    ///
    /// let found = Either::from_maybe(Maybe::some(7), || "not found");
    /// assert_eq!(found, Either::right(7));
    ///
    /// let missing = Either::from_maybe(Maybe::<i32>::none(), || "not found");
    /// assert_eq!(missing, Either::left("not found"));
    /// ```
    #[inline]
    pub fn from_maybe<F>(value: Maybe<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E,
    {
        value.to_either(on_absent)
    }

    /// Create from a `Result` (`Ok` becomes `Right`, `Err` becomes `Left`).
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }

    /// Run `f`, turning an `Err` or a panic into `Left(on_throw(..))`.
    ///
    /// This is the only constructor that catches anything: a returned
    /// `Err(x)` arrives as [`Thrown::Rejected`], a panic inside `f` as
    /// [`Thrown::Panicked`]. Panics in other combinators' closures are never
    /// caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Either, Thrown};
    ///
    /// let ok: Either<String, i32> =
    ///     Either::try_catch(|| "12".parse::<i32>(), |t| t.to_string());
    /// assert_eq!(ok, Either::right(12));
    ///
    /// let panicked: Either<String, i32> = Either::try_catch(
    ///     || -> Result<i32, std::num::ParseIntError> { panic!("corrupt header") },
    ///     |t| match t {
    ///         Thrown::Panicked(msg) => msg,
    ///         Thrown::Rejected(e) => e.to_string(),
    ///     },
    /// );
    /// assert_eq!(panicked, Either::left("corrupt header".to_string()));
    /// ```
    pub fn try_catch<X, F, H>(f: F, on_throw: H) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        H: FnOnce(Thrown<X>) -> E,
    {
        let thrown = match catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => return Either::Right(value),
            Ok(Err(rejection)) => Thrown::Rejected(rejection),
            Err(payload) => Thrown::from_panic(payload),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(panicked = thrown.is_panic(), "try_catch converted a failure into Left");
        Either::Left(on_throw(thrown))
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Convert to `Either<&E, &T>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&E, &T> {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(v) => Either::Right(v),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map(|x| x * 2), Either::right(42));
    ///
    /// let e: Either<&str, i32> = Either::left("error");
    /// assert_eq!(e.map(|x| x * 2), Either::left("error"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(v) => Either::Right(f(v)),
        }
    }

    /// Transform the failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(404);
    /// assert_eq!(e.map_left(|code| format!("HTTP {}", code)), Either::left("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_left<E2, F>(self, f: F) -> Either<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Either::Left(e) => Either::Left(f(e)),
            Either::Right(v) => Either::Right(v),
        }
    }

    /// Transform both variants.
    #[inline]
    pub fn bimap<E2, U, F, G>(self, on_left: F, on_right: G) -> Either<E2, U>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(T) -> U,
    {
        match self {
            Either::Left(e) => Either::Left(on_left(e)),
            Either::Right(v) => Either::Right(on_right(v)),
        }
    }

    /// Chain a computation that may fail.
    ///
    /// On `Left`, `f` is never called and the original error is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(21);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.flat_map(|x| Either::right(x * 2)), Either::right(42));
    /// assert_eq!(left.flat_map(|x| Either::right(x * 2)), Either::left("error"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(v) => f(v),
        }
    }

    /// Pair two successes; the first `Left` (receiver first) wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let a: Either<&str, i32> = Either::right(1);
    /// assert_eq!(a.zip(Either::right("x")), Either::right((1, "x")));
    ///
    /// let a: Either<&str, i32> = Either::left("e1");
    /// assert_eq!(a.zip(Either::<&str, i32>::left("e2")), Either::left("e1"));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Either<E, U>) -> Either<E, (T, U)> {
        match (self, other) {
            (Either::Right(a), Either::Right(b)) => Either::Right((a, b)),
            (Either::Left(e), _) => Either::Left(e),
            (Either::Right(_), Either::Left(e)) => Either::Left(e),
        }
    }

    /// Exchange the two sides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<T, E> {
        match self {
            Either::Left(e) => Either::Right(e),
            Either::Right(v) => Either::Left(v),
        }
    }

    /// Fail a success that does not satisfy `predicate`.
    ///
    /// A `Left` is returned unchanged and `predicate` is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let age: Either<&str, u8> = Either::right(15);
    /// assert_eq!(age.filter_or_else(|a| *a >= 18, || "too young"), Either::left("too young"));
    /// ```
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_left: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Either::Right(v) if predicate(&v) => Either::Right(v),
            Either::Right(_) => Either::Left(on_left()),
            Either::Left(e) => Either::Left(e),
        }
    }

    /// Recover from a failure with another `Either`.
    ///
    /// A `Right` is returned unchanged and `f` is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(1);
    /// assert_eq!(e.or_else(|_| Either::<i32, &str>::right("recovered")), Either::right("recovered"));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Either<E2, T>
    where
        F: FnOnce(E) -> Either<E2, T>,
    {
        match self {
            Either::Left(e) => f(e),
            Either::Right(v) => Either::Right(v),
        }
    }

    // ========== Side effects ==========

    /// Run `f` on the success value, returning `self` unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Either::Right(v) = &self {
            f(v);
        }
        self
    }

    /// Run `f` on the failure value, returning `self` unchanged.
    #[inline]
    pub fn tap_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Either::Left(e) = &self {
            f(e);
        }
        self
    }

    // ========== Terminals ==========

    /// Collapse both variants into one value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s.to_string()), "42");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_left: F, on_right: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Either::Left(e) => on_left(e),
            Either::Right(v) => on_right(v),
        }
    }

    /// The success value, or one computed from the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let e: Either<&str, usize> = Either::left("oops");
    /// assert_eq!(e.get_or_else(|err| err.len()), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Either::Left(e) => f(e),
            Either::Right(v) => v,
        }
    }

    /// Drop the failure, keeping a present success.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Either::Left(_) => Maybe::Absent,
            Either::Right(v) => Maybe::Present(v),
        }
    }

    /// Convert to `Result` (`Right` becomes `Ok`, `Left` becomes `Err`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// assert_eq!(right.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Either::Left(e) => Err(e),
            Either::Right(v) => Ok(v),
        }
    }

    /// Convert to a `Validation` holding at most this one error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Either, Validation};
    ///
    /// let left: Either<&str, i32> = Either::left("error");
    /// assert_eq!(left.into_validation(), Validation::invalid("error"));
    /// ```
    #[inline]
    pub fn into_validation(self) -> Validation<E, T> {
        Validation::from_either(self)
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().to_maybe().into_iter()
    }

    // ========== Multi-value helpers ==========

    /// Combine two successes with `f`; the first `Left` in argument order wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let sum = Either::map2(Either::<&str, _>::right(1), Either::right(2), |a, b| a + b);
    /// assert_eq!(sum, Either::right(3));
    ///
    /// let failed: Either<&str, i32> =
    ///     Either::map2(Either::left("e1"), Either::<&str, i32>::left("e2"), |a: i32, b| a + b);
    /// assert_eq!(failed, Either::left("e1"));
    /// ```
    pub fn map2<A, B, F>(a: Either<E, A>, b: Either<E, B>, f: F) -> Either<E, T>
    where
        F: FnOnce(A, B) -> T,
    {
        a.zip(b).map(|(a, b)| f(a, b))
    }

    /// Combine three successes with `f`; the first `Left` in argument order wins.
    pub fn map3<A, B, C, F>(a: Either<E, A>, b: Either<E, B>, c: Either<E, C>, f: F) -> Either<E, T>
    where
        F: FnOnce(A, B, C) -> T,
    {
        a.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
    }

    /// Collect a sequence of `Either` into an `Either` of a `Vec`.
    ///
    /// Stops at the first `Left`; later elements are never inspected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let all_ok: Vec<Either<&str, i32>> = vec![Either::right(1), Either::right(2)];
    /// assert_eq!(Either::sequence(all_ok), Either::right(vec![1, 2]));
    ///
    /// let mixed = vec![Either::right(1), Either::left("e1"), Either::left("e2")];
    /// assert_eq!(Either::sequence(mixed), Either::left("e1"));
    /// ```
    pub fn sequence<I>(items: I) -> Either<E, Vec<T>>
    where
        I: IntoIterator<Item = Either<E, T>>,
    {
        Either::from_result(items.into_iter().map(Either::into_result).collect())
    }

    /// Apply `f` to every item and sequence the results.
    ///
    /// `f` is not called again after the first `Left`.
    pub fn traverse<A, I, F>(items: I, f: F) -> Either<E, Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Either<E, T>,
    {
        Either::sequence(items.into_iter().map(f))
    }
}

impl<E, F> Either<E, F> {
    /// Apply a wrapped function to a wrapped argument.
    ///
    /// `Left.ap(_)` keeps the receiver's error, `Right(f).ap(Left)` returns
    /// the argument's error, and `f` only runs when both sides are `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let f: Either<&str, _> = Either::right(|n: i32| n * 10);
    /// assert_eq!(f.ap(Either::right(4)), Either::right(40));
    /// assert_eq!(f.ap(Either::<&str, i32>::left("bad arg")), Either::left("bad arg"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, arg: Either<E, A>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Either::Right(f), Either::Right(a)) => Either::Right(f(a)),
            (Either::Left(e), _) => Either::Left(e),
            (Either::Right(_), Either::Left(e)) => Either::Left(e),
        }
    }
}

impl<E, T> Either<E, Either<E, T>> {
    /// Flatten a nested Either.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    /// assert_eq!(nested.flatten(), Either::left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<E, T> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        Either::from_result(result)
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.into_result()
    }
}

impl<E, T> IntoIterator for Either<E, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_option().into_iter()
    }
}

// ========== Collection Utilities ==========

/// Split an iterator of `Either` into failures and successes, keeping order.
///
/// # Example
///
/// ```rust
/// use tidewater::either::{partition, Either};
///
/// let items = vec![Either::left("e1"), Either::right(1), Either::left("e2"), Either::right(2)];
///
/// let (errors, values) = partition(items);
/// assert_eq!(errors, vec!["e1", "e2"]);
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn partition<E, T, I>(iter: I) -> (Vec<E>, Vec<T>)
where
    I: IntoIterator<Item = Either<E, T>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(e) => lefts.push(e),
            Either::Right(v) => rights.push(v),
        }
    }

    (lefts, rights)
}

/// Every `Left` value of an iterator, in order.
pub fn lefts<E, T, I>(iter: I) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = Either<E, T>>,
{
    iter.into_iter().filter_map(|e| e.swap().to_maybe().into_option())
}

/// Every `Right` value of an iterator, in order.
pub fn rights<E, T, I>(iter: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Either<E, T>>,
{
    iter.into_iter().filter_map(|e| e.to_maybe().into_option())
}
