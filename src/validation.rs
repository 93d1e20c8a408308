//! Success or accumulated failures.
//!
//! `Validation<E, T>` has the same surface as [`Either`], with one change:
//! combining two independent validations (`ap`, `zip`, `map2`, `map3`,
//! `sequence`, `all`) never stops at the first failure. When both sides are
//! invalid, the result carries the receiver's errors followed by the
//! argument's, in that order. Nothing is dropped.
//!
//! An `Invalid` holds a [`NonEmptyVec<E>`], so "failed without a reason" is
//! unrepresentable. `Validation::invalid(e)` starts with exactly one error.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use tidewater::Validation;
//!
//! let v1 = Validation::<_, i32>::invalid("e1");
//! let v2 = Validation::<_, i32>::invalid("e2");
//! let result = Validation::map2(v1, v2, |a, b| a + b);
//!
//! assert_eq!(result.into_result().map_err(|e| e.into_vec()), Err(vec!["e1", "e2"]));
//! ```
//!
//! ## Validating a form
//!
//! ```
//! use tidewater::Validation;
//!
//! fn validate_email(email: &str) -> Validation<String, String> {
//!     if email.contains('@') {
//!         Validation::valid(email.to_string())
//!     } else {
//!         Validation::invalid("email must contain @".to_string())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<String, i32> {
//!     if age >= 18 {
//!         Validation::valid(age)
//!     } else {
//!         Validation::invalid("must be 18 or older".to_string())
//!     }
//! }
//!
//! let result = Validation::all((validate_email("nobody"), validate_age(12)));
//! assert_eq!(
//!     result.errors().map(|e| e.len()),
//!     Some(2),
//! );
//! ```

use crate::{Either, Maybe, NonEmptyVec, Semigroup};

/// A validation that either succeeds with a value or fails with one or more errors.
///
/// # Type Parameters
///
/// * `E` - The type of each individual error
/// * `T` - The type of the success value
///
/// # Examples
///
/// ```
/// use tidewater::Validation;
///
/// let v = Validation::<String, _>::valid(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let combined = Validation::<_, i32>::invalid("e1").zip(Validation::<_, i32>::invalid("e2"));
/// assert_eq!(combined.errors().map(|e| e.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation<E, T> {
    /// Successful validation with a value
    Valid(T),
    /// Failed validation with its accumulated errors, in encounter order
    Invalid(NonEmptyVec<E>),
}

impl<E, T> Validation<E, T> {
    /// Create a successful validation.
    #[inline]
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    /// Create a failed validation with exactly one error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let v = Validation::<_, i32>::invalid("error");
    /// assert!(v.is_invalid());
    /// assert_eq!(v.errors().map(|e| e.len()), Some(1));
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validation::Invalid(NonEmptyVec::singleton(error))
    }

    /// Create a failed validation from an existing non-empty error list.
    #[inline]
    pub fn invalid_many(errors: NonEmptyVec<E>) -> Self {
        Validation::Invalid(errors)
    }

    /// Convert from `Either`; a `Left` becomes a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::{Either, Validation};
    ///
    /// let v = Validation::from_either(Either::<&str, i32>::left("e"));
    /// assert_eq!(v, Validation::invalid("e"));
    /// ```
    #[inline]
    pub fn from_either(either: Either<E, T>) -> Self {
        match either {
            Either::Right(value) => Validation::Valid(value),
            Either::Left(error) => Validation::invalid(error),
        }
    }

    /// Create a validation from a `Result`; an `Err` becomes a single error.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        Validation::from_either(Either::from_result(result))
    }

    /// Check if this validation is successful.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Check if this validation failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// Borrow the accumulated errors, if any.
    #[inline]
    pub fn errors(&self) -> Option<&NonEmptyVec<E>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }

    /// Transform the success value if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let v = Validation::<String, _>::valid(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::valid(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transform every accumulated error, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let v = Validation::<_, i32>::invalid(404).map_errors(|code| format!("HTTP {}", code));
    /// assert_eq!(v, Validation::invalid("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_errors<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(errors.map(f)),
        }
    }

    /// Chain a dependent validation.
    ///
    /// A dependent step needs the previous value, so an `Invalid` receiver
    /// is returned as is and `f` is not called. Use [`zip`](Self::zip) or
    /// [`map2`](Self::map2) for independent checks that should accumulate.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let v = Validation::<&str, _>::valid(5);
    /// let result = v.flat_map(|x| {
    ///     if x > 0 {
    ///         Validation::valid(x * 2)
    ///     } else {
    ///         Validation::invalid("must be positive")
    ///     }
    /// });
    /// assert_eq!(result, Validation::valid(10));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Validation::Valid(value) => f(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Fail a valid value that does not satisfy `predicate`.
    ///
    /// An `Invalid` is returned unchanged and `predicate` is not invoked.
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_invalid: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Validation::Valid(value) if predicate(&value) => Validation::Valid(value),
            Validation::Valid(_) => Validation::invalid(on_invalid()),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Recover from failure with another validation.
    ///
    /// A valid value is returned unchanged and `f` is not invoked.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnOnce(NonEmptyVec<E>) -> Validation<E2, T>,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => f(errors),
        }
    }

    /// Run `f` on the success value, returning `self` unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Validation::Valid(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the accumulated errors, returning `self` unchanged.
    #[inline]
    pub fn tap_invalid<F>(self, f: F) -> Self
    where
        F: FnOnce(&NonEmptyVec<E>),
    {
        if let Validation::Invalid(errors) = &self {
            f(errors);
        }
        self
    }

    /// Collapse both variants into one value.
    #[inline]
    pub fn fold<R, F, G>(self, on_invalid: F, on_valid: G) -> R
    where
        F: FnOnce(NonEmptyVec<E>) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Validation::Valid(value) => on_valid(value),
            Validation::Invalid(errors) => on_invalid(errors),
        }
    }

    /// The success value, or one computed from the errors.
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(NonEmptyVec<E>) -> T,
    {
        self.fold(f, |value| value)
    }

    /// Convert to `Either`, keeping every error on the left.
    #[inline]
    pub fn to_either(self) -> Either<NonEmptyVec<E>, T> {
        match self {
            Validation::Valid(value) => Either::Right(value),
            Validation::Invalid(errors) => Either::Left(errors),
        }
    }

    /// Drop the errors, keeping a valid value.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Validation::Valid(value) => Maybe::Present(value),
            Validation::Invalid(_) => Maybe::Absent,
        }
    }

    /// Convert this validation to a `Result` carrying the full, ordered error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let v = Validation::<String, _>::valid(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, NonEmptyVec<E>> {
        self.to_either().into_result()
    }

    /// Pair two validations, accumulating errors from both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// // Both valid
    /// let v1 = Validation::<&str, _>::valid(1);
    /// let v2 = Validation::<&str, _>::valid(2);
    /// assert_eq!(v1.zip(v2), Validation::valid((1, 2)));
    ///
    /// // Both invalid - errors accumulate, receiver first
    /// let v1 = Validation::<_, i32>::invalid("error1");
    /// let v2 = Validation::<_, i32>::invalid("error2");
    /// assert_eq!(
    ///     v1.zip(v2).errors().map(|e| e.iter().copied().collect::<Vec<_>>()),
    ///     Some(vec!["error1", "error2"])
    /// );
    /// ```
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e1), Validation::Invalid(e2)) => Validation::Invalid(e1.combine(e2)),
            (Validation::Invalid(errors), Validation::Valid(_))
            | (Validation::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    /// Combine two independent validations with `f`, accumulating errors.
    ///
    /// `f` only runs when both are valid.
    pub fn map2<A, B, F>(a: Validation<E, A>, b: Validation<E, B>, f: F) -> Validation<E, T>
    where
        F: FnOnce(A, B) -> T,
    {
        a.zip(b).map(|(a, b)| f(a, b))
    }

    /// Combine three independent validations with `f`, accumulating errors in argument order.
    pub fn map3<A, B, C, F>(
        a: Validation<E, A>,
        b: Validation<E, B>,
        c: Validation<E, C>,
        f: F,
    ) -> Validation<E, T>
    where
        F: FnOnce(A, B, C) -> T,
    {
        a.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
    }

    /// Combine every validation in a sequence.
    ///
    /// Every element is visited, even after a failure. The result is valid
    /// (with all values in order) only if no element failed; otherwise it
    /// carries every error, concatenated in sequence order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let ok = vec![Validation::<&str, _>::valid(1), Validation::valid(2)];
    /// assert_eq!(Validation::sequence(ok), Validation::valid(vec![1, 2]));
    ///
    /// let mixed = vec![
    ///     Validation::valid(1),
    ///     Validation::invalid("e1"),
    ///     Validation::invalid("e2"),
    /// ];
    /// let errors = Validation::sequence(mixed).into_result().unwrap_err();
    /// assert_eq!(errors.into_vec(), vec!["e1", "e2"]);
    /// ```
    pub fn sequence<I>(items: I) -> Validation<E, Vec<T>>
    where
        I: IntoIterator<Item = Validation<E, T>>,
    {
        let mut values = Vec::new();
        let mut errors: Option<NonEmptyVec<E>> = None;

        for item in items {
            match item {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(more) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(more),
                        None => more,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::Invalid(errors),
            None => Validation::Valid(values),
        }
    }

    /// Apply `f` to every item and sequence the results, accumulating every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let checked = Validation::traverse(vec![3, -1, -7], |n: i32| {
    ///     if n > 0 { Validation::valid(n) } else { Validation::invalid(n) }
    /// });
    /// assert_eq!(checked.into_result().map_err(|e| e.into_vec()), Err(vec![-1, -7]));
    /// ```
    pub fn traverse<A, I, F>(items: I, f: F) -> Validation<E, Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Validation<E, T>,
    {
        Validation::sequence(items.into_iter().map(f))
    }
}

impl<E> Validation<E, ()> {
    /// Combine all validations in a tuple, accumulating errors.
    ///
    /// Works with tuples of two to six validations sharing an error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let result = Validation::all((
    ///     Validation::<&str, _>::valid(1),
    ///     Validation::valid("two"),
    ///     Validation::valid(3.0),
    /// ));
    /// assert_eq!(result, Validation::valid((1, "two", 3.0)));
    /// ```
    pub fn all<V>(validations: V) -> Validation<E, V::Output>
    where
        V: ValidateAll<E>,
    {
        validations.validate_all()
    }
}

impl<E, F> Validation<E, F> {
    /// Apply a validated function to a validated argument.
    ///
    /// When both are invalid, the result holds the receiver's errors
    /// followed by the argument's; the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidewater::Validation;
    ///
    /// let f = Validation::<&str, _>::valid(|n: i32| n + 1);
    /// assert_eq!(f.ap(Validation::valid(1)), Validation::valid(2));
    ///
    /// let f = Validation::<&str, fn(i32) -> i32>::invalid("no function");
    /// let result = f.ap(Validation::invalid("no argument"));
    /// assert_eq!(result.errors().map(|e| e.len()), Some(2));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, arg: Validation<E, A>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip(arg).map(|(f, a)| f(a))
    }
}

impl<E, T> From<Either<E, T>> for Validation<E, T> {
    fn from(either: Either<E, T>) -> Self {
        Validation::from_either(either)
    }
}

/// Combine a tuple of validations sharing an error type.
///
/// Implemented for tuples of two to six validations; used by
/// [`Validation::all`].
pub trait ValidateAll<E> {
    /// The tuple of success values.
    type Output;

    /// Combine all validations, accumulating errors in tuple order.
    fn validate_all(self) -> Validation<E, Self::Output>;
}

// Left-nested zips keep errors in tuple order.
macro_rules! zip_all {
    ($first:ident $(, $rest:ident)*) => {
        $first $(.zip($rest))*
    };
}

macro_rules! impl_validate_all {
    ($(($($v:ident: $T:ident),+) => |$pat:pat_param| $out:expr;)+) => {
        $(
            impl<E, $($T),+> ValidateAll<E> for ($(Validation<E, $T>,)+) {
                type Output = ($($T,)+);

                fn validate_all(self) -> Validation<E, Self::Output> {
                    let ($($v,)+) = self;
                    zip_all!($($v),+).map(|$pat| $out)
                }
            }
        )+
    };
}

impl_validate_all! {
    (v1: T1, v2: T2) => |(a, b)| (a, b);
    (v1: T1, v2: T2, v3: T3) => |((a, b), c)| (a, b, c);
    (v1: T1, v2: T2, v3: T3, v4: T4) => |(((a, b), c), d)| (a, b, c, d);
    (v1: T1, v2: T2, v3: T3, v4: T4, v5: T5) => |((((a, b), c), d), e)| (a, b, c, d, e);
    (v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6) =>
        |(((((a, b), c), d), e), f)| (a, b, c, d, e, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn errors_of<E: Clone, T>(v: &Validation<E, T>) -> Vec<E> {
        v.errors().map(|e| e.iter().cloned().collect()).unwrap_or_default()
    }

    #[test]
    fn test_invalid_starts_with_one_error() {
        let v = Validation::<_, ()>::invalid("e");
        assert_eq!(errors_of(&v), vec!["e"]);
    }

    #[test]
    fn test_map2_accumulates_without_calling_mapper() {
        let called = Cell::new(false);
        let result: Validation<&str, i32> = Validation::map2(
            Validation::<&str, i32>::invalid("e1"),
            Validation::<&str, i32>::invalid("e2"),
            |a, b| {
                called.set(true);
                a + b
            },
        );
        assert_eq!(errors_of(&result), vec!["e1", "e2"]);
        assert!(!called.get());
    }

    #[test]
    fn test_ap_both_invalid_concatenates_in_order() {
        let f = Validation::<&str, ()>::invalid_many(NonEmptyVec::new("f1", vec!["f2"]))
            .map(|()| |n: i32| n);
        let arg = Validation::<&str, i32>::invalid_many(NonEmptyVec::new("a1", vec!["a2"]));
        assert_eq!(errors_of(&f.ap(arg)), vec!["f1", "f2", "a1", "a2"]);
    }

    #[test]
    fn test_ap_one_side_invalid() {
        let f = Validation::<&str, _>::valid(|n: i32| n * 2);
        assert_eq!(errors_of(&f.ap(Validation::invalid("bad"))), vec!["bad"]);

        let f = Validation::<&str, fn(i32) -> i32>::invalid("no fn");
        assert_eq!(errors_of(&f.ap(Validation::valid(1))), vec!["no fn"]);
    }

    #[test]
    fn test_map3_accumulates_in_argument_order() {
        let result = Validation::map3(
            Validation::<&str, i32>::invalid("a"),
            Validation::<&str, i32>::valid(2),
            Validation::<&str, i32>::invalid("c"),
            |a, b, c| a + b + c,
        );
        assert_eq!(errors_of(&result), vec!["a", "c"]);

        let ok = Validation::map3(
            Validation::<&str, i32>::valid(1),
            Validation::valid(2),
            Validation::valid(3),
            |a, b, c| a + b + c,
        );
        assert_eq!(ok, Validation::valid(6));
    }

    #[test]
    fn test_sequence_visits_every_element() {
        let result = Validation::sequence(vec![
            Validation::valid(1),
            Validation::invalid("e1"),
            Validation::invalid("e2"),
        ]);
        assert_eq!(errors_of(&result), vec!["e1", "e2"]);

        let ok = Validation::<&str, i32>::sequence(vec![Validation::valid(1), Validation::valid(2)]);
        assert_eq!(ok, Validation::valid(vec![1, 2]));

        let empty = Validation::<&str, i32>::sequence(Vec::new());
        assert_eq!(empty, Validation::valid(vec![]));
    }

    #[test]
    fn test_flat_map_short_circuits() {
        let called = Cell::new(false);
        let result = Validation::<&str, i32>::invalid("e").flat_map(|n| {
            called.set(true);
            Validation::valid(n)
        });
        assert_eq!(result, Validation::invalid("e"));
        assert!(!called.get());
    }

    #[test]
    fn test_filter_or_else() {
        let v = Validation::<&str, i32>::valid(3);
        assert_eq!(v.clone().filter_or_else(|n| *n > 5, || "too small"), Validation::invalid("too small"));
        assert_eq!(v.filter_or_else(|n| *n > 1, || "too small"), Validation::valid(3));
    }

    #[test]
    fn test_or_else_and_get_or_else() {
        let v = Validation::<&str, usize>::invalid("e");
        assert_eq!(v.clone().get_or_else(|errors| errors.len()), 1);
        assert_eq!(
            v.or_else(|errors| Validation::<String, usize>::valid(errors.len() * 10)),
            Validation::valid(10)
        );
    }

    #[test]
    fn test_taps() {
        let seen = Cell::new(0);
        let _ = Validation::<&str, usize>::valid(4)
            .tap(|n| seen.set(*n))
            .tap_invalid(|errors| seen.set(errors.len() * 100));
        assert_eq!(seen.get(), 4);

        let _ = Validation::<&str, usize>::invalid("x")
            .tap(|n| seen.set(*n))
            .tap_invalid(|errors| seen.set(errors.len() * 100));
        assert_eq!(seen.get(), 100);
    }

    #[test]
    fn test_either_interop() {
        let v: Validation<&str, i32> = Either::left("e").into();
        assert_eq!(v, Validation::invalid("e"));
        assert_eq!(
            Validation::<&str, i32>::invalid("e").to_either(),
            Either::left(NonEmptyVec::singleton("e"))
        );
        assert_eq!(Validation::<&str, i32>::valid(1).to_either(), Either::right(1));
        assert_eq!(Validation::<&str, i32>::valid(1).to_maybe(), Maybe::some(1));
    }

    #[test]
    fn test_from_result_and_into_result() {
        let v = Validation::from_result("7".parse::<u8>());
        assert_eq!(v.into_result(), Ok(7));
        let err = Validation::<&str, u8>::invalid("x").into_result();
        assert_eq!(err, Err(NonEmptyVec::singleton("x")));
    }

    #[test]
    fn test_all_tuples() {
        let result = Validation::all((
            Validation::<&str, i32>::invalid("e1"),
            Validation::<&str, &str>::valid("ok"),
            Validation::<&str, bool>::invalid("e3"),
            Validation::<&str, u8>::invalid("e4"),
        ));
        assert_eq!(errors_of(&result), vec!["e1", "e3", "e4"]);

        let ok = Validation::all((
            Validation::<&str, _>::valid(1),
            Validation::valid(2),
            Validation::valid(3),
            Validation::valid(4),
            Validation::valid(5),
            Validation::valid(6),
        ));
        assert_eq!(ok, Validation::valid((1, 2, 3, 4, 5, 6)));
    }

    #[test]
    fn test_map_errors() {
        let v = Validation::<i32, ()>::invalid_many(NonEmptyVec::new(1, vec![2]));
        assert_eq!(errors_of(&v.map_errors(|e| e * 10)), vec![10, 20]);
    }
}
