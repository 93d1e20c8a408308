//! Traverse and sequence utilities for collections
//!
//! These free functions turn a collection of wrapped values into one wrapped
//! collection, following each family's combination rule:
//!
//! - **`sequence_*`**: `Vec<F<T>>` → `F<Vec<T>>`
//! - **`traverse_*`**: map a function over a collection, then sequence
//!
//! | family | on failure |
//! |---|---|
//! | [`Maybe`] | `Absent` if any element is absent |
//! | [`Either`] | the first `Left` in input order |
//! | [`Validation`] | every error, concatenated in input order |
//! | [`Task`] | cannot fail; all run concurrently |
//! | [`TaskEither`] | all run concurrently; the first `Left` in input order |
//!
//! # Examples
//!
//! ## Validation
//!
//! ```
//! use tidewater::{Validation, traverse::traverse};
//!
//! fn parse_number(s: &str) -> Validation<String, i32> {
//!     s.parse()
//!         .map(Validation::valid)
//!         .unwrap_or_else(|_| Validation::invalid(format!("Invalid number: {}", s)))
//! }
//!
//! let result = traverse(vec!["1", "2", "3"], parse_number);
//! assert_eq!(result, Validation::valid(vec![1, 2, 3]));
//!
//! let result = traverse(vec!["1", "x", "y"], parse_number);
//! assert_eq!(result.errors().map(|e| e.len()), Some(2));
//! ```
//!
//! ## TaskEither
//!
//! ```
//! use tidewater::{Either, TaskEither, traverse::traverse_task_either};
//!
//! # tokio_test::block_on(async {
//! fn fetch_price(sku: u32) -> TaskEither<String, u32> {
//!     TaskEither::right(sku * 100)
//! }
//!
//! let prices = traverse_task_either(vec![1, 2, 3], fetch_price);
//! assert_eq!(prices.run().await, Either::right(vec![100, 200, 300]));
//! # });
//! ```

use crate::{Either, Maybe, Task, TaskEither, Validation};

/// Traverse a collection with a validation function.
///
/// Applies `f` to every element, never stopping early, and accumulates all
/// errors in input order.
///
/// # Examples
///
/// ```
/// use tidewater::{Validation, traverse::traverse};
///
/// fn validate_positive(x: i32) -> Validation<String, i32> {
///     if x > 0 {
///         Validation::valid(x)
///     } else {
///         Validation::invalid(format!("{} is not positive", x))
///     }
/// }
///
/// let result = traverse(vec![1, 2, 3], validate_positive);
/// assert_eq!(result, Validation::valid(vec![1, 2, 3]));
///
/// let result = traverse(vec![1, -2, -3], validate_positive);
/// assert!(result.is_invalid());
/// ```
pub fn traverse<A, T, E, F, I>(iter: I, f: F) -> Validation<E, Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Validation<E, T>,
{
    Validation::traverse(iter, f)
}

/// Sequence a collection of validations, accumulating every error.
///
/// # Examples
///
/// ```
/// use tidewater::{Validation, traverse::sequence};
///
/// let vals = vec![
///     Validation::<_, i32>::invalid("error1"),
///     Validation::valid(2),
///     Validation::invalid("error2"),
/// ];
/// let errors = sequence(vals).into_result().unwrap_err();
/// assert_eq!(errors.into_vec(), vec!["error1", "error2"]);
/// ```
pub fn sequence<T, E, I>(iter: I) -> Validation<E, Vec<T>>
where
    I: IntoIterator<Item = Validation<E, T>>,
{
    Validation::sequence(iter)
}

/// Traverse a collection with a function returning `Maybe`.
///
/// Stops calling `f` at the first `Absent`.
///
/// # Example
///
/// ```
/// use tidewater::{Maybe, traverse::traverse_maybe};
///
/// let halves = traverse_maybe(vec![2, 4, 6], |n| {
///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
/// });
/// assert_eq!(halves, Maybe::some(vec![1, 2, 3]));
/// ```
pub fn traverse_maybe<A, T, F, I>(iter: I, f: F) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<T>,
{
    Maybe::traverse(iter, f)
}

/// Sequence a collection of `Maybe` values.
pub fn sequence_maybe<T, I>(iter: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Maybe::sequence(iter)
}

/// Traverse a collection with a function returning `Either`.
///
/// Stops calling `f` at the first `Left`, which becomes the result.
///
/// # Example
///
/// ```
/// use tidewater::{Either, traverse::traverse_either};
///
/// let parsed = traverse_either(vec!["1", "oops", "3"], |s| {
///     Either::from_result(s.parse::<i32>().map_err(|_| format!("bad: {}", s)))
/// });
/// assert_eq!(parsed, Either::left("bad: oops".to_string()));
/// ```
pub fn traverse_either<A, T, E, F, I>(iter: I, f: F) -> Either<E, Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<E, T>,
{
    Either::traverse(iter, f)
}

/// Sequence a collection of `Either` values.
pub fn sequence_either<T, E, I>(iter: I) -> Either<E, Vec<T>>
where
    I: IntoIterator<Item = Either<E, T>>,
{
    Either::sequence(iter)
}

/// Traverse a collection with a task function; every task runs concurrently.
///
/// `f` is applied eagerly to build the tasks, but none of them runs until
/// the returned task is run.
pub fn traverse_task<A, T, F, I>(iter: I, f: F) -> Task<Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Task<T>,
    T: Send + 'static,
{
    Task::all(iter.into_iter().map(f))
}

/// Sequence a collection of tasks; alias of [`Task::all`].
pub fn sequence_task<T, I>(iter: I) -> Task<Vec<T>>
where
    I: IntoIterator<Item = Task<T>>,
    T: Send + 'static,
{
    Task::all(iter)
}

/// Traverse a collection with a `TaskEither` function; every task runs
/// concurrently and the first `Left` in input order wins.
pub fn traverse_task_either<A, T, E, F, I>(iter: I, f: F) -> TaskEither<E, Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> TaskEither<E, T>,
    T: Send + 'static,
    E: Send + 'static,
{
    TaskEither::all(iter.into_iter().map(f))
}

/// Sequence a collection of `TaskEither`s; alias of [`TaskEither::all`].
pub fn sequence_task_either<T, E, I>(iter: I) -> TaskEither<E, Vec<T>>
where
    I: IntoIterator<Item = TaskEither<E, T>>,
    T: Send + 'static,
    E: Send + 'static,
{
    TaskEither::all(iter)
}
