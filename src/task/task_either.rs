//! Deferred asynchronous computations with typed failure

use std::fmt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;

use super::{BoxFuture, Task};
use crate::{Either, Maybe, Thrown};

/// A [`Task`] whose result is an [`Either`]: it eventually succeeds with a
/// `T` (`Right`) or fails with an `E` (`Left`).
///
/// Every combinator awaits the underlying task and then applies the
/// matching `Either` operation, so the short-circuit rules are the ones of
/// `Either`: a `Left` flows through `map`, `flat_map` and friends untouched.
///
/// # Example
///
/// ```
/// use tidewater::{Either, TaskEither};
///
/// # tokio_test::block_on(async {
/// fn divide(n: i32) -> TaskEither<String, i32> {
///     if n == 0 {
///         TaskEither::left("div0".to_string())
///     } else {
///         TaskEither::right(100 / n)
///     }
/// }
///
/// let ok = TaskEither::right(2).flat_map(divide);
/// assert_eq!(ok.run().await, Either::right(50));
///
/// let failed = TaskEither::right(0).flat_map(divide);
/// assert_eq!(failed.run().await, Either::left("div0".to_string()));
/// # });
/// ```
pub struct TaskEither<E, T> {
    task: Task<Either<E, T>>,
}

impl<E, T> Clone for TaskEither<E, T> {
    fn clone(&self) -> Self {
        TaskEither {
            task: self.task.clone(),
        }
    }
}

impl<E, T> fmt::Debug for TaskEither<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskEither")
            .field("producer", &"<function>")
            .finish()
    }
}

impl<E, T> From<Task<Either<E, T>>> for TaskEither<E, T> {
    fn from(task: Task<Either<E, T>>) -> Self {
        TaskEither { task }
    }
}

impl<E: Send + 'static, T: Send + 'static> TaskEither<E, T> {
    // ========== Constructors ==========

    /// Wrap a producer of futures that resolve to an `Either`.
    #[inline]
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<E, T>> + Send + 'static,
    {
        TaskEither {
            task: Task::new(producer),
        }
    }

    /// A task that succeeds immediately with `value`.
    #[inline]
    pub fn right(value: T) -> Self
    where
        T: Clone + Sync,
    {
        TaskEither::new(move || futures::future::ready(Either::Right(value.clone())))
    }

    /// A task that fails immediately with `error`.
    #[inline]
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
    {
        TaskEither::new(move || futures::future::ready(Either::Left(error.clone())))
    }

    /// Lift an already-computed `Either`.
    #[inline]
    pub fn from_either(either: Either<E, T>) -> Self
    where
        E: Clone + Sync,
        T: Clone + Sync,
    {
        TaskEither {
            task: Task::of(either),
        }
    }

    /// Lift a `Maybe`, failing with `on_absent()` when it is `Absent`.
    ///
    /// `on_absent` is invoked eagerly, at most once.
    pub fn from_maybe<F>(value: Maybe<T>, on_absent: F) -> Self
    where
        E: Clone + Sync,
        T: Clone + Sync,
        F: FnOnce() -> E,
    {
        TaskEither::from_either(Either::from_maybe(value, on_absent))
    }

    /// A task that always succeeds with the value of `task`.
    #[inline]
    pub fn from_task(task: Task<T>) -> Self {
        TaskEither {
            task: task.map(Either::Right),
        }
    }

    /// A task that always fails with the value of `task`.
    #[inline]
    pub fn left_task(task: Task<E>) -> Self {
        TaskEither {
            task: task.map(Either::Left),
        }
    }

    /// Wrap a fallible async computation, catching everything that escapes it.
    ///
    /// `thunk` is invoked only when the task is run. The result is `Left`,
    /// built by `on_throw`, if any of these happen:
    ///
    /// - the future resolves to `Err(x)` ([`Thrown::Rejected`]),
    /// - `thunk` itself panics ([`Thrown::Panicked`]),
    /// - the future panics while being polled ([`Thrown::Panicked`]).
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::{Either, TaskEither, Thrown};
    ///
    /// # tokio_test::block_on(async {
    /// let fetch = TaskEither::try_catch(
    ///     || async { Err::<u32, _>("connection reset") },
    ///     |thrown: Thrown<&str>| format!("fetch failed: {}", thrown),
    /// );
    /// assert_eq!(
    ///     fetch.run().await,
    ///     Either::left("fetch failed: connection reset".to_string())
    /// );
    /// # });
    /// ```
    pub fn try_catch<X, F, Fut, H>(thunk: F, on_throw: H) -> Self
    where
        X: Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        H: Fn(Thrown<X>) -> E + Send + Sync + 'static,
    {
        let on_throw = Arc::new(on_throw);
        TaskEither::new(move || {
            let started = catch_unwind(AssertUnwindSafe(|| thunk()));
            let on_throw = Arc::clone(&on_throw);
            async move {
                let thrown = match started {
                    Ok(fut) => match AssertUnwindSafe(fut).catch_unwind().await {
                        Ok(Ok(value)) => return Either::Right(value),
                        Ok(Err(rejection)) => Thrown::Rejected(rejection),
                        Err(payload) => Thrown::from_panic(payload),
                    },
                    Err(payload) => Thrown::from_panic(payload),
                };
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    panicked = thrown.is_panic(),
                    "task try_catch converted a failure into Left"
                );
                Either::Left(on_throw(thrown))
            }
        })
    }

    // ========== Execution ==========

    /// Invoke the producer and return its future.
    #[inline]
    pub fn run(&self) -> BoxFuture<Either<E, T>> {
        self.task.run()
    }

    /// The underlying `Task` of `Either`.
    #[inline]
    pub fn into_task(self) -> Task<Either<E, T>> {
        self.task
    }

    // ========== Transformations ==========

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> TaskEither<E, U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.map(&f)),
        }
    }

    /// Transform the failure value.
    pub fn map_left<E2, F>(self, f: F) -> TaskEither<E2, T>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.map_left(&f)),
        }
    }

    /// Transform whichever side is present.
    pub fn bimap<E2, U, F, G>(self, on_left: F, on_right: G) -> TaskEither<E2, U>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(T) -> U + Send + Sync + 'static,
        E2: Send + 'static,
        U: Send + 'static,
    {
        TaskEither {
            task: self
                .task
                .map(move |either| either.bimap(&on_left, &on_right)),
        }
    }

    /// Exchange the two sides.
    pub fn swap(self) -> TaskEither<T, E> {
        TaskEither {
            task: self.task.map(Either::swap),
        }
    }

    /// Fail a successful value that does not satisfy `predicate`.
    pub fn filter_or_else<P, F>(self, predicate: P, on_left: F) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn() -> E + Send + Sync + 'static,
    {
        TaskEither {
            task: self
                .task
                .map(move |either| either.filter_or_else(&predicate, &on_left)),
        }
    }

    /// Observe the success value.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.tap(&f)),
        }
    }

    /// Observe the failure value.
    pub fn tap_left<F>(self, f: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.tap_left(&f)),
        }
    }

    // ========== Chaining ==========

    /// Chain a dependent task.
    ///
    /// On `Left` the second producer is never built, let alone run.
    pub fn flat_map<U, F>(self, f: F) -> TaskEither<E, U>
    where
        F: Fn(T) -> TaskEither<E, U> + Send + Sync + 'static,
        U: Send + 'static,
    {
        let f = Arc::new(f);
        TaskEither::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move {
                match first.await {
                    Either::Right(value) => f(value).run().await,
                    Either::Left(error) => Either::Left(error),
                }
            }
        })
    }

    /// Chain a synchronous fallible step.
    pub fn flat_map_either<U, F>(self, f: F) -> TaskEither<E, U>
    where
        F: Fn(T) -> Either<E, U> + Send + Sync + 'static,
        U: Send + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.flat_map(&f)),
        }
    }

    /// Recover from failure with another task.
    ///
    /// On `Right` the recovery producer is never built.
    pub fn or_else<E2, F>(self, f: F) -> TaskEither<E2, T>
    where
        F: Fn(E) -> TaskEither<E2, T> + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let f = Arc::new(f);
        TaskEither::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move {
                match first.await {
                    Either::Right(value) => Either::Right(value),
                    Either::Left(error) => f(error).run().await,
                }
            }
        })
    }

    // ========== Combining ==========

    /// Run both tasks concurrently, then pair their values.
    ///
    /// If both fail, the receiver's failure is kept.
    pub fn zip<U>(self, other: TaskEither<E, U>) -> TaskEither<E, (T, U)>
    where
        U: Send + 'static,
    {
        TaskEither {
            task: self.task.zip(other.task).map(|(a, b)| a.zip(b)),
        }
    }

    /// Combine two tasks, run concurrently, with `f`.
    pub fn map2<A, B, F>(a: TaskEither<E, A>, b: TaskEither<E, B>, f: F) -> TaskEither<E, T>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A, B) -> T + Send + Sync + 'static,
    {
        a.zip(b).map(move |(a, b)| f(a, b))
    }

    /// Combine three tasks, run concurrently, with `f`.
    pub fn map3<A, B, C, F>(
        a: TaskEither<E, A>,
        b: TaskEither<E, B>,
        c: TaskEither<E, C>,
        f: F,
    ) -> TaskEither<E, T>
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(A, B, C) -> T + Send + Sync + 'static,
    {
        a.zip(b).zip(c).map(move |((a, b), c)| f(a, b, c))
    }

    /// Run every task concurrently; succeed with all values in input order,
    /// or fail with the first `Left` in input order.
    ///
    /// Every task runs to completion even when an earlier one fails.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::{Either, TaskEither};
    ///
    /// # tokio_test::block_on(async {
    /// let all = TaskEither::all(vec![
    ///     TaskEither::right(1),
    ///     TaskEither::left("err"),
    ///     TaskEither::right(3),
    /// ]);
    /// assert_eq!(all.run().await, Either::left("err"));
    /// # });
    /// ```
    pub fn all<I>(tasks: I) -> TaskEither<E, Vec<T>>
    where
        I: IntoIterator<Item = TaskEither<E, T>>,
    {
        let tasks = tasks.into_iter().map(TaskEither::into_task);
        TaskEither {
            task: Task::all(tasks).map(|results| Either::sequence(results)),
        }
    }

    // ========== Terminals ==========

    /// Collapse both outcomes into one value.
    pub fn fold<R, F, G>(self, on_left: F, on_right: G) -> Task<R>
    where
        F: Fn(E) -> R + Send + Sync + 'static,
        G: Fn(T) -> R + Send + Sync + 'static,
        R: Send + 'static,
    {
        self.task.map(move |either| either.fold(&on_left, &on_right))
    }

    /// The success value, or one computed from the failure.
    pub fn get_or_else<F>(self, f: F) -> Task<T>
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        self.task.map(move |either| either.get_or_else(&f))
    }

    /// Postpone the start of this task by `duration`.
    #[cfg(feature = "async")]
    pub fn delay(self, duration: std::time::Duration) -> Self {
        TaskEither {
            task: self.task.delay(duration),
        }
    }
}

impl<E: Send + 'static, F: Send + 'static> TaskEither<E, F> {
    /// Apply the function produced by this task to the value of `arg`.
    ///
    /// Both tasks run concurrently. If both fail, the receiver's failure is
    /// kept.
    pub fn ap<A, B>(self, arg: TaskEither<E, A>) -> TaskEither<E, B>
    where
        F: FnOnce(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        self.zip(arg).map(|(f, a)| f(a))
    }
}
