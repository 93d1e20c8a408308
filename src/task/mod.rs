//! Deferred asynchronous computations
//!
//! A [`Task<T>`] describes a computation that will eventually produce a `T`
//! and never fails. Building a task, or combining tasks, starts nothing:
//! work begins only when [`Task::run`] is called, and every call to `run`
//! invokes the underlying producer again. There is no memoization.
//!
//! [`TaskEither<E, T>`] is a task whose result is an [`Either`](crate::Either),
//! giving typed asynchronous failure.
//!
//! # Concurrency
//!
//! `zip`, `ap`, `map2`, `map3` and `all` invoke every participant's producer
//! before awaiting any of them, and join the resulting futures on the
//! current task (`futures::join!` / `futures::future::join_all`). No
//! threads are spawned and no executor is bundled: run tasks on whatever
//! runtime the application already uses. Results always come back in
//! caller order, regardless of completion order.
//!
//! `flat_map` is the only sequential combinator: the second task is built
//! from the first task's value, after it resolves.
//!
//! # Example
//!
//! ```
//! use tidewater::Task;
//!
//! # tokio_test::block_on(async {
//! let price = Task::of(40);
//! let shipping = Task::new(|| async { 2 });
//!
//! let total = Task::map2(price, shipping, |p, s| p + s);
//! assert_eq!(total.run().await, 42);
//! // Running again re-invokes both producers.
//! assert_eq!(total.run().await, 42);
//! # });
//! ```

mod task_either;
#[cfg(feature = "tracing")]
mod tracing;

#[cfg(test)]
mod tests;

pub use task_either::TaskEither;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;

/// A boxed, sendable future with a `'static` lifetime, as returned by [`Task::run`].
pub type BoxFuture<T> = futures::future::BoxFuture<'static, T>;

type Producer<T> = Arc<dyn Fn() -> BoxFuture<T> + Send + Sync>;

/// A lazy, re-runnable asynchronous computation that cannot fail.
///
/// Cloning a task is cheap: clones share the same immutable producer.
///
/// # Example
///
/// ```
/// use tidewater::Task;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let task = Task::new(move || {
///     let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
///     async move { n }
/// });
///
/// // Nothing has run yet.
/// assert_eq!(calls.load(Ordering::SeqCst), 0);
///
/// assert_eq!(task.run().await, 1);
/// assert_eq!(task.run().await, 2);
/// # });
/// ```
pub struct Task<T> {
    producer: Producer<T>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Task {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("producer", &"<function>")
            .finish()
    }
}

impl<T: Send + 'static> Task<T> {
    // ========== Constructors ==========

    /// Wrap a producer of futures.
    ///
    /// This is the boundary with the rest of the async world: `producer` is
    /// called once per [`run`](Self::run), never at construction.
    #[inline]
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Task {
            producer: Arc::new(move || producer().boxed()),
        }
    }

    /// A task that resolves immediately to (a clone of) `value`.
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Task::new(move || futures::future::ready(value.clone()))
    }

    // ========== Execution ==========

    /// Invoke the producer and return its future.
    ///
    /// Each call starts the computation afresh.
    #[inline]
    pub fn run(&self) -> BoxFuture<T> {
        (self.producer)()
    }

    // ========== Combinators ==========

    /// Transform the eventual value.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    ///
    /// # tokio_test::block_on(async {
    /// let task = Task::of(21).map(|x| x * 2);
    /// assert_eq!(task.run().await, 42);
    /// # });
    /// ```
    pub fn map<U, F>(self, f: F) -> Task<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        let f = Arc::new(f);
        Task::new(move || {
            let fut = self.run();
            let f = Arc::clone(&f);
            async move { f(fut.await) }
        })
    }

    /// Chain a dependent task.
    ///
    /// The task returned by `f` is built only after this one resolves, so
    /// the two run strictly one after the other.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    ///
    /// # tokio_test::block_on(async {
    /// let user_id = Task::of(7);
    /// let profile = user_id.flat_map(|id| Task::of(format!("user-{}", id)));
    /// assert_eq!(profile.run().await, "user-7");
    /// # });
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Task<U>
    where
        F: Fn(T) -> Task<U> + Send + Sync + 'static,
        U: Send + 'static,
    {
        let f = Arc::new(f);
        Task::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move { f(first.await).run().await }
        })
    }

    /// Run both tasks concurrently and pair their values.
    ///
    /// Both producers are invoked before either future is awaited.
    pub fn zip<U>(self, other: Task<U>) -> Task<(T, U)>
    where
        U: Send + 'static,
    {
        Task::new(move || {
            let left = self.run();
            let right = other.run();
            async move { futures::join!(left, right) }
        })
    }

    /// Observe the value without changing it.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.map(move |value| {
            f(&value);
            value
        })
    }

    /// Combine two tasks, run concurrently, with `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    ///
    /// # tokio_test::block_on(async {
    /// let sum = Task::map2(Task::of(1), Task::of(2), |a, b| a + b);
    /// assert_eq!(sum.run().await, 3);
    /// # });
    /// ```
    pub fn map2<A, B, F>(a: Task<A>, b: Task<B>, f: F) -> Task<T>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A, B) -> T + Send + Sync + 'static,
    {
        a.zip(b).map(move |(a, b)| f(a, b))
    }

    /// Combine three tasks, run concurrently, with `f`.
    pub fn map3<A, B, C, F>(a: Task<A>, b: Task<B>, c: Task<C>, f: F) -> Task<T>
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(A, B, C) -> T + Send + Sync + 'static,
    {
        a.zip(b).zip(c).map(move |((a, b), c)| f(a, b, c))
    }

    /// Run every task concurrently and collect the values in input order.
    ///
    /// An empty input resolves to an empty `Vec`.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    ///
    /// # tokio_test::block_on(async {
    /// let all = Task::all(vec![Task::of(1), Task::of(2), Task::of(3)]);
    /// assert_eq!(all.run().await, vec![1, 2, 3]);
    ///
    /// let none = Task::<i32>::all(Vec::new());
    /// assert!(none.run().await.is_empty());
    /// # });
    /// ```
    pub fn all<I>(tasks: I) -> Task<Vec<T>>
    where
        I: IntoIterator<Item = Task<T>>,
    {
        let tasks: Vec<Task<T>> = tasks.into_iter().collect();
        Task::new(move || futures::future::join_all(tasks.iter().map(Task::run)))
    }

    /// Postpone the start of this task by `duration`.
    ///
    /// The producer is invoked only after the delay has elapsed.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let task = Task::of("late").delay(Duration::from_millis(5));
    /// assert_eq!(task.run().await, "late");
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub fn delay(self, duration: std::time::Duration) -> Self {
        Task::new(move || {
            let task = self.clone();
            async move {
                tokio::time::sleep(duration).await;
                task.run().await
            }
        })
    }
}

impl<F: Send + 'static> Task<F> {
    /// Apply the function produced by this task to the value of `arg`.
    ///
    /// Both tasks run concurrently.
    pub fn ap<A, B>(self, arg: Task<A>) -> Task<B>
    where
        F: FnOnce(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        self.zip(arg).map(|(f, a)| f(a))
    }
}
