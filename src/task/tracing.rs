//! Tracing support for tasks.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. A span attached with
//! `instrument` is entered every time the task's future is polled, on every
//! run.

use super::{Task, TaskEither};

impl<T: Send + 'static> Task<T> {
    /// Run this task inside `span`.
    ///
    /// # Example
    ///
    /// ```
    /// use tidewater::Task;
    ///
    /// # tokio_test::block_on(async {
    /// let task = Task::of(42).instrument(tracing::info_span!("load_answer"));
    /// assert_eq!(task.run().await, 42);
    /// # });
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        Task::new(move || {
            use tracing::Instrument as _;
            self.run().instrument(span.clone())
        })
    }
}

impl<E: Send + 'static, T: Send + 'static> TaskEither<E, T> {
    /// Run this task inside `span`.
    ///
    /// Use this to attach business context to a step:
    ///
    /// ```
    /// use tidewater::{Either, TaskEither};
    ///
    /// # tokio_test::block_on(async {
    /// let order_id = 17;
    /// let fetch = TaskEither::<String, _>::right(order_id)
    ///     .instrument(tracing::debug_span!("fetch_order", order_id));
    /// assert_eq!(fetch.run().await, Either::right(17));
    /// # });
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        TaskEither::from(self.into_task().instrument(span))
    }
}
