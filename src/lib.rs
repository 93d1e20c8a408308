//! # Tidewater
//!
//! Typed containers for absence, failure and deferred asynchronous work,
//! composed through one shared vocabulary: `map`, `flat_map`, `ap`, `fold`.
//!
//! | type | models |
//! |---|---|
//! | [`Maybe<T>`] | a value that may be absent |
//! | [`Either<E, T>`] | success or a single typed failure; stops at the first failure |
//! | [`Validation<E, T>`] | success or *every* failure, accumulated in order |
//! | [`Task<T>`] | a lazy, re-runnable async computation that cannot fail |
//! | [`TaskEither<E, T>`] | a lazy async computation with typed failure |
//!
//! All values are immutable: every operation returns a new value. Nothing
//! in a `Task` or `TaskEither` runs until `run()` is called, and every call
//! runs it again.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidewater::{Either, Validation};
//!
//! fn divide(n: i32) -> Either<String, i32> {
//!     if n == 0 {
//!         Either::left("div0".to_string())
//!     } else {
//!         Either::right(100 / n)
//!     }
//! }
//!
//! // Either stops at the first failure...
//! assert_eq!(Either::right(2).flat_map(divide), Either::right(50));
//! assert_eq!(Either::right(0).flat_map(divide), Either::left("div0".to_string()));
//!
//! // ...Validation collects them all.
//! let result = Validation::map2(
//!     Validation::<_, i32>::invalid("name is empty"),
//!     Validation::<_, i32>::invalid("age is negative"),
//!     |name, age| (name, age),
//! );
//! assert_eq!(
//!     result.into_result().map_err(|e| e.into_vec()),
//!     Err(vec!["name is empty", "age is negative"])
//! );
//! ```
//!
//! ## Features
//!
//! - `async`: `Task::delay` / `TaskEither::delay`, backed by the tokio timer
//! - `tracing`: `instrument(span)` on tasks, and debug events from `try_catch`
//! - `serde`: record encodings (`{"ok": .., "value" | "error" | "errors": ..}`)
//! - `proptest`: `Arbitrary` implementations for every container
//!
//! For runnable programs, see the `demos/` directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod maybe;
pub mod nonempty;
pub mod semigroup;
pub mod task;
pub mod testing;
pub mod thrown;
pub mod traverse;
pub mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use either::Either;
pub use maybe::Maybe;
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use task::{BoxFuture, Task, TaskEither};
pub use thrown::Thrown;
pub use validation::{ValidateAll, Validation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::maybe::Maybe;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::semigroup::Semigroup;
    pub use crate::task::{Task, TaskEither};
    pub use crate::thrown::Thrown;
    pub use crate::validation::Validation;
}
