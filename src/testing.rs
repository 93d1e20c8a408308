//! Testing utilities for code built on tidewater
//!
//! Assertion macros for the common "this must have succeeded / failed"
//! checks, and, with the `proptest` feature, `Arbitrary` implementations so
//! the crate's types can be generated directly in property tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use tidewater::{Either, Validation, assert_valid, assert_invalid, assert_left};
//!
//! let ok = Validation::<String, _>::valid(42);
//! assert_valid!(ok);
//!
//! let failed = Validation::<_, i32>::invalid("error".to_string());
//! assert_invalid!(failed);
//!
//! let either = Either::<_, i32>::left("missing");
//! assert_left!(either);
//! ```
//!
//! ## Property-based testing
//!
//! ```rust
//! # #[cfg(feature = "proptest")]
//! # {
//! use proptest::prelude::*;
//! use tidewater::Validation;
//!
//! proptest!(|(v in any::<Validation<String, i32>>())| {
//!     prop_assert_eq!(v.clone().map(|x| x), v);
//! });
//! # }
//! ```

#[cfg(feature = "proptest")]
use crate::{Either, Maybe, NonEmptyVec, Validation};

/// Assert that a validation is valid.
///
/// This macro will panic if the validation is `Invalid`.
///
/// # Example
///
/// ```rust
/// use tidewater::{Validation, assert_valid};
///
/// let val = Validation::<String, _>::valid(42);
/// assert_valid!(val);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Valid(_) => {}
            $crate::Validation::Invalid(e) => {
                panic!("Expected Valid, got Invalid: {:?}", e);
            }
        }
    };
}

/// Assert that a validation is invalid.
///
/// This macro will panic if the validation is `Valid`.
///
/// # Example
///
/// ```rust
/// use tidewater::{Validation, assert_invalid};
///
/// let val = Validation::<_, i32>::invalid("error");
/// assert_invalid!(val);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Invalid(_) => {}
            $crate::Validation::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validation is invalid with exactly these errors, in order.
///
/// # Example
///
/// ```rust
/// use tidewater::{Validation, assert_errors};
///
/// let val = Validation::<_, i32>::invalid("error1").zip(Validation::<_, i32>::invalid("error2"));
/// assert_errors!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => {
                assert_eq!(errors.into_vec(), $expected);
            }
            $crate::Validation::Valid(v) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that an either is `Right`, optionally with a given value.
///
/// # Example
///
/// ```rust
/// use tidewater::{Either, assert_right};
///
/// let e = Either::<String, _>::right(7);
/// assert_right!(e.clone());
/// assert_right!(e, 7);
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(e) => {
                panic!("Expected Right, got Left: {:?}", e);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Either::Left(e) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, e);
            }
        }
    };
}

/// Assert that an either is `Left`, optionally with a given error.
///
/// # Example
///
/// ```rust
/// use tidewater::{Either, assert_left};
///
/// let e = Either::<_, i32>::left("div0");
/// assert_left!(e.clone());
/// assert_left!(e, "div0");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(v) => {
                panic!("Expected Left, got Right: {:?}", v);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Either::Right(v) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for NonEmptyVec<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(any_with::<T>(params), 1..8)
            .prop_filter_map("non-empty", NonEmptyVec::from_vec)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(params))
            .prop_map(Maybe::from_option)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, T> Arbitrary for Either<E, T>
where
    E: Arbitrary + 'static,
    T: Arbitrary + 'static,
{
    type Parameters = (E::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, t_params) = args;
        prop_oneof![
            any_with::<E>(e_params).prop_map(Either::Left),
            any_with::<T>(t_params).prop_map(Either::Right),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, T> Arbitrary for Validation<E, T>
where
    E: Arbitrary + 'static,
    T: Arbitrary + 'static,
{
    type Parameters = (E::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, t_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::Valid),
            any_with::<NonEmptyVec<E>>(e_params).prop_map(Validation::Invalid),
        ]
        .boxed()
    }
}
