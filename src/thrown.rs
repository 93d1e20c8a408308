//! What `try_catch` caught
//!
//! `Either::try_catch` and `TaskEither::try_catch` are the only places where
//! a failure escaping a computation is turned back into a value. In Rust a
//! computation can escape in two ways: it returns `Err`, or it panics. Both
//! arrive at the caller's converter as a [`Thrown`].

use std::any::Any;
use std::fmt;

/// A failure caught at a `try_catch` boundary.
///
/// # Example
///
/// ```
/// use tidewater::{Either, Thrown};
///
/// let parsed: Either<String, i32> = Either::try_catch(
///     || "forty-two".parse::<i32>(),
///     |thrown: Thrown<std::num::ParseIntError>| thrown.to_string(),
/// );
/// assert_eq!(parsed, Either::left("invalid digit found in string".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thrown<X> {
    /// The computation returned (or its future resolved to) `Err(X)`.
    Rejected(X),
    /// The computation panicked; carries the panic message.
    Panicked(String),
}

impl<X> Thrown<X> {
    /// Build a `Panicked` value from a payload returned by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panic with a non-string payload".to_string(),
            },
        };
        Thrown::Panicked(message)
    }

    /// Returns `true` if the failure was a panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Thrown::Panicked(_))
    }

    /// The rejection value, if the computation returned `Err`.
    pub fn into_rejection(self) -> Option<X> {
        match self {
            Thrown::Rejected(x) => Some(x),
            Thrown::Panicked(_) => None,
        }
    }

    /// Transform the rejection value.
    pub fn map<Y, F>(self, f: F) -> Thrown<Y>
    where
        F: FnOnce(X) -> Y,
    {
        match self {
            Thrown::Rejected(x) => Thrown::Rejected(f(x)),
            Thrown::Panicked(message) => Thrown::Panicked(message),
        }
    }
}

impl<X: fmt::Display> fmt::Display for Thrown<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Rejected(x) => write!(f, "{}", x),
            Thrown::Panicked(message) => write!(f, "panicked: {}", message),
        }
    }
}

impl<X> std::error::Error for Thrown<X>
where
    X: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Thrown::Rejected(x) => Some(x),
            Thrown::Panicked(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_panic_with_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(Thrown::<()>::from_panic(payload), Thrown::Panicked("boom".to_string()));
    }

    #[test]
    fn test_from_panic_with_formatted_payload() {
        let code = 7;
        let payload = std::panic::catch_unwind(|| panic!("exit code {}", code)).unwrap_err();
        assert_eq!(
            Thrown::<()>::from_panic(payload),
            Thrown::Panicked("exit code 7".to_string())
        );
    }

    #[test]
    fn test_from_panic_with_opaque_payload() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(17_u8)).unwrap_err();
        assert!(Thrown::<()>::from_panic(payload).is_panic());
    }

    #[test]
    fn test_display() {
        assert_eq!(Thrown::Rejected("timeout").to_string(), "timeout");
        assert_eq!(
            Thrown::<&str>::Panicked("index out of range".into()).to_string(),
            "panicked: index out of range"
        );
    }

    #[test]
    fn test_source_forwards_rejection() {
        let err = "x".parse::<u8>().unwrap_err();
        let thrown = Thrown::Rejected(err);
        assert!(thrown.source().is_some());

        let panicked: Thrown<std::num::ParseIntError> = Thrown::Panicked("p".into());
        assert!(panicked.source().is_none());
    }

    #[test]
    fn test_map_and_into_rejection() {
        assert_eq!(Thrown::Rejected(2).map(|x| x * 3).into_rejection(), Some(6));
        assert_eq!(Thrown::<i32>::Panicked("p".into()).into_rejection(), None);
    }
}
