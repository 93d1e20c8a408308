//! Serde support (feature-gated)
//!
//! Record encodings for crossing a process boundary:
//!
//! | value | encoding |
//! |---|---|
//! | `Either::Right(v)` | `{"ok": true, "value": v}` |
//! | `Either::Left(e)` | `{"ok": false, "error": e}` |
//! | `Validation::Valid(v)` | `{"ok": true, "value": v}` |
//! | `Validation::Invalid(es)` | `{"ok": false, "errors": [e, ..]}` |
//! | `Maybe` | the value, or `null` |
//! | `NonEmptyVec` | a sequence |
//!
//! Deserializing validates: an invalid validation with an empty `errors`
//! list, or an empty `NonEmptyVec`, is rejected.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use tidewater::Either;
//!
//! let json = serde_json::to_string(&Either::<String, i32>::right(5)).unwrap();
//! assert_eq!(json, r#"{"ok":true,"value":5}"#);
//!
//! let back: Either<String, i32> = serde_json::from_str(r#"{"ok":false,"error":"nope"}"#).unwrap();
//! assert_eq!(back, Either::left("nope".to_string()));
//! # }
//! ```

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Either, Maybe, NonEmptyVec, Validation};

// A field that is `None` only when missing; an explicit `null` is handed to
// `V` so nullable payloads round-trip.
fn present<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    V::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>, T: Deserialize<'de>"))]
struct EitherRecord<E, T> {
    ok: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    #[serde(default, deserialize_with = "present")]
    error: Option<E>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>, T: Deserialize<'de>"))]
struct ValidationRecord<E, T> {
    ok: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    #[serde(default)]
    errors: Option<Vec<E>>,
}

impl<E, T> Serialize for Either<E, T>
where
    E: Serialize,
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Either", 2)?;
        match self {
            Either::Right(value) => {
                record.serialize_field("ok", &true)?;
                record.serialize_field("value", value)?;
            }
            Either::Left(error) => {
                record.serialize_field("ok", &false)?;
                record.serialize_field("error", error)?;
            }
        }
        record.end()
    }
}

impl<'de, E, T> Deserialize<'de> for Either<E, T>
where
    E: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match EitherRecord::<E, T>::deserialize(deserializer)? {
            EitherRecord {
                ok: true,
                value: Some(value),
                ..
            } => Ok(Either::Right(value)),
            EitherRecord {
                ok: false,
                error: Some(error),
                ..
            } => Ok(Either::Left(error)),
            EitherRecord { ok: true, .. } => Err(D::Error::missing_field("value")),
            EitherRecord { ok: false, .. } => Err(D::Error::missing_field("error")),
        }
    }
}

impl<E, T> Serialize for Validation<E, T>
where
    E: Serialize,
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Validation", 2)?;
        match self {
            Validation::Valid(value) => {
                record.serialize_field("ok", &true)?;
                record.serialize_field("value", value)?;
            }
            Validation::Invalid(errors) => {
                record.serialize_field("ok", &false)?;
                record.serialize_field("errors", errors)?;
            }
        }
        record.end()
    }
}

impl<'de, E, T> Deserialize<'de> for Validation<E, T>
where
    E: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ValidationRecord::<E, T>::deserialize(deserializer)? {
            ValidationRecord {
                ok: true,
                value: Some(value),
                ..
            } => Ok(Validation::Valid(value)),
            ValidationRecord {
                ok: false,
                errors: Some(errors),
                ..
            } => NonEmptyVec::from_vec(errors)
                .map(Validation::Invalid)
                .ok_or_else(|| D::Error::invalid_length(0, &"at least one error")),
            ValidationRecord { ok: true, .. } => Err(D::Error::missing_field("value")),
            ValidationRecord { ok: false, .. } => Err(D::Error::missing_field("errors")),
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_option)
    }
}

impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| D::Error::invalid_length(0, &"a non-empty sequence"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Receipt {
        order: u32,
        charge: Either<String, u64>,
        coupon: Maybe<String>,
    }

    #[test]
    fn test_either_records() {
        let right = Either::<String, i32>::right(5);
        assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"ok":true,"value":5}"#);

        let left = Either::<String, i32>::left("nope".to_string());
        assert_eq!(
            serde_json::to_string(&left).unwrap(),
            r#"{"ok":false,"error":"nope"}"#
        );

        let back: Either<String, i32> =
            serde_json::from_str(r#"{"ok":false,"error":"nope"}"#).unwrap();
        assert_eq!(back, left);
    }

    #[test]
    fn test_either_missing_payload_is_rejected() {
        let result: Result<Either<String, i32>, _> = serde_json::from_str(r#"{"ok":true}"#);
        assert!(result.is_err());

        let result: Result<Either<String, i32>, _> =
            serde_json::from_str(r#"{"ok":false,"value":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_either_with_nullable_value() {
        let absent = Either::<String, Maybe<i32>>::right(Maybe::none());
        let json = serde_json::to_string(&absent).unwrap();
        assert_eq!(json, r#"{"ok":true,"value":null}"#);
        let back: Either<String, Maybe<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, absent);
    }

    #[test]
    fn test_validation_records() {
        let invalid = Validation::<&str, i32>::invalid("e1").zip(Validation::<&str, i32>::invalid("e2"));
        assert_eq!(
            serde_json::to_string(&invalid).unwrap(),
            r#"{"ok":false,"errors":["e1","e2"]}"#
        );

        let valid = Validation::<String, i32>::valid(3);
        assert_eq!(serde_json::to_string(&valid).unwrap(), r#"{"ok":true,"value":3}"#);

        let back: Validation<String, i32> =
            serde_json::from_str(r#"{"ok":false,"errors":["a","b"]}"#).unwrap();
        assert_eq!(
            back,
            Validation::invalid_many(NonEmptyVec::new("a".to_string(), vec!["b".to_string()]))
        );
    }

    #[test]
    fn test_validation_with_empty_errors_is_rejected() {
        let result: Result<Validation<String, i32>, _> =
            serde_json::from_str(r#"{"ok":false,"errors":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_nonempty_vec() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(serde_json::to_string(&nev).unwrap(), "[1,2,3]");
        assert!(serde_json::from_str::<NonEmptyVec<i32>>("[]").is_err());
        assert_eq!(serde_json::from_str::<NonEmptyVec<i32>>("[1]").unwrap(), NonEmptyVec::singleton(1));
    }

    #[test]
    fn test_nested_in_struct() {
        let receipt = Receipt {
            order: 9,
            charge: Either::right(1250),
            coupon: Maybe::none(),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        assert_eq!(
            json,
            r#"{"order":9,"charge":{"ok":true,"value":1250},"coupon":null}"#
        );
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }
}
