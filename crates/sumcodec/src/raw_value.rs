//! Payload-less enums stored as a bare integer code.

use serde_json::Value;

use crate::codable::Codable;
use crate::error::{DecodeError, Evidence, ValueError};
use crate::integer_tag::oversized_code;

/// An enum whose variants map one-to-one onto integer codes.
///
/// Codes need not start at 0 or be contiguous.
pub trait RawValue: Sized {
    const NAME: &'static str;

    fn raw_value(&self) -> i64;

    fn from_raw_value(raw: i64) -> Option<Self>;
}

pub fn encode_raw<T: RawValue>(value: &T) -> Result<Value, ValueError> {
    value.raw_value().encode_value()
}

pub fn decode_raw<T: RawValue>(value: &Value) -> Result<T, ValueError> {
    let raw = match i64::decode_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            return Err(match oversized_code(Some(value)) {
                Some(code) => unrecognized::<T>(Evidence::LargeCode(code)),
                None => err,
            })
        }
    };
    T::from_raw_value(raw).ok_or_else(|| unrecognized::<T>(Evidence::Code(raw)))
}

fn unrecognized<T: RawValue>(evidence: Evidence) -> ValueError {
    ValueError::Union(Box::new(DecodeError::UnrecognizedDiscriminator {
        union: T::NAME,
        evidence,
    }))
}

/// Implements [`Codable`] for a [`RawValue`] type.
#[macro_export]
macro_rules! impl_codable_raw {
    ($ty:ty) => {
        impl $crate::Codable for $ty {
            fn encode_value(&self) -> ::std::result::Result<$crate::Value, $crate::ValueError> {
                $crate::encode_raw(self)
            }

            fn decode_value(
                value: &$crate::Value,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                $crate::decode_raw(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Weekday {
        Mon = 1,
        Tue,
    }

    impl RawValue for Weekday {
        const NAME: &'static str = "Weekday";

        fn raw_value(&self) -> i64 {
            *self as i64
        }

        fn from_raw_value(raw: i64) -> Option<Self> {
            match raw {
                1 => Some(Weekday::Mon),
                2 => Some(Weekday::Tue),
                _ => None,
            }
        }
    }

    crate::impl_codable_raw!(Weekday);

    #[test]
    fn bare_integer_round_trip() {
        assert_eq!(Weekday::Tue.encode_value().unwrap(), json!(2));
        assert_eq!(Weekday::decode_value(&json!(1)).unwrap(), Weekday::Mon);
    }

    #[test]
    fn unknown_code_is_unrecognized() {
        let err = crate::from_value::<Weekday>(&json!(0)).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator {
                union: "Weekday",
                evidence: Evidence::Code(0)
            }
        ));
        assert!(Weekday::decode_value(&json!("Mon")).is_err());
        let err = crate::from_value::<Weekday>(&json!(u64::MAX)).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator {
                evidence: Evidence::LargeCode(code),
                ..
            } if code == u64::MAX
        ));
    }
}
