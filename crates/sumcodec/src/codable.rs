//! The payload capability: conversion of a Rust value to and from a JSON tree.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::ValueError;

/// A type that can be stored in a keyed container.
///
/// Implemented for the JSON primitives, strings, `Option`, `Vec`, string-keyed
/// maps and `serde_json::Value`. Unions opt in through
/// [`impl_codable_union!`](crate::impl_codable_union) and raw-value enums
/// through [`impl_codable_raw!`](crate::impl_codable_raw).
pub trait Codable: Sized {
    fn encode_value(&self) -> Result<Value, ValueError>;
    fn decode_value(value: &Value) -> Result<Self, ValueError>;
}

impl Codable for bool {
    fn encode_value(&self) -> Result<Value, ValueError> {
        Ok(Value::Bool(*self))
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_bool()
            .ok_or_else(|| ValueError::mismatch("bool", value))
    }
}

macro_rules! codable_signed {
    ($($ty:ty),*) => {$(
        impl Codable for $ty {
            fn encode_value(&self) -> Result<Value, ValueError> {
                Ok(Value::from(*self))
            }

            fn decode_value(value: &Value) -> Result<Self, ValueError> {
                let wide = value
                    .as_i64()
                    .ok_or_else(|| ValueError::mismatch(stringify!($ty), value))?;
                <$ty>::try_from(wide).map_err(|_| ValueError::Mismatch {
                    expected: stringify!($ty),
                    found: "out-of-range number",
                })
            }
        }
    )*};
}

macro_rules! codable_unsigned {
    ($($ty:ty),*) => {$(
        impl Codable for $ty {
            fn encode_value(&self) -> Result<Value, ValueError> {
                Ok(Value::from(*self))
            }

            fn decode_value(value: &Value) -> Result<Self, ValueError> {
                let wide = value
                    .as_u64()
                    .ok_or_else(|| ValueError::mismatch(stringify!($ty), value))?;
                <$ty>::try_from(wide).map_err(|_| ValueError::Mismatch {
                    expected: stringify!($ty),
                    found: "out-of-range number",
                })
            }
        }
    )*};
}

codable_signed!(i8, i16, i32, i64);
codable_unsigned!(u8, u16, u32, u64);

impl Codable for f64 {
    fn encode_value(&self) -> Result<Value, ValueError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(ValueError::NonFinite(*self))
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_f64()
            .ok_or_else(|| ValueError::mismatch("f64", value))
    }
}

impl Codable for f32 {
    fn encode_value(&self) -> Result<Value, ValueError> {
        f64::from(*self).encode_value()
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        let wide = value
            .as_f64()
            .ok_or_else(|| ValueError::mismatch("f32", value))?;
        let narrow = wide as f32;
        if narrow.is_finite() {
            Ok(narrow)
        } else {
            Err(ValueError::Mismatch {
                expected: "f32",
                found: "out-of-range number",
            })
        }
    }
}

impl Codable for String {
    fn encode_value(&self) -> Result<Value, ValueError> {
        Ok(Value::String(self.clone()))
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ValueError::mismatch("string", value))
    }
}

impl Codable for Value {
    fn encode_value(&self) -> Result<Value, ValueError> {
        Ok(self.clone())
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

/// `None` maps to `null`. Optional payload *slots* are omitted instead, see
/// [`KeyedWrite::encode_if_present`](crate::KeyedWrite::encode_if_present).
impl<T: Codable> Codable for Option<T> {
    fn encode_value(&self) -> Result<Value, ValueError> {
        match self {
            Some(inner) => inner.encode_value(),
            None => Ok(Value::Null),
        }
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::decode_value(other).map(Some),
        }
    }
}

impl<T: Codable> Codable for Vec<T> {
    fn encode_value(&self) -> Result<Value, ValueError> {
        self.iter()
            .map(Codable::encode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        let items = value
            .as_array()
            .ok_or_else(|| ValueError::mismatch("array", value))?;
        items.iter().map(T::decode_value).collect()
    }
}

impl<T: Codable> Codable for BTreeMap<String, T> {
    fn encode_value(&self) -> Result<Value, ValueError> {
        let mut map = Map::new();
        for (key, item) in self {
            map.insert(key.clone(), item.encode_value()?);
        }
        Ok(Value::Object(map))
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        let map = value
            .as_object()
            .ok_or_else(|| ValueError::mismatch("object", value))?;
        map.iter()
            .map(|(key, item)| Ok((key.clone(), T::decode_value(item)?)))
            .collect()
    }
}

/// Adapter that stores any serde type as a payload.
///
/// `serde_json` turns non-finite floats into `null` instead of rejecting
/// them, so prefer the native impls for float payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Serde<T>(pub T);

impl<T> Serde<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize + DeserializeOwned> Codable for Serde<T> {
    fn encode_value(&self) -> Result<Value, ValueError> {
        Ok(serde_json::to_value(&self.0)?)
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        Ok(serde_json::from_value(value.clone()).map(Serde)?)
    }
}
