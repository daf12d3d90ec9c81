//! The union codec seam and the byte-level entry points.

use serde_json::Value;

use crate::codable::Codable;
use crate::container::{KeyedRead, KeyedWrite, ObjectContainer, ObjectView};
use crate::error::{kind_of, ContainerError, DecodeError, ValueError, ROOT_KEY};

/// A union type with an encoder and a decoder against keyed containers.
///
/// Implementations match exhaustively over their variants in `encode_into`
/// and pick one discriminator convention: [`IntegerTag`](crate::IntegerTag),
/// [`KeyPresence`](crate::KeyPresence) or [`EitherKeys`](crate::EitherKeys).
pub trait UnionCodec: Sized {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Adds this value's discriminator and payload keys to `out`.
    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError>;

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError>;
}

/// Encodes `value` into a fresh container.
pub fn encode<U: UnionCodec>(value: &U) -> Result<ObjectContainer, ContainerError> {
    let mut out = ObjectContainer::new();
    value.encode_into(&mut out)?;
    Ok(out)
}

pub fn decode<U: UnionCodec, R: KeyedRead + ?Sized>(input: &R) -> Result<U, DecodeError> {
    U::decode_from(input)
}

/// [`Codable::encode_value`] for a union stored as a nested object.
pub fn encode_nested<U: UnionCodec>(value: &U) -> Result<Value, ValueError> {
    encode(value)
        .map(ObjectContainer::into_value)
        .map_err(|err| ValueError::Write(Box::new(err)))
}

/// [`Codable::decode_value`] for a union stored as a nested object.
pub fn decode_nested<U: UnionCodec>(value: &Value) -> Result<U, ValueError> {
    let view = ObjectView::new(value).map_err(|_| ValueError::Mismatch {
        expected: U::NAME,
        found: kind_of(value),
    })?;
    U::decode_from(&view).map_err(|err| ValueError::Union(Box::new(err)))
}

/// Implements [`Codable`] for a [`UnionCodec`] type so it can be a payload,
/// a list item, or a top-level document.
///
/// Type parameters get a `Codable` bound:
/// `impl_codable_union!(Pair<A, B>)`.
#[macro_export]
macro_rules! impl_codable_union {
    ($ty:ident $(< $($param:ident),+ >)?) => {
        impl $(< $($param: $crate::Codable),+ >)? $crate::Codable for $ty $(< $($param),+ >)? {
            fn encode_value(&self) -> ::std::result::Result<$crate::Value, $crate::ValueError> {
                $crate::encode_nested(self)
            }

            fn decode_value(
                value: &$crate::Value,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                $crate::decode_nested(value)
            }
        }
    };
}

/// Output layout of the byte-level entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Compact,
    Pretty,
}

pub fn to_value<T: Codable>(value: &T) -> Result<Value, ContainerError> {
    value
        .encode_value()
        .map_err(|err| ContainerError::at(ROOT_KEY, err))
}

pub fn from_value<T: Codable>(value: &Value) -> Result<T, DecodeError> {
    T::decode_value(value).map_err(DecodeError::at_root)
}

pub fn to_vec_with<T: Codable>(value: &T, style: Style) -> Result<Vec<u8>, ContainerError> {
    let tree = to_value(value)?;
    let bytes = match style {
        Style::Compact => serde_json::to_vec(&tree)?,
        Style::Pretty => serde_json::to_vec_pretty(&tree)?,
    };
    Ok(bytes)
}

/// Serializes `value` to compact JSON bytes.
pub fn to_vec<T: Codable>(value: &T) -> Result<Vec<u8>, ContainerError> {
    to_vec_with(value, Style::Compact)
}

pub fn to_string_with<T: Codable>(value: &T, style: Style) -> Result<String, ContainerError> {
    let tree = to_value(value)?;
    let text = match style {
        Style::Compact => serde_json::to_string(&tree)?,
        Style::Pretty => serde_json::to_string_pretty(&tree)?,
    };
    Ok(text)
}

pub fn to_string<T: Codable>(value: &T) -> Result<String, ContainerError> {
    to_string_with(value, Style::Compact)
}

/// Parses JSON bytes and decodes them as `T`.
pub fn from_slice<T: Codable>(bytes: &[u8]) -> Result<T, DecodeError> {
    let tree: Value = serde_json::from_slice(bytes).map_err(ContainerError::from)?;
    from_value(&tree)
}

pub fn from_str<T: Codable>(text: &str) -> Result<T, DecodeError> {
    let tree: Value = serde_json::from_str(text).map_err(ContainerError::from)?;
    from_value(&tree)
}
