//! Either/or envelope over two independent payload types.

use serde_json::Value;

use crate::codable::Codable;
use crate::codec::{decode_nested, encode_nested, UnionCodec};
use crate::container::{KeyedRead, KeyedWrite};
use crate::error::{ContainerError, DecodeError, ValueError};
use crate::key_presence::KeyPresence;

/// Keys of the two envelope slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EitherKeys {
    pub first: &'static str,
    pub second: &'static str,
}

impl EitherKeys {
    pub const fn new(first: &'static str, second: &'static str) -> Self {
        Self { first, second }
    }

    /// Writes `value` under the first key.
    pub fn encode_first<W, A>(&self, out: &mut W, value: &A) -> Result<(), ContainerError>
    where
        W: KeyedWrite + ?Sized,
        A: Codable,
    {
        out.encode(self.first, value)
    }

    /// Writes `value` under the second key.
    pub fn encode_second<W, B>(&self, out: &mut W, value: &B) -> Result<(), ContainerError>
    where
        W: KeyedWrite + ?Sized,
        B: Codable,
    {
        out.encode(self.second, value)
    }

    /// Tries the first key, then the second, and hands the winning payload to
    /// `first` or `second`.
    pub fn decode<R, A, B, T>(
        &self,
        union: &'static str,
        input: &R,
        first: impl Fn(A) -> T,
        second: impl Fn(B) -> T,
    ) -> Result<T, DecodeError>
    where
        R: KeyedRead + ?Sized,
        A: Codable,
        B: Codable,
    {
        KeyPresence::new(union)
            .candidate(self.first, std::slice::from_ref(&self.first), |p| {
                Ok(first(p.discriminator()?))
            })
            .candidate(self.second, std::slice::from_ref(&self.second), |p| {
                Ok(second(p.discriminator()?))
            })
            .decode(input)
    }
}

impl Default for EitherKeys {
    fn default() -> Self {
        Self::new("first", "second")
    }
}

/// A value of one of two caller-chosen types, stored under `first` or
/// `second`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Either<A, B> {
    First(A),
    Second(B),
}

impl<A: Codable, B: Codable> UnionCodec for Either<A, B> {
    const NAME: &'static str = "Either";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        let keys = EitherKeys::default();
        match self {
            Either::First(value) => keys.encode_first(out, value),
            Either::Second(value) => keys.encode_second(out, value),
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        EitherKeys::default().decode(Self::NAME, input, Either::First, Either::Second)
    }
}

impl<A: Codable, B: Codable> Codable for Either<A, B> {
    fn encode_value(&self) -> Result<Value, ValueError> {
        encode_nested(self)
    }

    fn decode_value(value: &Value) -> Result<Self, ValueError> {
        decode_nested(value)
    }
}
