//! Explicit integer tags.
//!
//! A reserved key holds the variant's code; codes follow declaration order
//! starting at 0. Payload slots live under fixed keys next to the tag.

use serde_json::Value;

use crate::codable::Codable;
use crate::container::{KeyedRead, KeyedWrite};
use crate::error::{ContainerError, DecodeError, Evidence};

/// Layout of an integer-tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerTag {
    pub union: &'static str,
    pub tag_key: &'static str,
    /// Variant names in declaration order; a variant's code is its index.
    pub variants: &'static [&'static str],
}

impl IntegerTag {
    pub const fn new(
        union: &'static str,
        tag_key: &'static str,
        variants: &'static [&'static str],
    ) -> Self {
        Self {
            union,
            tag_key,
            variants,
        }
    }

    /// Writes the tag for the variant at `code`.
    pub fn write_tag<W: KeyedWrite + ?Sized>(
        &self,
        out: &mut W,
        code: usize,
    ) -> Result<(), ContainerError> {
        debug_assert!(
            code < self.variants.len(),
            "{}: no variant with code {code}",
            self.union
        );
        out.encode(self.tag_key, &(code as i64))
    }

    /// Reads and range-checks the tag.
    ///
    /// An absent or non-integer tag is passed through as a container error;
    /// an integer outside the declared range, including one beyond `i64`, is
    /// [`DecodeError::UnrecognizedDiscriminator`].
    pub fn read<'r, R: KeyedRead + ?Sized>(
        &self,
        input: &'r R,
    ) -> Result<Tagged<'r, R>, DecodeError> {
        let raw: i64 = match input.decode(self.tag_key) {
            Ok(raw) => raw,
            Err(err) => {
                return Err(match oversized_code(input.get(self.tag_key)) {
                    Some(code) => self.unknown(Evidence::LargeCode(code)),
                    None => err.into(),
                })
            }
        };
        let code = usize::try_from(raw)
            .ok()
            .filter(|code| *code < self.variants.len())
            .ok_or_else(|| self.unknown(Evidence::Code(raw)))?;
        tracing::trace!(union = self.union, variant = self.variants[code], "tag read");
        Ok(Tagged {
            layout: *self,
            code,
            input,
        })
    }

    fn unknown(&self, evidence: Evidence) -> DecodeError {
        tracing::debug!(union = self.union, %evidence, "unknown tag");
        DecodeError::UnrecognizedDiscriminator {
            union: self.union,
            evidence,
        }
    }
}

/// An integer that only fits in `u64`.
pub(crate) fn oversized_code(value: Option<&Value>) -> Option<u64> {
    value
        .and_then(Value::as_u64)
        .filter(|code| i64::try_from(*code).is_err())
}

/// A container whose tag has been read and validated.
pub struct Tagged<'r, R: ?Sized> {
    layout: IntegerTag,
    code: usize,
    input: &'r R,
}

impl<R: KeyedRead + ?Sized> Tagged<'_, R> {
    pub fn code(&self) -> usize {
        self.code
    }

    pub fn variant(&self) -> &'static str {
        self.layout.variants[self.code]
    }

    /// Reads a required payload slot; absence or a mismatch is
    /// [`DecodeError::MissingPayload`].
    pub fn required<T: Codable>(&self, key: &str) -> Result<T, DecodeError> {
        self.input.decode(key).map_err(|err| self.missing(err))
    }

    /// Reads an optional payload slot; an absent key is `None`.
    pub fn optional<T: Codable>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        self.input
            .decode_if_present(key)
            .map_err(|err| self.missing(err))
    }

    /// Error for a code the decoder's `match` does not handle.
    pub fn unrecognized(&self) -> DecodeError {
        DecodeError::UnrecognizedDiscriminator {
            union: self.layout.union,
            evidence: Evidence::Code(self.code as i64),
        }
    }

    fn missing(&self, err: ContainerError) -> DecodeError {
        if err.is_structural() {
            DecodeError::MissingPayload {
                union: self.layout.union,
                variant: self.variant(),
                source: err,
            }
        } else {
            DecodeError::Container(err)
        }
    }
}
