//! Trial matchers: one decode attempt per candidate variant.
//!
//! A trial ends in exactly one of three states. [`Trial::NoMatch`] means the
//! candidate's discriminating key is absent or has the wrong shape, and the
//! caller moves on to the next candidate. [`Trial::Failed`] is a hard error and
//! stops decoding.

use crate::codable::Codable;
use crate::container::KeyedRead;
use crate::error::{ContainerError, DecodeError};

/// Outcome of a single candidate trial.
#[derive(Debug)]
pub enum Trial<T> {
    Matched(T),
    NoMatch(ContainerError),
    Failed(DecodeError),
}

impl<T> Trial<T> {
    pub fn is_match(&self) -> bool {
        matches!(self, Trial::Matched(_))
    }
}

/// Early exit from a candidate probe.
///
/// Probe closures return `Result<T, Miss>` so they can use `?`; the driver
/// turns that result into a [`Trial`].
#[derive(Debug)]
pub enum Miss {
    NoMatch(ContainerError),
    Hard(DecodeError),
}

impl From<DecodeError> for Miss {
    fn from(err: DecodeError) -> Self {
        Miss::Hard(err)
    }
}

impl<T> From<Result<T, Miss>> for Trial<T> {
    fn from(result: Result<T, Miss>) -> Self {
        match result {
            Ok(value) => Trial::Matched(value),
            Err(Miss::NoMatch(reason)) => Trial::NoMatch(reason),
            Err(Miss::Hard(err)) => Trial::Failed(err),
        }
    }
}

/// Read access handed to a candidate probe.
///
/// The first key a candidate declares is its discriminating key. Failing to
/// read it is a no-match; once it has been read, every other slot belongs to
/// this variant and a malformed slot is a [`DecodeError::MissingPayload`].
pub struct Probe<'r, R: ?Sized> {
    input: &'r R,
    union: &'static str,
    variant: &'static str,
    keys: &'r [&'static str],
}

impl<'r, R: KeyedRead + ?Sized> Probe<'r, R> {
    pub(crate) fn new(
        input: &'r R,
        union: &'static str,
        variant: &'static str,
        keys: &'r [&'static str],
    ) -> Self {
        Self {
            input,
            union,
            variant,
            keys,
        }
    }

    pub fn variant(&self) -> &'static str {
        self.variant
    }

    fn discriminating_key(&self) -> &'static str {
        self.keys.first().copied().unwrap_or(self.variant)
    }

    /// Reads the discriminating key as `T`.
    pub fn discriminator<T: Codable>(&self) -> Result<T, Miss> {
        self.input
            .decode(self.discriminating_key())
            .map_err(|err| self.classify(err))
    }

    /// Checks the `true` sentinel written for payload-less variants.
    pub fn flag(&self) -> Result<(), Miss> {
        let key = self.discriminating_key();
        if self.discriminator::<bool>()? {
            Ok(())
        } else {
            Err(Miss::NoMatch(ContainerError::TypeMismatch {
                key: key.to_owned(),
                expected: "true",
                found: "false",
            }))
        }
    }

    /// Reads a required secondary slot of this variant.
    pub fn required<T: Codable>(&self, key: &str) -> Result<T, Miss> {
        debug_assert!(self.declares(key), "undeclared key `{key}`");
        self.input.decode(key).map_err(|err| self.missing(err))
    }

    /// Reads an optional secondary slot of this variant.
    pub fn optional<T: Codable>(&self, key: &str) -> Result<Option<T>, Miss> {
        debug_assert!(self.declares(key), "undeclared key `{key}`");
        self.input
            .decode_if_present(key)
            .map_err(|err| self.missing(err))
    }

    fn declares(&self, key: &str) -> bool {
        self.keys.iter().any(|declared| *declared == key)
    }

    fn classify(&self, err: ContainerError) -> Miss {
        if err.is_structural() {
            Miss::NoMatch(err)
        } else {
            Miss::Hard(DecodeError::Container(err))
        }
    }

    fn missing(&self, err: ContainerError) -> Miss {
        if err.is_structural() {
            Miss::Hard(DecodeError::MissingPayload {
                union: self.union,
                variant: self.variant,
                source: err,
            })
        } else {
            Miss::Hard(DecodeError::Container(err))
        }
    }
}
