//! Error taxonomy shared by the container and the union codecs.

use thiserror::Error;

/// Key used in diagnostics when a value is read or written at the document
/// root rather than under a named field.
pub const ROOT_KEY: &str = "$";

/// Failure of a keyless [`Codable`](crate::Codable) conversion.
///
/// The container attaches the field name when it turns one of these into a
/// [`ContainerError`].
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("non-finite number {0} cannot be encoded")]
    NonFinite(f64),
    #[error("nested union: {0}")]
    Union(Box<DecodeError>),
    #[error("nested write rejected: {0}")]
    Write(Box<ContainerError>),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl ValueError {
    pub fn mismatch(expected: &'static str, found: &serde_json::Value) -> Self {
        ValueError::Mismatch {
            expected,
            found: kind_of(found),
        }
    }
}

/// Errors raised by a keyed container.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("key `{key}` is absent")]
    KeyAbsent { key: String },
    #[error("key `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("key `{key}`: non-finite number {value} cannot be encoded")]
    NonFinite { key: String, value: f64 },
    #[error("key `{key}` is already set")]
    DuplicateKey { key: String },
    #[error("expected an object container, found {found}")]
    NotAnObject { found: &'static str },
    #[error("key `{key}`: {source}")]
    Nested {
        key: String,
        #[source]
        source: Box<DecodeError>,
    },
    #[error("key `{key}`: {source}")]
    NestedWrite {
        key: String,
        #[source]
        source: Box<ContainerError>,
    },
    #[error("key `{key}`: {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("format error: {0}")]
    Format(#[from] serde_json::Error),
}

impl ContainerError {
    /// Attaches `key` to a keyless conversion failure.
    pub fn at(key: &str, err: ValueError) -> Self {
        let key = key.to_owned();
        match err {
            ValueError::Mismatch { expected, found } => ContainerError::TypeMismatch {
                key,
                expected,
                found,
            },
            ValueError::NonFinite(value) => ContainerError::NonFinite { key, value },
            ValueError::Union(source) => ContainerError::Nested { key, source },
            ValueError::Write(source) => ContainerError::NestedWrite { key, source },
            ValueError::Serde(source) => ContainerError::Serde { key, source },
        }
    }

    /// Returns `true` for failures that only say "this field does not have the
    /// expected shape": an absent key, a type mismatch, a serde payload of the
    /// wrong shape, or a nested union that did not decode.
    ///
    /// Key-presence decoding treats these as "candidate does not match". Every
    /// other error is a hard failure.
    pub fn is_structural(&self) -> bool {
        match self {
            ContainerError::KeyAbsent { .. } | ContainerError::TypeMismatch { .. } => true,
            ContainerError::Nested { source, .. } => source.is_structural(),
            ContainerError::Serde { source, .. } => source.is_data(),
            _ => false,
        }
    }

    /// The field this error concerns, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ContainerError::KeyAbsent { key }
            | ContainerError::TypeMismatch { key, .. }
            | ContainerError::NonFinite { key, .. }
            | ContainerError::DuplicateKey { key }
            | ContainerError::Nested { key, .. }
            | ContainerError::NestedWrite { key, .. }
            | ContainerError::Serde { key, .. } => Some(key),
            ContainerError::NotAnObject { .. } | ContainerError::Format(_) => None,
        }
    }
}

/// Evidence that failed to select a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// An integer code outside the declared range.
    Code(i64),
    /// An integer code too large for `i64`.
    LargeCode(u64),
    /// No key-presence candidate matched; lists the candidates in trial order.
    NoCandidate(Vec<&'static str>),
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evidence::Code(code) => write!(f, "code {code}"),
            Evidence::LargeCode(code) => write!(f, "code {code}"),
            Evidence::NoCandidate(tried) => write!(f, "none of [{}] matched", tried.join(", ")),
        }
    }
}

/// Errors raised while decoding a union.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{union}: unrecognized discriminator ({evidence})")]
    UnrecognizedDiscriminator {
        union: &'static str,
        evidence: Evidence,
    },
    #[error("{union}::{variant}: missing payload: {source}")]
    MissingPayload {
        union: &'static str,
        variant: &'static str,
        #[source]
        source: ContainerError,
    },
    #[error("{union}: key `{key}` is claimed by both `{first}` and `{second}`")]
    OverlappingKeys {
        union: &'static str,
        key: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error(transparent)]
    Container(#[from] ContainerError),
}

impl DecodeError {
    /// Whether this failure is shape evidence rather than a broken input or
    /// layout. A nested union failing this way is a plain mismatch for the
    /// union that contains it.
    pub fn is_structural(&self) -> bool {
        match self {
            DecodeError::UnrecognizedDiscriminator { .. } | DecodeError::MissingPayload { .. } => {
                true
            }
            DecodeError::OverlappingKeys { .. } => false,
            DecodeError::Container(err) => err.is_structural(),
        }
    }

    /// Lifts a keyless conversion failure at the document root.
    pub fn at_root(err: ValueError) -> Self {
        match err {
            ValueError::Union(inner) => *inner,
            other => DecodeError::Container(ContainerError::at(ROOT_KEY, other)),
        }
    }
}

/// Human readable name of a JSON value's kind.
pub fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
