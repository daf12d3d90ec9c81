//! Keyed containers: the named-field read/write surface the union codecs work
//! against.

use serde_json::{Map, Value};

use crate::codable::Codable;
use crate::error::{kind_of, ContainerError};

/// Read side of a keyed container.
///
/// Reads borrow the container immutably, so a failed read never disturbs
/// what a later read sees.
pub trait KeyedRead {
    /// Raw lookup of a field.
    fn get(&self, key: &str) -> Option<&Value>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Reads a required field.
    ///
    /// Fails with [`ContainerError::KeyAbsent`] or
    /// [`ContainerError::TypeMismatch`].
    fn decode<T: Codable>(&self, key: &str) -> Result<T, ContainerError> {
        let value = self.get(key).ok_or_else(|| ContainerError::KeyAbsent {
            key: key.to_owned(),
        })?;
        T::decode_value(value).map_err(|err| ContainerError::at(key, err))
    }

    /// Reads an optional field. An absent key or an explicit `null` yields
    /// `None`; only a present value of the wrong type fails.
    fn decode_if_present<T: Codable>(&self, key: &str) -> Result<Option<T>, ContainerError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode_value(value)
                .map(Some)
                .map_err(|err| ContainerError::at(key, err)),
        }
    }
}

/// Write side of a keyed container.
pub trait KeyedWrite {
    /// Adds a raw field. Fails with [`ContainerError::DuplicateKey`] if the
    /// key was already written.
    fn insert(&mut self, key: &str, value: Value) -> Result<(), ContainerError>;

    fn encode<T: Codable>(&mut self, key: &str, value: &T) -> Result<(), ContainerError> {
        let value = value
            .encode_value()
            .map_err(|err| ContainerError::at(key, err))?;
        self.insert(key, value)
    }

    /// Writes `value` if present; leaves the key absent otherwise.
    fn encode_if_present<T: Codable>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), ContainerError> {
        match value {
            Some(value) => self.encode(key, value),
            None => Ok(()),
        }
    }
}

/// A keyed container over an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectContainer {
    fields: Map<String, Value>,
}

impl ObjectContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ContainerError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ContainerError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl KeyedRead for ObjectContainer {
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl KeyedWrite for ObjectContainer {
    fn insert(&mut self, key: &str, value: Value) -> Result<(), ContainerError> {
        if self.fields.contains_key(key) {
            return Err(ContainerError::DuplicateKey {
                key: key.to_owned(),
            });
        }
        self.fields.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Read-only view over a borrowed JSON object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectView<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ObjectView<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ContainerError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ContainerError::NotAnObject {
                found: kind_of(other),
            }),
        }
    }
}

impl KeyedRead for ObjectView<'_> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
