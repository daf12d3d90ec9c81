//! Tagged-union encoding and decoding over keyed JSON containers.
//!
//! A union picks one of three discriminator conventions:
//!
//! - [`IntegerTag`]: a reserved key holds the variant's code.
//! - [`KeyPresence`]: each variant owns its keys; candidates are tried in
//!   declared order.
//! - [`EitherKeys`] / [`Either`]: a two-way envelope over caller-supplied
//!   payload types.
//!
//! Payload types implement [`Codable`]. Unions implement [`UnionCodec`] and
//! become payloads themselves through [`impl_codable_union!`].
//!
//! ```
//! use sumcodec::{
//!     impl_codable_union, ContainerError, DecodeError, IntegerTag, KeyedRead, KeyedWrite,
//!     UnionCodec,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! enum UserAuth {
//!     FirstName(Option<String>),
//!     LastName(Option<String>),
//! }
//!
//! const LAYOUT: IntegerTag = IntegerTag::new("UserAuth", "rawValue", &["firstName", "lastName"]);
//!
//! impl UnionCodec for UserAuth {
//!     const NAME: &'static str = "UserAuth";
//!
//!     fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
//!         match self {
//!             UserAuth::FirstName(name) => {
//!                 LAYOUT.write_tag(out, 0)?;
//!                 out.encode_if_present("associatedType", name.as_ref())
//!             }
//!             UserAuth::LastName(name) => {
//!                 LAYOUT.write_tag(out, 1)?;
//!                 out.encode_if_present("associatedType", name.as_ref())
//!             }
//!         }
//!     }
//!
//!     fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
//!         let tagged = LAYOUT.read(input)?;
//!         match tagged.code() {
//!             0 => Ok(UserAuth::FirstName(tagged.optional("associatedType")?)),
//!             1 => Ok(UserAuth::LastName(tagged.optional("associatedType")?)),
//!             _ => Err(tagged.unrecognized()),
//!         }
//!     }
//! }
//!
//! impl_codable_union!(UserAuth);
//!
//! let text = sumcodec::to_string(&UserAuth::FirstName(None)).unwrap();
//! assert_eq!(text, r#"{"rawValue":0}"#);
//! let back: UserAuth = sumcodec::from_str(&text).unwrap();
//! assert_eq!(back, UserAuth::FirstName(None));
//! ```

pub mod codable;
pub mod codec;
pub mod container;
pub mod either;
pub mod error;
pub mod integer_tag;
pub mod key_presence;
pub mod matcher;
pub mod raw_value;

pub use codable::{Codable, Serde};
pub use codec::{
    decode, decode_nested, encode, encode_nested, from_slice, from_str, from_value, to_string,
    to_string_with, to_value, to_vec, to_vec_with, Style, UnionCodec,
};
pub use container::{KeyedRead, KeyedWrite, ObjectContainer, ObjectView};
pub use either::{Either, EitherKeys};
pub use error::{ContainerError, DecodeError, Evidence, ValueError, ROOT_KEY};
pub use integer_tag::{IntegerTag, Tagged};
pub use key_presence::KeyPresence;
pub use matcher::{Miss, Probe, Trial};
pub use raw_value::{decode_raw, encode_raw, RawValue};
pub use serde_json::Value;
