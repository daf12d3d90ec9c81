//! Optional payloads: an empty slot leaves its key out of the document.

use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, IntegerTag, KeyedRead, KeyedWrite,
    UnionCodec,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserAuth {
    FirstName(Option<String>),
    LastName(Option<String>),
}

pub const LAYOUT: IntegerTag = IntegerTag::new("UserAuth", "rawValue", &["firstName", "lastName"]);

pub const PAYLOAD_KEY: &str = "associatedType";

impl UnionCodec for UserAuth {
    const NAME: &'static str = "UserAuth";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            UserAuth::FirstName(name) => {
                LAYOUT.write_tag(out, 0)?;
                out.encode_if_present(PAYLOAD_KEY, name.as_ref())
            }
            UserAuth::LastName(name) => {
                LAYOUT.write_tag(out, 1)?;
                out.encode_if_present(PAYLOAD_KEY, name.as_ref())
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = LAYOUT.read(input)?;
        match tagged.code() {
            0 => Ok(UserAuth::FirstName(tagged.optional(PAYLOAD_KEY)?)),
            1 => Ok(UserAuth::LastName(tagged.optional(PAYLOAD_KEY)?)),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(UserAuth);
