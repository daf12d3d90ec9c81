//! One required payload shared by every variant.

use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, IntegerTag, KeyedRead, KeyedWrite,
    UnionCodec,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoginUser {
    FirstName(String),
    LastName(String),
}

pub const LAYOUT: IntegerTag = IntegerTag::new("LoginUser", "rawValue", &["firstName", "lastName"]);

/// Key of the payload slot.
pub const PAYLOAD_KEY: &str = "associatedType";

impl UnionCodec for LoginUser {
    const NAME: &'static str = "LoginUser";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            LoginUser::FirstName(name) => {
                LAYOUT.write_tag(out, 0)?;
                out.encode(PAYLOAD_KEY, name)
            }
            LoginUser::LastName(name) => {
                LAYOUT.write_tag(out, 1)?;
                out.encode(PAYLOAD_KEY, name)
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = LAYOUT.read(input)?;
        match tagged.code() {
            0 => Ok(LoginUser::FirstName(tagged.required(PAYLOAD_KEY)?)),
            1 => Ok(LoginUser::LastName(tagged.required(PAYLOAD_KEY)?)),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(LoginUser);
