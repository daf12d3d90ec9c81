//! Payload-less variants under an integer tag.

use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, IntegerTag, KeyedRead, KeyedWrite,
    UnionCodec,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum User {
    FirstName,
    LastName,
    FullName,
}

pub const LAYOUT: IntegerTag =
    IntegerTag::new("User", "myValue", &["firstName", "lastName", "fullName"]);

impl UnionCodec for User {
    const NAME: &'static str = "User";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        let code = match self {
            User::FirstName => 0,
            User::LastName => 1,
            User::FullName => 2,
        };
        LAYOUT.write_tag(out, code)
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = LAYOUT.read(input)?;
        match tagged.code() {
            0 => Ok(User::FirstName),
            1 => Ok(User::LastName),
            2 => Ok(User::FullName),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(User);
