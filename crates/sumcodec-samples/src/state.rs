//! Upload progress, discriminated by key presence.

use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, KeyPresence, KeyedRead, KeyedWrite,
    UnionCodec,
};

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Started,
    StoreAtFile { path: String },
    UploadFrom { path: String, percentage: f64 },
}

impl UnionCodec for State {
    const NAME: &'static str = "State";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            State::Started => out.encode("started", &true),
            State::StoreAtFile { path } => out.encode("storeAtFile", path),
            State::UploadFrom { path, percentage } => {
                out.encode("uploadFrom", path)?;
                out.encode("percentage", percentage)
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        KeyPresence::new(Self::NAME)
            .candidate("started", &["started"], |p| {
                p.flag()?;
                Ok(State::Started)
            })
            .candidate("storeAtFile", &["storeAtFile"], |p| {
                Ok(State::StoreAtFile {
                    path: p.discriminator()?,
                })
            })
            .candidate("uploadFrom", &["uploadFrom", "percentage"], |p| {
                Ok(State::UploadFrom {
                    path: p.discriminator()?,
                    percentage: p.required("percentage")?,
                })
            })
            .decode(input)
    }
}

impl_codable_union!(State);
