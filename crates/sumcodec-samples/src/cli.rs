//! Shared logic of the `sumcodec-roundtrip` binary.

use sumcodec::{ContainerError, DecodeError, Style};
use thiserror::Error;

use crate::{
    Barcode, BarcodeFlag, BarcodeValue, CodableBarcode, LoginUser, Pair, Planet, State, User,
    UserAuth,
};

/// Document kinds accepted by `--kind`.
pub const KINDS: &[&str] = &[
    "user",
    "login-user",
    "user-auth",
    "codable-barcode",
    "barcode-flag",
    "barcode-value",
    "barcode",
    "state",
    "planet",
    "pair",
    "pairs",
];

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown kind `{0}`")]
    UnknownKind(String),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("encode failed: {0}")]
    Encode(#[from] ContainerError),
}

fn reencode<T: sumcodec::Codable>(input: &str, style: Style) -> Result<String, CliError> {
    let value: T = sumcodec::from_str(input)?;
    Ok(sumcodec::to_string_with(&value, style)?)
}

/// Decodes `input` as `kind` and encodes it back in `style`.
pub fn roundtrip(input: &str, kind: &str, style: Style) -> Result<String, CliError> {
    tracing::debug!(kind, bytes = input.len(), "round trip");
    match kind {
        "user" => reencode::<User>(input, style),
        "login-user" => reencode::<LoginUser>(input, style),
        "user-auth" => reencode::<UserAuth>(input, style),
        "codable-barcode" => reencode::<CodableBarcode>(input, style),
        "barcode-flag" => reencode::<BarcodeFlag>(input, style),
        "barcode-value" => reencode::<BarcodeValue>(input, style),
        "barcode" => reencode::<Barcode>(input, style),
        "state" => reencode::<State>(input, style),
        "planet" => reencode::<Planet>(input, style),
        "pair" => reencode::<Pair>(input, style),
        "pairs" => reencode::<Vec<Pair>>(input, style),
        other => Err(CliError::UnknownKind(other.to_owned())),
    }
}
