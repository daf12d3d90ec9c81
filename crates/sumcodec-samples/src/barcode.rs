//! Barcodes, encoded four ways.
//!
//! - [`CodableBarcode`]: payload-less, integer tag.
//! - [`BarcodeFlag`]: payload-less, key presence with a `true` sentinel under
//!   each variant's own key.
//! - [`BarcodeValue`]: one payload per variant, key presence.
//! - [`Barcode`]: a four-slot variant next to a one-slot variant, integer tag.

use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, IntegerTag, KeyPresence, KeyedRead,
    KeyedWrite, UnionCodec,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodableBarcode {
    Upc,
    QrCode,
}

const CODABLE_LAYOUT: IntegerTag = IntegerTag::new("CodableBarcode", "rawValue", &["upc", "qrCode"]);

impl UnionCodec for CodableBarcode {
    const NAME: &'static str = "CodableBarcode";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            CodableBarcode::Upc => CODABLE_LAYOUT.write_tag(out, 0),
            CodableBarcode::QrCode => CODABLE_LAYOUT.write_tag(out, 1),
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = CODABLE_LAYOUT.read(input)?;
        match tagged.code() {
            0 => Ok(CodableBarcode::Upc),
            1 => Ok(CodableBarcode::QrCode),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(CodableBarcode);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFlag {
    Upc,
    QrCode,
}

impl UnionCodec for BarcodeFlag {
    const NAME: &'static str = "BarcodeFlag";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            BarcodeFlag::Upc => out.encode("upc", &true),
            BarcodeFlag::QrCode => out.encode("qrCode", &true),
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        KeyPresence::new(Self::NAME)
            .candidate("qrCode", &["qrCode"], |p| {
                p.flag()?;
                Ok(BarcodeFlag::QrCode)
            })
            .candidate("upc", &["upc"], |p| {
                p.flag()?;
                Ok(BarcodeFlag::Upc)
            })
            .decode(input)
    }
}

impl_codable_union!(BarcodeFlag);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BarcodeValue {
    Upc(i64),
    QrCode(String),
}

impl UnionCodec for BarcodeValue {
    const NAME: &'static str = "BarcodeValue";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            BarcodeValue::Upc(code) => out.encode("upc", code),
            BarcodeValue::QrCode(text) => out.encode("qrCode", text),
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        KeyPresence::new(Self::NAME)
            .candidate("upc", &["upc"], |p| Ok(BarcodeValue::Upc(p.discriminator()?)))
            .candidate("qrCode", &["qrCode"], |p| {
                Ok(BarcodeValue::QrCode(p.discriminator()?))
            })
            .decode(input)
    }
}

impl_codable_union!(BarcodeValue);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Barcode {
    Upc(i64, i64, i64, i64),
    QrCode(String),
}

const LAYOUT: IntegerTag = IntegerTag::new("Barcode", "rawValue", &["upc", "qrCode"]);

/// Slot keys of [`Barcode::Upc`], in slot order.
pub const UPC_KEYS: [&str; 4] = ["numberSystem", "manufacturer", "product", "check"];

pub const QR_CODE_KEY: &str = "qrCode";

impl UnionCodec for Barcode {
    const NAME: &'static str = "Barcode";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            Barcode::Upc(system, manufacturer, product, check) => {
                LAYOUT.write_tag(out, 0)?;
                for (key, slot) in UPC_KEYS.iter().zip([system, manufacturer, product, check]) {
                    out.encode(key, slot)?;
                }
                Ok(())
            }
            Barcode::QrCode(text) => {
                LAYOUT.write_tag(out, 1)?;
                out.encode(QR_CODE_KEY, text)
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = LAYOUT.read(input)?;
        match tagged.code() {
            0 => {
                let [system, manufacturer, product, check] = UPC_KEYS;
                Ok(Barcode::Upc(
                    tagged.required(system)?,
                    tagged.required(manufacturer)?,
                    tagged.required(product)?,
                    tagged.required(check)?,
                ))
            }
            1 => Ok(Barcode::QrCode(tagged.required(QR_CODE_KEY)?)),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(Barcode);
