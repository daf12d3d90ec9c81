//! Planets stored as their bare order from the sun, starting at 1.

use sumcodec::{impl_codable_raw, RawValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Mercury = 1,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];
}

impl RawValue for Planet {
    const NAME: &'static str = "Planet";

    fn raw_value(&self) -> i64 {
        *self as i64
    }

    fn from_raw_value(raw: i64) -> Option<Self> {
        Planet::ALL.into_iter().find(|planet| *planet as i64 == raw)
    }
}

impl_codable_raw!(Planet);
