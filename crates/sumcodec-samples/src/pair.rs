//! Mutually exclusive events over caller-chosen payload types.

use sumcodec::Either;

/// A name or an age.
pub type Pair = Either<String, i64>;

/// Sample list used by the round-trip binary's `pairs` kind.
pub fn sample_pairs() -> Vec<Pair> {
    vec![Either::First("Gagan".to_owned()), Either::Second(31)]
}
