//! Key-presence discrimination.
//!
//! Every variant owns a distinct set of keys; the first one is the variant's
//! discriminating key. Decoding runs the candidates in declaration order and
//! accepts the first whose discriminating key reads cleanly. When an input
//! carries the keys of several variants, the earliest candidate wins.

use crate::container::KeyedRead;
use crate::error::{DecodeError, Evidence};
use crate::matcher::{Miss, Probe, Trial};

type ProbeFn<'a, R, T> = Box<dyn Fn(&Probe<'_, R>) -> Result<T, Miss> + 'a>;

struct Candidate<'a, R: ?Sized, T> {
    variant: &'static str,
    keys: &'a [&'static str],
    probe: ProbeFn<'a, R, T>,
}

/// Ordered list of candidate matchers for one union type.
///
/// ```
/// use sumcodec::{KeyPresence, ObjectContainer};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Barcode {
///     Upc(i64),
///     QrCode(String),
/// }
///
/// let input = ObjectContainer::from_value(json!({"qrCode": "hello"})).unwrap();
/// let decoded = KeyPresence::<ObjectContainer, Barcode>::new("Barcode")
///     .candidate("upc", &["upc"], |p| Ok(Barcode::Upc(p.discriminator()?)))
///     .candidate("qrCode", &["qrCode"], |p| Ok(Barcode::QrCode(p.discriminator()?)))
///     .decode(&input)
///     .unwrap();
/// assert_eq!(decoded, Barcode::QrCode("hello".into()));
/// ```
pub struct KeyPresence<'a, R: ?Sized, T> {
    union: &'static str,
    candidates: Vec<Candidate<'a, R, T>>,
}

impl<'a, R: KeyedRead + ?Sized, T> KeyPresence<'a, R, T> {
    pub fn new(union: &'static str) -> Self {
        Self {
            union,
            candidates: Vec::new(),
        }
    }

    /// Appends a candidate. `keys` lists every key the variant writes,
    /// discriminating key first.
    pub fn candidate<F>(
        mut self,
        variant: &'static str,
        keys: &'a [&'static str],
        probe: F,
    ) -> Self
    where
        F: Fn(&Probe<'_, R>) -> Result<T, Miss> + 'a,
    {
        self.candidates.push(Candidate {
            variant,
            keys,
            probe: Box::new(probe),
        });
        self
    }

    /// Candidate names in trial order.
    pub fn order(&self) -> Vec<&'static str> {
        self.candidates.iter().map(|c| c.variant).collect()
    }

    /// Checks that no key is claimed by two candidates.
    pub fn validate(&self) -> Result<(), DecodeError> {
        for (i, first) in self.candidates.iter().enumerate() {
            for second in &self.candidates[i + 1..] {
                let shared = first.keys.iter().copied().find(|key| second.keys.contains(key));
                if let Some(key) = shared {
                    return Err(DecodeError::OverlappingKeys {
                        union: self.union,
                        key,
                        first: first.variant,
                        second: second.variant,
                    });
                }
            }
        }
        Ok(())
    }

    /// Runs the candidate at `index` against `input`.
    pub fn trial(&self, index: usize, input: &R) -> Option<Trial<T>> {
        let candidate = self.candidates.get(index)?;
        let probe = Probe::new(input, self.union, candidate.variant, candidate.keys);
        Some((candidate.probe)(&probe).into())
    }

    /// Decodes `input` by trying each candidate in order.
    pub fn decode(&self, input: &R) -> Result<T, DecodeError> {
        self.validate()?;
        for (index, candidate) in self.candidates.iter().enumerate() {
            match self.trial(index, input) {
                Some(Trial::Matched(value)) => {
                    tracing::debug!(
                        union = self.union,
                        variant = candidate.variant,
                        "candidate matched"
                    );
                    return Ok(value);
                }
                Some(Trial::NoMatch(reason)) => {
                    tracing::trace!(
                        union = self.union,
                        variant = candidate.variant,
                        %reason,
                        "candidate rejected"
                    );
                }
                Some(Trial::Failed(err)) => return Err(err),
                None => break,
            }
        }
        tracing::debug!(union = self.union, "no candidate matched");
        Err(DecodeError::UnrecognizedDiscriminator {
            union: self.union,
            evidence: Evidence::NoCandidate(self.order()),
        })
    }
}
