//! Behaviour of the three discriminator conventions against JSON documents.

use proptest::prelude::*;
use serde_json::json;
use sumcodec::{
    impl_codable_union, ContainerError, DecodeError, EitherKeys, Evidence, IntegerTag,
    KeyPresence, KeyedRead, KeyedWrite, ObjectContainer, UnionCodec,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Either/or envelope with keys named after the variants.
#[derive(Debug, Clone, PartialEq)]
enum Named {
    A(String),
    B(i64),
}

const NAMED_KEYS: EitherKeys = EitherKeys::new("A", "B");

impl UnionCodec for Named {
    const NAME: &'static str = "Named";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            Named::A(value) => NAMED_KEYS.encode_first(out, value),
            Named::B(value) => NAMED_KEYS.encode_second(out, value),
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        NAMED_KEYS.decode(Self::NAME, input, Named::A, Named::B)
    }
}

impl_codable_union!(Named);

/// Three payload-less variants under an explicit integer tag.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Name {
    First,
    Last,
    Full,
}

const NAME_TAG: IntegerTag = IntegerTag::new("Name", "tag", &["first", "last", "full"]);

impl UnionCodec for Name {
    const NAME: &'static str = "Name";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        let code = match self {
            Name::First => 0,
            Name::Last => 1,
            Name::Full => 2,
        };
        NAME_TAG.write_tag(out, code)
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = NAME_TAG.read(input)?;
        match tagged.code() {
            0 => Ok(Name::First),
            1 => Ok(Name::Last),
            2 => Ok(Name::Full),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(Name);

/// Integer tag with a generic optional payload.
#[derive(Debug, Clone, PartialEq)]
enum Slot<T> {
    A(Option<T>),
    B(T),
}

const SLOT_TAG: IntegerTag = IntegerTag::new("Slot", "rawValue", &["a", "b"]);

impl<T: sumcodec::Codable> UnionCodec for Slot<T> {
    const NAME: &'static str = "Slot";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            Slot::A(value) => {
                SLOT_TAG.write_tag(out, 0)?;
                out.encode_if_present("associatedType", value.as_ref())
            }
            Slot::B(value) => {
                SLOT_TAG.write_tag(out, 1)?;
                out.encode("associatedType", value)
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        let tagged = SLOT_TAG.read(input)?;
        match tagged.code() {
            0 => Ok(Slot::A(tagged.optional("associatedType")?)),
            1 => Ok(Slot::B(tagged.required("associatedType")?)),
            _ => Err(tagged.unrecognized()),
        }
    }
}

impl_codable_union!(Slot<T>);

/// Key presence with a nested union payload.
#[derive(Debug, Clone, PartialEq)]
enum Job {
    Idle,
    Named(Named),
    Batch(Vec<Name>, Option<String>),
}

impl UnionCodec for Job {
    const NAME: &'static str = "Job";

    fn encode_into<W: KeyedWrite + ?Sized>(&self, out: &mut W) -> Result<(), ContainerError> {
        match self {
            Job::Idle => out.encode("idle", &true),
            Job::Named(inner) => out.encode("named", inner),
            Job::Batch(names, label) => {
                out.encode("batch", names)?;
                out.encode_if_present("label", label.as_ref())
            }
        }
    }

    fn decode_from<R: KeyedRead + ?Sized>(input: &R) -> Result<Self, DecodeError> {
        KeyPresence::new(Self::NAME)
            .candidate("idle", &["idle"], |p| {
                p.flag()?;
                Ok(Job::Idle)
            })
            .candidate("named", &["named"], |p| Ok(Job::Named(p.discriminator()?)))
            .candidate("batch", &["batch", "label"], |p| {
                Ok(Job::Batch(p.discriminator()?, p.optional("label")?))
            })
            .decode(input)
    }
}

impl_codable_union!(Job);

fn round_trip<U: UnionCodec + std::fmt::Debug + PartialEq>(value: &U) {
    let container = sumcodec::encode(value).unwrap();
    let back: U = sumcodec::decode(&container).unwrap();
    assert_eq!(&back, value);
}

fn container(value: serde_json::Value) -> ObjectContainer {
    ObjectContainer::from_value(value).unwrap()
}

// ---------------------------------------------------------------------------
// Either/or envelope
// ---------------------------------------------------------------------------

#[test]
fn either_encodes_under_the_variant_key() {
    let encoded = sumcodec::to_value(&Named::A("Gagan".into())).unwrap();
    assert_eq!(encoded, json!({"A": "Gagan"}));
    let back: Named = sumcodec::from_value(&encoded).unwrap();
    assert_eq!(back, Named::A("Gagan".into()));
}

#[test]
fn either_falls_back_to_second_slot() {
    let back: Named = sumcodec::from_value(&json!({"B": 31})).unwrap();
    assert_eq!(back, Named::B(31));
    // A mistyped first slot is a no-match, not an error.
    let back: Named = sumcodec::from_value(&json!({"A": 1, "B": 2})).unwrap();
    assert_eq!(back, Named::B(2));
}

#[test]
fn either_with_neither_slot_is_unrecognized() {
    let err = sumcodec::from_value::<Named>(&json!({"C": "x"})).unwrap_err();
    match err {
        DecodeError::UnrecognizedDiscriminator { union, evidence } => {
            assert_eq!(union, "Named");
            assert_eq!(evidence, Evidence::NoCandidate(vec!["A", "B"]));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Integer tag
// ---------------------------------------------------------------------------

#[test]
fn integer_tag_third_variant_is_two() {
    assert_eq!(sumcodec::to_value(&Name::Full).unwrap(), json!({"tag": 2}));
    let back: Name = sumcodec::from_value(&json!({"tag": 2})).unwrap();
    assert_eq!(back, Name::Full);
}

#[test]
fn integer_tag_exhaustiveness() {
    for (code, expected) in [Name::First, Name::Last, Name::Full].into_iter().enumerate() {
        let back: Name = sumcodec::from_value(&json!({ "tag": code })).unwrap();
        assert_eq!(back, expected);
    }
    for raw in [-1i64, 3, 5, 1000] {
        let err = sumcodec::from_value::<Name>(&json!({ "tag": raw })).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnrecognizedDiscriminator { evidence: Evidence::Code(c), .. } if c == raw),
            "code {raw}: {err}"
        );
    }
}

#[test]
fn integer_tag_requires_the_tag_key() {
    let err = sumcodec::from_value::<Name>(&json!({"kind": 1})).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Container(ContainerError::KeyAbsent { ref key }) if key == "tag"
    ));
}

#[test]
fn optional_payload_is_omitted() {
    let encoded = sumcodec::to_value(&Slot::<String>::A(None)).unwrap();
    assert_eq!(encoded, json!({"rawValue": 0}));
    let back: Slot<String> = sumcodec::from_value(&encoded).unwrap();
    assert_eq!(back, Slot::A(None));

    let encoded = sumcodec::to_value(&Slot::A(Some("Gagan".to_owned()))).unwrap();
    assert_eq!(encoded, json!({"rawValue": 0, "associatedType": "Gagan"}));
}

#[test]
fn required_payload_missing_is_missing_payload() {
    let err = sumcodec::from_value::<Slot<String>>(&json!({"rawValue": 1})).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingPayload {
            union: "Slot",
            variant: "b",
            source: ContainerError::KeyAbsent { .. }
        }
    ));
    let err =
        sumcodec::from_value::<Slot<String>>(&json!({"rawValue": 1, "associatedType": 3}))
            .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MissingPayload {
            source: ContainerError::TypeMismatch { .. },
            ..
        }
    ));
}

// ---------------------------------------------------------------------------
// Key presence with nested unions
// ---------------------------------------------------------------------------

#[test]
fn nested_unions_round_trip() {
    round_trip(&Job::Idle);
    round_trip(&Job::Named(Named::B(4)));
    round_trip(&Job::Batch(vec![Name::Last, Name::First], Some("nightly".into())));
    round_trip(&Job::Batch(Vec::new(), None));
}

#[test]
fn nested_layout() {
    let value = Job::Batch(vec![Name::Full], None);
    assert_eq!(
        sumcodec::to_value(&value).unwrap(),
        json!({"batch": [{"tag": 2}]})
    );
    assert_eq!(
        sumcodec::to_value(&Job::Named(Named::A("x".into()))).unwrap(),
        json!({"named": {"A": "x"}})
    );
}

#[test]
fn malformed_nested_union_is_a_no_match() {
    // `named` holds an object that is not a `Named`; the candidate is skipped
    // and the next one wins.
    let back: Job = sumcodec::from_value(&json!({"named": {"C": 1}, "batch": []})).unwrap();
    assert_eq!(back, Job::Batch(Vec::new(), None));
}

#[test]
fn trial_order_is_deterministic() {
    let input = container(json!({"batch": [], "named": {"A": "x"}, "idle": true}));
    let first: Job = sumcodec::decode(&input).unwrap();
    let second: Job = sumcodec::decode(&input).unwrap();
    assert_eq!(first, Job::Idle);
    assert_eq!(first, second);
}

#[test]
fn decoding_does_not_consume_the_container() {
    let input = container(json!({"batch": [{"tag": 0}], "label": "x"}));
    let before = input.clone();
    let _: Job = sumcodec::decode(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn encoding_adds_only_the_winning_keys() {
    let container = sumcodec::encode(&Job::Batch(vec![], Some("l".into()))).unwrap();
    assert_eq!(container.keys().collect::<Vec<_>>(), ["batch", "label"]);
}

#[test]
fn values_and_errors_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Job>();
    assert_send_sync::<ObjectContainer>();
    assert_send_sync::<IntegerTag>();
    assert_send_sync::<EitherKeys>();
    assert_send_sync::<DecodeError>();
    assert_send_sync::<ContainerError>();
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

fn named() -> impl Strategy<Value = Named> {
    prop_oneof![
        ".*".prop_map(Named::A),
        any::<i64>().prop_map(Named::B),
    ]
}

fn name() -> impl Strategy<Value = Name> {
    prop_oneof![Just(Name::First), Just(Name::Last), Just(Name::Full)]
}

fn job() -> impl Strategy<Value = Job> {
    prop_oneof![
        Just(Job::Idle),
        named().prop_map(Job::Named),
        (
            proptest::collection::vec(name(), 0..4),
            proptest::option::of("[a-z]{0,8}")
        )
            .prop_map(|(names, label)| Job::Batch(names, label)),
    ]
}

proptest! {
    #[test]
    fn round_trip_law(value in job()) {
        let bytes = sumcodec::to_vec(&value).unwrap();
        let back: Job = sumcodec::from_slice(&bytes).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn omission_law(payload in proptest::option::of(".*")) {
        let encoded = sumcodec::to_value(&Slot::A(payload.clone())).unwrap();
        let object = encoded.as_object().unwrap();
        prop_assert_eq!(object.contains_key("associatedType"), payload.is_some());
        prop_assert!(object.values().all(|v| !v.is_null()));
        let back: Slot<String> = sumcodec::from_value(&encoded).unwrap();
        prop_assert_eq!(back, Slot::A(payload));
    }
}
