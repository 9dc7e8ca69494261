//! Property-based tests for the round-trip law `decode(encode(u)) == u`.

use std::num::NonZeroU64;

use indexmap::IndexMap;
use json_schema_union::{
    ArraySchema, BooleanSchema, Bound, EnumSchema, IntegerSchema, NullSchema, NumberSchema, ObjectSchema,
    Pattern, Schema, SchemaKind, SchemaType, StringSchema,
};
use proptest::prelude::*;
use serde_json::Value;

fn description() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\PC{0,24}")
}

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
}

/// Any finite float, plus integers too wide for an `f64` mantissa.
fn bound() -> impl Strategy<Value = Option<Bound>> {
    proptest::option::of(prop_oneof![
        finite().prop_map(|f| Bound::from_f64(f).expect("finite")),
        any::<i64>().prop_map(Bound::from),
        any::<u64>().prop_map(Bound::from),
    ])
}

fn divisor() -> impl Strategy<Value = Option<Bound>> {
    proptest::option::of(prop_oneof![
        finite().prop_filter("positive", |f| *f > 0.0).prop_map(|f| Bound::from_f64(f).expect("finite")),
        (1u64..=u64::MAX).prop_map(Bound::from),
    ])
}

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn leaf_kind() -> impl Strategy<Value = SchemaKind> {
    prop_oneof![
        Just(SchemaKind::from(BooleanSchema {})),
        Just(SchemaKind::from(NullSchema {})),
        proptest::collection::vec(scalar_value(), 1..5).prop_map(|v| SchemaKind::from(EnumSchema::new(v))),
        (
            proptest::option::of(any::<i64>()),
            proptest::option::of(any::<i64>()),
            proptest::option::of(1u64..1000).prop_map(|m| m.and_then(NonZeroU64::new)),
        )
            .prop_map(|(minimum, maximum, multiple_of)| {
                SchemaKind::from(IntegerSchema { minimum, maximum, multiple_of, ..Default::default() })
            }),
        (bound(), bound(), bound(), bound(), divisor()).prop_map(
            |(minimum, maximum, exclusive_minimum, exclusive_maximum, multiple_of)| {
                SchemaKind::from(NumberSchema { minimum, maximum, exclusive_minimum, exclusive_maximum, multiple_of })
            }
        ),
        (
            proptest::option::of(0u64..100),
            proptest::option::of(prop::sample::select(vec!["^a+$", "[0-9]{3}", "^(x|y)*z?$", "\\w+@\\w+"])),
            proptest::option::of(prop::sample::select(vec!["uri", "email", "date-time"])),
        )
            .prop_map(|(min_length, pattern, format)| {
                SchemaKind::from(StringSchema {
                    min_length,
                    max_length: None,
                    pattern: pattern.map(|p| Pattern::new(p).expect("fixed patterns compile")),
                    format: format.map(str::to_string),
                })
            }),
    ]
}

fn with_description(kind: SchemaKind, description: Option<String>) -> Schema {
    let schema = Schema::new(kind);
    match description {
        Some(d) => schema.with_description(d),
        None => schema,
    }
}

fn schema() -> impl Strategy<Value = Schema> {
    let leaf = (leaf_kind(), description()).prop_map(|(k, d)| with_description(k, d));
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            (
                proptest::option::of(inner.clone()),
                proptest::option::of(0u64..10),
                proptest::option::of(any::<bool>()),
                description(),
            )
                .prop_map(|(items, min_items, unique_items, d)| {
                    let array = ArraySchema { items: items.map(Box::new), min_items, max_items: None, unique_items };
                    with_description(array.into(), d)
                }),
            (
                proptest::option::of(proptest::collection::vec(("[a-z]{1,6}", inner), 0..4)),
                proptest::option::of(proptest::collection::vec("[a-z]{1,6}", 0..3)),
                proptest::option::of(any::<bool>()),
                description(),
            )
                .prop_map(|(properties, required, additional_properties, d)| {
                    let object = ObjectSchema {
                        properties: properties.map(|p| p.into_iter().collect::<IndexMap<_, _>>()),
                        required,
                        additional_properties,
                    };
                    with_description(object.into(), d)
                }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_value_round_trip(s in schema()) {
        let doc = s.to_value().unwrap();
        prop_assert_eq!(Schema::from_value(&doc).unwrap(), s);
    }

    #[test]
    fn prop_text_round_trip(s in schema()) {
        let text = s.to_json_string().unwrap();
        let back: Schema = text.parse().unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn prop_enum_never_encodes_type(s in schema()) {
        let doc = s.to_document().unwrap();
        prop_assert_eq!(doc.contains_key("type"), s.schema_type() != SchemaType::Enum);
    }

    #[test]
    fn prop_document_round_trip(s in schema()) {
        // encode(decode(doc)) == doc once doc is in encoded form
        let doc = s.to_value().unwrap();
        let again = Schema::from_value(&doc).unwrap().to_value().unwrap();
        prop_assert_eq!(again, doc);
    }

    #[test]
    fn prop_wide_integer_literals_round_trip(n in (1u64 << 53)..=u64::MAX, m in i64::MIN..-(1i64 << 53)) {
        let text = format!(r#"{{"type":"number","minimum":{m},"maximum":{n},"multipleOf":{n}}}"#);
        let schema: Schema = text.parse().unwrap();
        prop_assert_eq!(schema.to_json_string().unwrap(), text);
    }
}
