//! Property-based round trips over generated documents

use crate::test_utils::*;
use dotstore::{DocStore, JsonValue};
use proptest::prelude::*;
use serde_json::Value;

/// Generate arbitrary JSON documents: scalars at the leaves, objects and
/// arrays above, a few levels deep. Floats are left out on purpose — text
/// round trips are exact for everything generated here.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 äöüß]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_save_then_load_roundtrips(json in arb_json()) {
        let (_dir, mut store) = temp_store("doc.json");
        store.overwrite(json.clone());
        store.save();

        let reopened = DocStore::open(store.filepath());
        prop_assert_eq!(reopened.document().as_inner(), &json);
    }

    #[test]
    fn prop_stringify_then_parse_roundtrips(json in arb_json()) {
        init_tracing();
        let value = JsonValue::from(json.clone());
        let parsed: JsonValue = value.to_json_string_pretty().parse().unwrap();
        prop_assert_eq!(parsed.as_inner(), &json);
    }
}
