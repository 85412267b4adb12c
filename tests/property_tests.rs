//! Property-based tests for the collection operations
//!
//! These complement the scenario tests in `collection_tests.rs` by checking
//! invariants across generated inputs: counts, key preservation, idempotence
//! and the serde bridge.

use keyed_collection::{from_value, to_value, Collection, Key, Value, ValueMap};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z0-9]{0,6}".prop_map(Value::from),
    ]
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-50i64..50).prop_map(Key::Int),
        "[a-z]{1,4}".prop_map(Key::from),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::array)
    })
}

fn keyed_collection() -> impl Strategy<Value = Collection> {
    prop::collection::vec((key(), scalar()), 0..16)
        .prop_map(|entries| entries.into_iter().collect::<Collection>())
}

proptest! {
    // Construction
    #[test]
    fn prop_to_array_is_idempotent(c in keyed_collection()) {
        let once = c.to_array();
        prop_assert_eq!(Collection::new(once.clone()).to_array(), once);
    }

    #[test]
    fn prop_push_grows_by_one(c in keyed_collection(), v in scalar()) {
        let mut grown = c.clone();
        grown.push(v.clone());
        prop_assert_eq!(grown.count(), c.count() + 1);
        let values = grown.all();
        prop_assert_eq!(values.last(), Some(&v));
    }

    #[test]
    fn prop_put_then_get(c in keyed_collection(), k in key(), v in scalar()) {
        let mut updated = c.clone();
        updated.put(k.clone(), v.clone());
        prop_assert!(updated.has(k.clone()));
        prop_assert_eq!(updated.get(k), Some(&v));
    }

    #[test]
    fn prop_pushed_key_exceeds_every_integer_key(c in keyed_collection()) {
        let mut grown = c.clone();
        grown.push("tail");
        let tail = grown.data().get_index(grown.count() - 1).map(|(k, _)| k.clone());
        let max_int = c.data().keys().filter_map(Key::as_int).max();
        match (tail, max_int) {
            (Some(Key::Int(tail)), Some(max)) => prop_assert!(tail > max),
            (Some(Key::Int(_)), None) => {}
            other => prop_assert!(false, "unexpected tail {:?}", other),
        }
    }

    // Transformations
    #[test]
    fn prop_map_preserves_count(c in keyed_collection()) {
        let mapped = c.map(|v, _| v.clone());
        prop_assert_eq!(mapped.count(), c.count());
        prop_assert!(mapped.data().is_list());
    }

    #[test]
    fn prop_filter_keeps_keys_of_survivors(c in keyed_collection()) {
        let kept = c.filter(|v, _| v.is_string());
        for (k, v) in &kept {
            prop_assert_eq!(c.get(k), Some(v));
        }
        prop_assert_eq!(
            kept.count(),
            c.iter().filter(|(_, v)| v.is_string()).count()
        );
    }

    #[test]
    fn prop_filter_composition(c in keyed_collection()) {
        let chained = c.filter(|v, _| v.is_number()).filter(|v, _| !v.is_null());
        let combined = c.filter(|v, _| v.is_number() && !v.is_null());
        prop_assert_eq!(chained, combined);
    }

    #[test]
    fn prop_filter_always_true_is_identity(c in keyed_collection()) {
        prop_assert_eq!(c.filter(|_, _| true), c);
    }

    #[test]
    fn prop_flatten_is_idempotent(values in prop::collection::vec(nested(), 0..8)) {
        let c: Collection = values.into_iter().collect();
        let flat = c.flatten();
        prop_assert!(flat.iter().all(|(_, v)| !v.is_array()));
        prop_assert_eq!(flat.flatten(), flat);
    }

    #[test]
    fn prop_unique_has_no_duplicates(c in keyed_collection()) {
        let unique = c.unique().all();
        for (i, a) in unique.iter().enumerate() {
            prop_assert!(unique[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn prop_sort_is_ordered(c in keyed_collection()) {
        let mut sorted = c.clone();
        sorted.sort();
        let values = sorted.all();
        prop_assert_eq!(values.len(), c.count());
        for pair in values.windows(2) {
            prop_assert!(pair[0].natural_cmp(&pair[1]).is_le());
        }
    }

    #[test]
    fn prop_merge_with_empty_keeps_string_keys(c in keyed_collection()) {
        let merged = c.merge(&Collection::empty());
        prop_assert_eq!(merged.count(), c.count());
        for k in c.data().keys().filter(|k| k.is_str()) {
            prop_assert_eq!(merged.get(k), c.get(k));
        }
    }

    // Serde bridge
    #[test]
    fn prop_value_roundtrip(v in nested()) {
        let back: Value = from_value(to_value(&v).unwrap()).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_vec_i64_roundtrip(v in prop::collection::vec(any::<i64>(), 0..20)) {
        let back: Vec<i64> = from_value(to_value(&v).unwrap()).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_json_roundtrip(c in keyed_collection()) {
        let json = serde_json::to_string(&c).unwrap();
        let back: ValueMap = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.len(), c.count());
    }
}
