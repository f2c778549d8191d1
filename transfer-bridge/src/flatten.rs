//! Path flattening for the remote API's generic request format.
//!
//! The payment network accepts request parameters as a flat list of
//! `(path, value)` pairs rather than nested JSON. This module converts a
//! JSON tree into that form: nested object keys join with `.`, array
//! elements append a zero-based `[index]` to the parent segment, and only
//! scalar leaves are emitted.
//!
//! ```
//! use serde_json::json;
//! use transfer_bridge::flatten::flatten;
//!
//! let value = json!({"a": [{"b": 1}, {"b": 2}]});
//! assert_eq!(
//!     flatten(&value),
//!     vec![
//!         ("a[0].b".to_owned(), "1".to_owned()),
//!         ("a[1].b".to_owned(), "2".to_owned()),
//!     ]
//! );
//! ```

use serde_json::Value;

/// Ordered flat request parameters, first-encountered order.
pub type FlatParams = Vec<(String, String)>;

/// Flattens a JSON value into ordered `(path, value)` pairs.
///
/// The walk is depth-first and order-preserving: object keys in declared
/// order, array elements in index order. Objects and arrays are traversed,
/// never emitted; `null` leaves are omitted entirely, so an absent field and
/// a `null` field produce the same (empty) output. Empty objects and arrays
/// contribute nothing. A non-null empty string is still a leaf and is
/// emitted.
///
/// Numbers and booleans use their canonical textual rendering (`1`, `2.5`,
/// `true`). The function is total over any JSON tree and deterministic.
#[must_use]
pub fn flatten(value: &Value) -> FlatParams {
    let mut params = FlatParams::new();
    add_keys("", value, &mut params);
    params
}

fn add_keys(current_path: &str, value: &Value, params: &mut FlatParams) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                let path = if current_path.is_empty() {
                    key.clone()
                } else {
                    format!("{current_path}.{key}")
                };
                add_keys(&path, child, params);
            }
        }
        Value::Array(elements) => {
            // No dot before the bracket: `field[0].name`, not `field.[0]`.
            for (index, child) in elements.iter().enumerate() {
                add_keys(&format!("{current_path}[{index}]"), child, params);
            }
        }
        Value::String(text) => params.push((current_path.to_owned(), text.clone())),
        Value::Number(number) => params.push((current_path.to_owned(), number.to_string())),
        Value::Bool(flag) => params.push((current_path.to_owned(), flag.to_string())),
        Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::flatten;

    fn pairs(value: &Value) -> Vec<(String, String)> {
        flatten(value)
    }

    #[test]
    fn nested_objects_join_with_dots() {
        let value = json!({"merchant_transfer": {"transfer_amount": {"value": "100.00"}}});
        assert_eq!(
            pairs(&value),
            vec![("merchant_transfer.transfer_amount.value".to_owned(), "100.00".to_owned())]
        );
    }

    #[test]
    fn array_elements_use_bracket_index_syntax() {
        let value = json!({"a": [{"b": 1}, {"b": 2}]});
        assert_eq!(
            pairs(&value),
            vec![("a[0].b".to_owned(), "1".to_owned()), ("a[1].b".to_owned(), "2".to_owned())]
        );
    }

    #[test]
    fn custom_field_array_path() {
        let value = json!({
            "merchant_transfer": {
                "reconciliation_data": {
                    "custom_field": [{"name": "ABC", "value": "123"}]
                }
            }
        });
        assert_eq!(
            pairs(&value),
            vec![
                (
                    "merchant_transfer.reconciliation_data.custom_field[0].name".to_owned(),
                    "ABC".to_owned()
                ),
                (
                    "merchant_transfer.reconciliation_data.custom_field[0].value".to_owned(),
                    "123".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn null_leaves_are_omitted() {
        let value = json!({"a": null, "b": "x"});
        assert_eq!(pairs(&value), vec![("b".to_owned(), "x".to_owned())]);
    }

    #[test]
    fn empty_containers_contribute_nothing() {
        let value = json!({"a": {}, "b": [], "c": "kept"});
        assert_eq!(pairs(&value), vec![("c".to_owned(), "kept".to_owned())]);
    }

    #[test]
    fn empty_string_is_still_a_leaf() {
        let value = json!({"a": ""});
        assert_eq!(pairs(&value), vec![("a".to_owned(), String::new())]);
    }

    #[test]
    fn numbers_and_booleans_render_canonically() {
        let value = json!({"count": 7, "rate": 2.5, "active": true, "disabled": false});
        assert_eq!(
            pairs(&value),
            vec![
                ("count".to_owned(), "7".to_owned()),
                ("rate".to_owned(), "2.5".to_owned()),
                ("active".to_owned(), "true".to_owned()),
                ("disabled".to_owned(), "false".to_owned()),
            ]
        );
    }

    #[test]
    fn top_level_scalar_flattens_to_empty_path() {
        assert_eq!(pairs(&json!("lone")), vec![(String::new(), "lone".to_owned())]);
    }

    #[test]
    fn object_key_order_is_preserved() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": "1", "alpha": "2", "mid": {"y": "3", "a": "4"}}"#)
                .unwrap();
        let paths: Vec<_> = pairs(&value).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["zeta", "alpha", "mid.y", "mid.a"]);
    }

    fn scalar_leaf_count(value: &Value) -> usize {
        match value {
            Value::Object(fields) => fields.values().map(scalar_leaf_count).sum(),
            Value::Array(elements) => elements.iter().map(scalar_leaf_count).sum(),
            Value::Null => 0,
            _ => 1,
        }
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z0-9 ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| {
                    let mut fields = serde_json::Map::new();
                    for (key, child) in entries {
                        fields.insert(key, child);
                    }
                    Value::Object(fields)
                }),
            ]
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn flatten_is_deterministic(value in arb_json()) {
            prop_assert_eq!(flatten(&value), flatten(&value));
        }

        #[test]
        fn flatten_emits_exactly_the_non_null_scalar_leaves(value in arb_json()) {
            prop_assert_eq!(flatten(&value).len(), scalar_leaf_count(&value));
        }
    }
}
