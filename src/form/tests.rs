//! Tests for the form encoder

use super::*;
use crate::params::{ListParams, RangeQuery};
use crate::types::Metadata;
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use test_case::test_case;

#[derive(Debug, Default, Serialize)]
struct Inner {
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flag: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
struct Outer {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inner: Option<Inner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<RangeQuery>,
    #[serde(flatten)]
    list: ListParams,
}

#[test]
fn test_unset_fields_are_absent() {
    let values = encode(&Outer::default()).unwrap();
    assert!(values.is_empty());
    assert_eq!(values.encode(), "");
}

#[test]
fn test_nested_objects_use_brackets() {
    let params = Outer {
        email: Some("jenny@example.com".into()),
        inner: Some(Inner {
            city: Some("Paris".into()),
            flag: Some(false),
        }),
        ..Outer::default()
    };
    let values = encode(&params).unwrap();
    assert_eq!(
        values.pairs(),
        &[
            ("email".to_string(), "jenny@example.com".to_string()),
            ("inner[city]".to_string(), "Paris".to_string()),
            ("inner[flag]".to_string(), "false".to_string()),
        ]
    );
}

#[test]
fn test_arrays_use_indexes() {
    let params = Outer {
        tags: Some(vec!["a".into(), "b".into()]),
        ..Outer::default()
    };
    let values = encode(&params).unwrap();
    assert_eq!(values.get("tags[0]"), Some("a"));
    assert_eq!(values.get("tags[1]"), Some("b"));
    assert_eq!(values.encode(), "tags[0]=a&tags[1]=b");
}

#[test]
fn test_empty_array_clears_the_list() {
    let params = Outer {
        tags: Some(Vec::new()),
        ..Outer::default()
    };
    let values = encode(&params).unwrap();
    assert_eq!(values.encode(), "tags=");
}

#[test]
fn test_metadata_keys_are_sorted() {
    let mut metadata = Metadata::new();
    metadata.insert("zeta".into(), "1".into());
    metadata.insert("alpha".into(), "2".into());
    let params = Outer {
        metadata: Some(metadata),
        ..Outer::default()
    };
    assert_eq!(
        encode(&params).unwrap().encode(),
        "metadata[alpha]=2&metadata[zeta]=1"
    );
}

#[test]
fn test_list_params_flatten_to_top_level() {
    let params = Outer {
        list: ListParams {
            limit: Some(3),
            starting_after: Some("acct_1".into()),
            expand: vec!["data.individual".into()],
            ..ListParams::default()
        },
        ..Outer::default()
    };
    let values = encode(&params).unwrap();
    assert_eq!(values.get("limit"), Some("3"));
    assert_eq!(values.get("starting_after"), Some("acct_1"));
    assert_eq!(values.get("expand[0]"), Some("data.individual"));
    assert!(!values.contains_key("ending_before"));
}

#[test]
fn test_range_query_exact() {
    let params = Outer {
        created: Some(RangeQuery::exact(1_700_000_000)),
        ..Outer::default()
    };
    assert_eq!(encode(&params).unwrap().encode(), "created=1700000000");
}

#[test]
fn test_range_query_bounds() {
    let params = Outer {
        created: Some(RangeQuery::between(10, 20)),
        ..Outer::default()
    };
    assert_eq!(
        encode(&params).unwrap().encode(),
        "created[gte]=10&created[lte]=20"
    );
}

#[test_case(json!({"n": 1.0}), "n=1" ; "whole float drops the fraction")]
#[test_case(json!({"n": 0.25}), "n=0.25" ; "fraction kept")]
#[test_case(json!({"n": -3}), "n=-3" ; "negative integer")]
#[test_case(json!({"b": true}), "b=true" ; "boolean")]
#[test_case(json!({"s": "a b&c"}), "s=a+b%26c" ; "value escaping")]
#[test_case(json!({"k y": "v"}), "k+y=v" ; "key escaping")]
#[test_case(json!({"a": {"b": {"c": "d"}}}), "a[b][c]=d" ; "deep nesting")]
#[test_case(json!({"a": [{"b": 1}, {"b": 2}]}), "a[0][b]=1&a[1][b]=2" ; "array of objects")]
#[test_case(json!({"a": {}}), "" ; "empty object emits nothing")]
#[test_case(json!({"a": null}), "" ; "null emits nothing")]
fn test_encoding_rules(input: serde_json::Value, expected: &str) {
    assert_eq!(encode(&input).unwrap().encode(), expected);
}

#[test_case(json!("text") ; "string")]
#[test_case(json!([1, 2]) ; "array")]
#[test_case(json!(null) ; "null")]
fn test_non_map_top_level_is_rejected(input: serde_json::Value) {
    let err = encode(&input).unwrap_err();
    assert!(matches!(err, crate::Error::Form { .. }));
}

#[test]
fn test_parse_reads_encoded_text() {
    let values = FormValues::parse("a[b]=1&tags=&s=a+b%26c");
    assert_eq!(values.get("a[b]"), Some("1"));
    assert_eq!(values.get("tags"), Some(""));
    assert_eq!(values.get("s"), Some("a b&c"));
}

#[test]
fn test_get_all_and_push() {
    let mut values = FormValues::new();
    values.push("k", "1");
    values.push("k", "2");
    assert_eq!(values.get_all("k"), vec!["1", "2"]);
    assert_eq!(values.len(), 2);
}
