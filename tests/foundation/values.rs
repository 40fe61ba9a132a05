//! Integration tests for raw values
//!
//! Tests construction, inspection, and JSON loading of raw token data.

use udt_foundation::{RawList, Type, Value};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn record_from_pairs() {
    let v = Value::record([("id", Value::from("t1")), ("order", Value::Int(2))]);
    assert_eq!(v.value_type(), Type::Record);
    assert_eq!(v.get("id").and_then(Value::as_str), Some("t1"));
    assert_eq!(v.get("order").and_then(Value::as_int), Some(2));
}

#[test]
fn list_from_vec() {
    let v: Value = vec!["a", "b", "c"].into();
    let list = v.as_list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::from("b")));
}

#[test]
fn list_clone_shares_structure() {
    let list: RawList = (0..1000).map(Value::Int).collect();
    let v1 = Value::List(list.clone());
    let v2 = Value::List(list.push_back(Value::Nil));

    assert_eq!(v1.as_list().unwrap().len(), 1000);
    assert_eq!(v2.as_list().unwrap().len(), 1001);
}

// =============================================================================
// Sequence detection
// =============================================================================

#[test]
fn sequence_detection() {
    assert!(Value::list(Vec::<Value>::new()).is_sequence());
    assert!(Value::list([Value::record([("id", "t1")])]).is_sequence());

    assert!(!Value::from("foo").is_sequence());
    assert!(!Value::record([("0", "a")]).is_sequence());
    assert!(!Value::Int(0).is_sequence());
    assert!(!Value::Nil.is_sequence());
}

// =============================================================================
// JSON loading
// =============================================================================

#[test]
fn json_document_deserializes_to_raw_values() {
    let v: Value = serde_json::from_str(
        r#"[{"id": "t1"}, {"id": "t2", "description": "foo bar", "weight": 1.5, "order": 3, "hidden": false, "alias": null}]"#,
    )
    .unwrap();

    let list = v.as_list().unwrap();
    assert_eq!(list.len(), 2);

    let second = list.get(1).unwrap();
    assert_eq!(second.get("description"), Some(&Value::from("foo bar")));
    assert_eq!(second.get("weight"), Some(&Value::Float(1.5)));
    assert_eq!(second.get("order"), Some(&Value::Int(3)));
    assert_eq!(second.get("hidden"), Some(&Value::Bool(false)));
    assert_eq!(second.get("alias"), Some(&Value::Nil));
}

#[test]
fn raw_values_serialize_as_plain_json() {
    let v = Value::list([Value::record([("id", Value::from("t1")), ("n", Value::Int(1))])]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"[{"id":"t1","n":1}]"#);
}
