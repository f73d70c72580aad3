//! Schema inference tests

use super::*;
use serde_json::json;

#[test]
fn test_infer_simple_object() {
    let value = json!({
        "name": "John",
        "age": 30,
        "score": 9.5,
        "active": true
    });

    let schema = infer_schema(&value);

    assert_eq!(schema.json_type, JsonType::Object);
    assert_eq!(schema.properties.as_ref().unwrap().len(), 4);
    assert_eq!(
        schema.get_property("name").unwrap().json_type,
        JsonType::String
    );
    assert_eq!(
        schema.get_property("age").unwrap().json_type,
        JsonType::Integer
    );
    assert_eq!(
        schema.get_property("score").unwrap().json_type,
        JsonType::Number
    );
    assert_eq!(
        schema.get_property("active").unwrap().json_type,
        JsonType::Boolean
    );
    assert!(!schema.get_property("name").unwrap().optional);
}

#[test]
fn test_infer_nested_object() {
    let value = json!({
        "user": {
            "name": "John",
            "email": "john@example.com"
        }
    });

    let schema = infer_schema(&value);
    let user = schema.get_property("user").unwrap();

    assert_eq!(user.json_type, JsonType::Object);
    assert!(user.get_property("name").is_some());
    assert!(user.get_property("email").is_some());
}

#[test]
fn test_infer_scalar_roots() {
    assert_eq!(infer_schema(&json!("x")).json_type, JsonType::String);
    assert_eq!(infer_schema(&json!(1)).json_type, JsonType::Integer);
    assert_eq!(infer_schema(&json!(false)).json_type, JsonType::Boolean);

    let null = infer_schema(&json!(null));
    assert_eq!(null.json_type, JsonType::Null);
    assert!(null.nullable);
}

#[test]
fn test_infer_array_merges_elements() {
    let value = json!([
        {"id": 1, "name": "Item 1", "price": 10},
        {"id": 2, "price": 10.5, "tag": null}
    ]);

    let schema = infer_schema(&value);
    assert_eq!(schema.json_type, JsonType::Array);

    let item = schema.items.as_ref().unwrap();
    assert_eq!(item.json_type, JsonType::Object);

    let id = item.get_property("id").unwrap();
    assert!(!id.optional);
    assert_eq!(id.json_type, JsonType::Integer);

    let name = item.get_property("name").unwrap();
    assert!(name.optional);

    let price = item.get_property("price").unwrap();
    assert_eq!(price.json_type, JsonType::Number);

    let tag = item.get_property("tag").unwrap();
    assert!(tag.optional);
    assert!(tag.nullable);
}

#[test]
fn test_infer_empty_array() {
    let schema = infer_schema(&json!({"tags": []}));
    let tags = schema.get_property("tags").unwrap();

    assert_eq!(tags.json_type, JsonType::Array);
    assert!(tags.items.is_none());
}

#[test]
fn test_empty_array_merges_with_populated() {
    let schema = infer_schema(&json!([{"tags": []}, {"tags": ["a"]}]));
    let tags = schema.items.as_ref().unwrap().get_property("tags").unwrap();

    assert_eq!(
        tags.items.as_ref().unwrap().json_type,
        JsonType::String
    );
}

#[test]
fn test_null_then_value_is_nullable() {
    let schema = infer_schema(&json!([{"email": null}, {"email": "a@b.co"}]));
    let email = schema.items.as_ref().unwrap().get_property("email").unwrap();

    assert_eq!(email.json_type, JsonType::String);
    assert!(email.nullable);
    assert!(!email.optional);
}

#[test]
fn test_conflicting_types_widen_to_any() {
    let schema = infer_schema(&json!([1, "two", {"three": 3}]));
    let item = schema.items.as_ref().unwrap();

    assert_eq!(item.json_type, JsonType::Any);
    assert!(item.properties.is_none());
}

#[test]
fn test_nested_objects_merge_recursively() {
    let schema = infer_schema(&json!([
        {"address": {"city": "Paris"}},
        {"address": {"city": "Lyon", "zip": "69000"}}
    ]));
    let address = schema.items.as_ref().unwrap().get_property("address").unwrap();

    assert!(!address.get_property("city").unwrap().optional);
    assert!(address.get_property("zip").unwrap().optional);
}

#[test]
fn test_max_depth() {
    let value = json!({"a": {"b": {"c": 1}}});
    let schema = SchemaInferrer::new().with_max_depth(2).infer(&value);

    let a = schema.get_property("a").unwrap();
    assert_eq!(a.json_type, JsonType::Object);
    assert_eq!(a.get_property("b").unwrap().json_type, JsonType::Any);
}

#[test]
fn test_json_type_merge() {
    assert_eq!(
        JsonType::Integer.merge_with(JsonType::Number),
        JsonType::Number
    );
    assert_eq!(JsonType::Null.merge_with(JsonType::String), JsonType::String);
    assert_eq!(JsonType::String.merge_with(JsonType::Boolean), JsonType::Any);
    assert_eq!(JsonType::Any.merge_with(JsonType::Any), JsonType::Any);
    assert_eq!(JsonType::Array.to_string(), "array");
}
