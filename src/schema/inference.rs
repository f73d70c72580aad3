//! Schema inference from JSON values

use super::types::{JsonType, SchemaProperty};
use serde_json::Value;
use std::collections::BTreeMap;

/// Schema inferrer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Maximum depth for nested values; deeper positions are typed Any
    max_depth: usize,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self { max_depth: 32 }
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Infer schema from a single JSON value
    pub fn infer(&self, value: &Value) -> SchemaProperty {
        self.infer_property(value, 0)
    }

    fn merge_all(&self, values: &[Value], depth: usize) -> Option<SchemaProperty> {
        values
            .iter()
            .map(|v| self.infer_property(v, depth))
            .reduce(|acc, next| merge_property(&acc, &next))
    }

    /// Infer a property from a JSON value
    fn infer_property(&self, value: &Value, depth: usize) -> SchemaProperty {
        if depth >= self.max_depth {
            return SchemaProperty::any();
        }

        match value {
            Value::Null => SchemaProperty::null(),
            Value::Bool(_) => SchemaProperty::new(JsonType::Boolean),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    SchemaProperty::new(JsonType::Integer)
                } else {
                    SchemaProperty::new(JsonType::Number)
                }
            }
            Value::String(_) => SchemaProperty::new(JsonType::String),
            Value::Array(arr) => SchemaProperty::array(self.merge_all(arr, depth + 1)),
            Value::Object(map) => {
                let properties = map
                    .iter()
                    .map(|(key, val)| (key.clone(), self.infer_property(val, depth + 1)))
                    .collect();
                SchemaProperty::object(properties)
            }
        }
    }
}

/// Infer schema from a single JSON value (convenience function)
pub fn infer_schema(value: &Value) -> SchemaProperty {
    SchemaInferrer::new().infer(value)
}

/// Merge two properties together
pub fn merge_property(a: &SchemaProperty, b: &SchemaProperty) -> SchemaProperty {
    let json_type = a.json_type.merge_with(b.json_type);

    // Merge nested properties; keys missing on either side become optional
    let properties = match (&a.properties, &b.properties) {
        (Some(a_props), Some(b_props)) if json_type == JsonType::Object => {
            let mut merged: BTreeMap<String, SchemaProperty> = BTreeMap::new();
            for (key, a_prop) in a_props {
                let prop = match b_props.get(key) {
                    Some(b_prop) => merge_property(a_prop, b_prop),
                    None => {
                        let mut prop = a_prop.clone();
                        prop.make_optional();
                        prop
                    }
                };
                merged.insert(key.clone(), prop);
            }
            for (key, b_prop) in b_props {
                if !a_props.contains_key(key) {
                    let mut prop = b_prop.clone();
                    prop.make_optional();
                    merged.insert(key.clone(), prop);
                }
            }
            Some(merged)
        }
        (Some(props), None) | (None, Some(props)) if json_type == JsonType::Object => {
            Some(props.clone())
        }
        _ => None,
    };

    // Merge array items
    let items = if json_type == JsonType::Array {
        match (&a.items, &b.items) {
            (Some(a_items), Some(b_items)) => Some(Box::new(merge_property(a_items, b_items))),
            (Some(items), None) | (None, Some(items)) => Some(items.clone()),
            (None, None) => None,
        }
    } else {
        None
    };

    SchemaProperty {
        json_type,
        nullable: a.nullable || b.nullable,
        optional: a.optional || b.optional,
        properties,
        items,
    }
}
