//! Schema types

use std::collections::BTreeMap;

/// Inferred JSON type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
    /// Conflicting or unknown shape
    Any,
}

impl JsonType {
    /// Merge two types, returning the more general type
    pub fn merge_with(self, other: JsonType) -> JsonType {
        match (self, other) {
            (a, b) if a == b => a,
            (JsonType::Null, other) | (other, JsonType::Null) => other,
            (JsonType::Integer, JsonType::Number) | (JsonType::Number, JsonType::Integer) => {
                JsonType::Number
            }
            // Incompatible types widen to Any
            _ => JsonType::Any,
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
            JsonType::Any => write!(f, "any"),
        }
    }
}

/// Schema of one JSON position (root, property or array item)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperty {
    /// Primary type
    pub json_type: JsonType,

    /// A `null` value was seen here
    pub nullable: bool,

    /// The key was missing from at least one sibling object
    pub optional: bool,

    /// Nested properties (for objects)
    pub properties: Option<BTreeMap<String, SchemaProperty>>,

    /// Array items schema (None for arrays only ever seen empty)
    pub items: Option<Box<SchemaProperty>>,
}

impl SchemaProperty {
    /// Create a new property with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type,
            nullable: false,
            optional: false,
            properties: None,
            items: None,
        }
    }

    /// Create a property for a `null` value
    pub fn null() -> Self {
        Self {
            nullable: true,
            ..Self::new(JsonType::Null)
        }
    }

    /// Create a property of unknown shape
    pub fn any() -> Self {
        Self::new(JsonType::Any)
    }

    /// Create an object property with nested properties
    pub fn object(properties: BTreeMap<String, SchemaProperty>) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(JsonType::Object)
        }
    }

    /// Create an array property with an optional item schema
    pub fn array(items: Option<SchemaProperty>) -> Self {
        Self {
            items: items.map(Box::new),
            ..Self::new(JsonType::Array)
        }
    }

    /// Mark this property optional
    pub fn make_optional(&mut self) {
        self.optional = true;
    }

    /// Get a nested property
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }
}
