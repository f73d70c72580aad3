//! Language-neutral type model
//!
//! Lowers an inferred schema into named record types plus a root type reference.
//! Records are listed parents first, in the order they are first reached.

use super::naming::{singular, type_name, UniqueNames};
use crate::schema::{JsonType, SchemaProperty};

/// Reference to a type from a field, array or alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Any,
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array(Box<TypeRef>),
    /// Named record in `TypeModel::records`
    Record(String),
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    /// Check if this type admits null
    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeRef::Nullable(_) | TypeRef::Null | TypeRef::Any)
    }

    /// The type with any nullable wrapper removed
    pub fn non_null(&self) -> &TypeRef {
        match self {
            TypeRef::Nullable(inner) => inner,
            other => other,
        }
    }
}

/// One record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Key exactly as it appears in the JSON
    pub json_name: String,
    pub ty: TypeRef,
    /// Key may be absent
    pub optional: bool,
}

/// Named object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Every type needed to describe one sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeModel {
    /// Top-level type name
    pub name: String,
    /// Top-level type; `Record(name)` when the sample is an object
    pub root: TypeRef,
    pub records: Vec<Record>,
}

impl TypeModel {
    /// Lower a schema into a model whose top-level type is called `name`
    pub fn from_schema(name: &str, schema: &SchemaProperty) -> Self {
        let top = type_name(name);
        let mut lowering = Lowering {
            names: UniqueNames::new(),
            records: Vec::new(),
        };

        let root = match schema.json_type {
            JsonType::Object => {
                let record = lowering.names.claim(&top);
                lowering.lower_record(record, schema)
            }
            _ => {
                // Alias roots keep the name for the alias itself
                lowering.names.claim(&top);
                lowering.lower(schema, &top, true)
            }
        };

        Self {
            name: top,
            root,
            records: lowering.records,
        }
    }

    /// Check if the top-level type is an alias rather than a record
    pub fn is_alias(&self) -> bool {
        self.root != TypeRef::Record(self.name.clone())
    }

    /// Look up a record by name
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }
}

struct Lowering {
    names: UniqueNames,
    records: Vec<Record>,
}

impl Lowering {
    /// Lower a position; `hint` names any record created for it
    fn lower(&mut self, schema: &SchemaProperty, hint: &str, root: bool) -> TypeRef {
        let ty = match schema.json_type {
            JsonType::Any => return TypeRef::Any,
            JsonType::Null => return TypeRef::Null,
            JsonType::Boolean => TypeRef::Bool,
            JsonType::Integer => TypeRef::Integer,
            JsonType::Number => TypeRef::Number,
            JsonType::String => TypeRef::String,
            JsonType::Array => {
                let item_hint = if root {
                    format!("{hint}Element")
                } else {
                    singular(hint)
                };
                let item = match &schema.items {
                    Some(items) => self.lower(items, &item_hint, false),
                    None => TypeRef::Any,
                };
                TypeRef::Array(Box::new(item))
            }
            JsonType::Object => {
                let name = self.names.claim(hint);
                self.lower_record(name, schema)
            }
        };

        if schema.nullable {
            TypeRef::Nullable(Box::new(ty))
        } else {
            ty
        }
    }

    fn lower_record(&mut self, name: String, schema: &SchemaProperty) -> TypeRef {
        // Reserve the slot so parents precede children
        let index = self.records.len();
        self.records.push(Record {
            name: name.clone(),
            fields: Vec::new(),
        });

        let mut fields = Vec::new();
        if let Some(properties) = &schema.properties {
            for (key, prop) in properties {
                fields.push(Field {
                    json_name: key.clone(),
                    ty: self.lower(prop, &type_name(key), false),
                    optional: prop.optional,
                });
            }
        }
        self.records[index].fields = fields;

        TypeRef::Record(name)
    }
}
