//! Flow object types

use super::{finish, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::is_plain_identifier;

pub struct FlowRenderer;

impl FlowRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "any".to_string(),
            TypeRef::Null => "null".to_string(),
            TypeRef::Bool => "boolean".to_string(),
            TypeRef::Integer | TypeRef::Number => "number".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("Array<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("?{}", Self::type_of(inner)),
        }
    }
}

impl Renderer for FlowRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec!["// @flow".to_string(), String::new()];

        if model.is_alias() {
            lines.push(format!(
                "export type {} = {};",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            lines.push(format!("export type {} = {{", record.name));
            for field in &record.fields {
                let key = if is_plain_identifier(&field.json_name) {
                    field.json_name.clone()
                } else {
                    quote(&field.json_name)
                };
                let optional = if field.optional { "?" } else { "" };
                lines.push(format!("    {key}{optional}: {},", Self::type_of(&field.ty)));
            }
            lines.push("};".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
