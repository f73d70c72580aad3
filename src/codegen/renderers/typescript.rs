//! TypeScript interfaces (types only, no runtime converters)

use super::{finish, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::is_plain_identifier;

pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "any".to_string(),
            TypeRef::Null => "null".to_string(),
            TypeRef::Bool => "boolean".to_string(),
            TypeRef::Integer | TypeRef::Number => "number".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => match **inner {
                TypeRef::Nullable(_) => format!("({})[]", Self::type_of(inner)),
                _ => format!("{}[]", Self::type_of(inner)),
            },
            TypeRef::Nullable(inner) => format!("{} | null", Self::type_of(inner)),
        }
    }
}

impl Renderer for TypeScriptRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = Vec::new();

        if model.is_alias() {
            lines.push(format!(
                "export type {} = {};",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            lines.push(format!("export interface {} {{", record.name));
            for field in &record.fields {
                let key = if is_plain_identifier(&field.json_name) {
                    field.json_name.clone()
                } else {
                    quote(&field.json_name)
                };
                let optional = if field.optional { "?" } else { "" };
                lines.push(format!("    {key}{optional}: {};", Self::type_of(&field.ty)));
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
