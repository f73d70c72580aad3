//! JavaScript JSDoc typedefs

use super::{finish, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::is_plain_identifier;

pub struct JavaScriptRenderer;

impl JavaScriptRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "*".to_string(),
            TypeRef::Null => "null".to_string(),
            TypeRef::Bool => "boolean".to_string(),
            TypeRef::Integer | TypeRef::Number => "number".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("Array<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("({}|null)", Self::type_of(inner)),
        }
    }
}

impl Renderer for JavaScriptRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = Vec::new();

        if model.is_alias() {
            lines.push(format!(
                "/** @typedef {{{}}} {} */",
                Self::type_of(&model.root),
                model.name
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            lines.push("/**".to_string());
            lines.push(format!(" * @typedef {{Object}} {}", record.name));
            for field in &record.fields {
                let key = if is_plain_identifier(&field.json_name) {
                    field.json_name.clone()
                } else {
                    quote(&field.json_name)
                };
                let key = if field.optional { format!("[{key}]") } else { key };
                lines.push(format!(
                    " * @property {{{}}} {key}",
                    Self::type_of(&field.ty)
                ));
            }
            lines.push(" */".to_string());
            lines.push(String::new());
        }

        lines.push("module.exports = {};".to_string());
        finish(lines)
    }
}
