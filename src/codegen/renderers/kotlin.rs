//! Kotlin data classes for kotlinx.serialization

use super::{finish, member_names, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

pub struct KotlinRenderer;

impl KotlinRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "JsonElement?".to_string(),
            TypeRef::Bool => "Boolean".to_string(),
            TypeRef::Integer => "Long".to_string(),
            TypeRef::Number => "Double".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("List<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("{}?", Self::type_of(inner)),
        }
    }
}

impl Renderer for KotlinRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec![
            "import kotlinx.serialization.SerialName".to_string(),
            "import kotlinx.serialization.Serializable".to_string(),
            "import kotlinx.serialization.json.JsonElement".to_string(),
            String::new(),
        ];

        if model.is_alias() {
            lines.push(format!(
                "typealias {} = {}",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            lines.push("@Serializable".to_string());
            if record.fields.is_empty() {
                lines.push(format!("class {}", record.name));
                lines.push(String::new());
                continue;
            }

            let names = member_names(record, Case::Camel, KEYWORDS, &[]);
            lines.push(format!("data class {} (", record.name));
            let last = record.fields.len() - 1;
            for (i, (field, name)) in record.fields.iter().zip(&names).enumerate() {
                if field.json_name != *name {
                    lines.push(format!("    @SerialName({})", quote(&field.json_name)));
                }
                let mut ty = Self::type_of(&field.ty);
                if field.optional && !ty.ends_with('?') {
                    ty.push('?');
                }
                let default = if ty.ends_with('?') { " = null" } else { "" };
                let comma = if i == last { "" } else { "," };
                lines.push(format!("    val {name}: {ty}{default}{comma}"));
            }
            lines.push(")".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
