//! Rust structs deriving serde

use super::{finish, member_names, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

pub struct RustRenderer;

impl RustRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "serde_json::Value".to_string(),
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Integer => "i64".to_string(),
            TypeRef::Number => "f64".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("Vec<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("Option<{}>", Self::type_of(inner)),
        }
    }
}

impl Renderer for RustRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec![
            "use serde::{Deserialize, Serialize};".to_string(),
            String::new(),
        ];

        if model.is_alias() {
            lines.push(format!(
                "pub type {} = {};",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            let names = member_names(record, Case::Snake, KEYWORDS, &[]);
            lines.push("#[derive(Debug, Clone, Serialize, Deserialize)]".to_string());
            lines.push(format!("pub struct {} {{", record.name));
            for (field, name) in record.fields.iter().zip(&names) {
                if field.json_name != *name {
                    lines.push(format!("    #[serde(rename = {})]", quote(&field.json_name)));
                }
                let mut ty = Self::type_of(&field.ty);
                if field.optional && !ty.starts_with("Option<") {
                    ty = format!("Option<{ty}>");
                }
                lines.push(format!("    pub {name}: {ty},"));
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
