//! Dart immutable classes

use super::{finish, member_names, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

pub struct DartRenderer;

impl DartRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "dynamic".to_string(),
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Integer => "int".to_string(),
            TypeRef::Number => "double".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("List<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => Self::nullable(Self::type_of(inner)),
        }
    }

    fn nullable(ty: String) -> String {
        if ty == "dynamic" || ty.ends_with('?') {
            ty
        } else {
            format!("{ty}?")
        }
    }
}

impl Renderer for DartRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = Vec::new();

        if model.is_alias() {
            lines.push(format!(
                "typedef {} = {};",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            let names = member_names(record, Case::Camel, KEYWORDS, &[]);
            let types: Vec<String> = record
                .fields
                .iter()
                .map(|field| {
                    let ty = Self::type_of(&field.ty);
                    if field.optional {
                        Self::nullable(ty)
                    } else {
                        ty
                    }
                })
                .collect();

            lines.push(format!("class {} {{", record.name));
            if record.fields.is_empty() {
                lines.push(format!("  const {}();", record.name));
            } else {
                for (name, ty) in names.iter().zip(&types) {
                    lines.push(format!("  final {ty} {name};"));
                }
                lines.push(String::new());
                lines.push(format!("  const {}({{", record.name));
                for (name, ty) in names.iter().zip(&types) {
                    if ty.ends_with('?') || ty == "dynamic" {
                        lines.push(format!("    this.{name},"));
                    } else {
                        lines.push(format!("    required this.{name},"));
                    }
                }
                lines.push("  });".to_string());
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
