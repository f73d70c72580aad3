//! Swift `Codable` structs

use super::{finish, member_names, quote, uses_any, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "associatedtype", "break", "case", "catch", "class", "continue", "default", "defer",
    "deinit", "do", "else", "enum", "extension", "fallthrough", "false", "fileprivate", "for",
    "func", "guard", "if", "import", "in", "init", "inout", "internal", "is", "let", "nil",
    "open", "operator", "private", "protocol", "public", "repeat", "rethrows", "return", "self",
    "static", "struct", "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

pub struct SwiftRenderer;

impl SwiftRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "JSONAny".to_string(),
            TypeRef::Null => "JSONAny?".to_string(),
            TypeRef::Bool => "Bool".to_string(),
            TypeRef::Integer => "Int".to_string(),
            TypeRef::Number => "Double".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("[{}]", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("{}?", Self::type_of(inner)),
        }
    }
}

impl Renderer for SwiftRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec!["import Foundation".to_string(), String::new()];

        if model.is_alias() {
            lines.push(format!(
                "typealias {} = {}",
                model.name,
                Self::type_of(&model.root)
            ));
            lines.push(String::new());
        }

        for record in &model.records {
            let names = member_names(record, Case::Camel, KEYWORDS, &[]);

            lines.push(format!("// MARK: - {}", record.name));
            lines.push(format!("struct {}: Codable {{", record.name));
            for (field, name) in record.fields.iter().zip(&names) {
                let mut ty = Self::type_of(&field.ty);
                if field.optional && !ty.ends_with('?') {
                    ty.push('?');
                }
                lines.push(format!("    let {name}: {ty}"));
            }

            let renamed = record
                .fields
                .iter()
                .zip(&names)
                .any(|(field, name)| field.json_name != *name);
            if renamed {
                lines.push(String::new());
                lines.push("    enum CodingKeys: String, CodingKey {".to_string());
                for (field, name) in record.fields.iter().zip(&names) {
                    if field.json_name == *name {
                        lines.push(format!("        case {name}"));
                    } else {
                        lines.push(format!("        case {name} = {}", quote(&field.json_name)));
                    }
                }
                lines.push("    }".to_string());
            }

            lines.push("}".to_string());
            lines.push(String::new());
        }

        if uses_any(model) {
            lines.push("// MARK: - JSONAny".to_string());
            lines.push("struct JSONAny: Codable {".to_string());
            lines.push("    init(from decoder: Decoder) throws {}".to_string());
            lines.push("    func encode(to encoder: Encoder) throws {}".to_string());
            lines.push("}".to_string());
        }

        finish(lines)
    }
}
