//! Python dataclasses

use super::{finish, member_names, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub struct PythonRenderer;

impl PythonRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "Any".to_string(),
            TypeRef::Null => "None".to_string(),
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Integer => "int".to_string(),
            TypeRef::Number => "float".to_string(),
            TypeRef::String => "str".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("List[{}]", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("Optional[{}]", Self::type_of(inner)),
        }
    }
}

impl Renderer for PythonRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec![
            "from dataclasses import dataclass".to_string(),
            "from typing import Any, List, Optional".to_string(),
        ];

        // Children before parents so every name is defined before use
        for record in model.records.iter().rev() {
            let names = member_names(record, Case::Snake, KEYWORDS, &[]);

            let mut required = Vec::new();
            let mut defaulted = Vec::new();
            for (field, name) in record.fields.iter().zip(&names) {
                let ty = Self::type_of(&field.ty);
                if field.optional {
                    let nilable =
                        matches!(field.ty, TypeRef::Nullable(_) | TypeRef::Any | TypeRef::Null);
                    let ty = if nilable { ty } else { format!("Optional[{ty}]") };
                    defaulted.push(format!("    {name}: {ty} = None"));
                } else {
                    required.push(format!("    {name}: {ty}"));
                }
            }

            lines.push(String::new());
            lines.push(String::new());
            lines.push("@dataclass".to_string());
            lines.push(format!("class {}:", record.name));
            if required.is_empty() && defaulted.is_empty() {
                lines.push("    pass".to_string());
            }
            lines.extend(required);
            lines.extend(defaulted);
        }

        if model.is_alias() {
            lines.push(String::new());
            lines.push(String::new());
            lines.push(format!("{} = {}", model.name, Self::type_of(&model.root)));
        }

        finish(lines)
    }
}
