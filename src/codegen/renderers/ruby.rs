//! Ruby keyword structs with YARD attribute docs

use super::{finish, member_names, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "class", "def", "end", "false", "hash", "method", "nil", "self", "send", "true",
];

pub struct RubyRenderer;

impl RubyRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any => "Object".to_string(),
            TypeRef::Null => "nil".to_string(),
            TypeRef::Bool => "Boolean".to_string(),
            TypeRef::Integer => "Integer".to_string(),
            TypeRef::Number => "Float".to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("Array<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => format!("{}, nil", Self::type_of(inner)),
        }
    }
}

impl Renderer for RubyRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec!["# frozen_string_literal: true".to_string(), String::new()];

        if model.is_alias() {
            lines.push(format!("# {}: {}", model.name, Self::type_of(&model.root)));
            lines.push(String::new());
        }

        for record in &model.records {
            if record.fields.is_empty() {
                lines.push(format!("{} = Class.new", record.name));
                lines.push(String::new());
                continue;
            }

            let names = member_names(record, Case::Snake, KEYWORDS, &[]);
            for (field, name) in record.fields.iter().zip(&names) {
                let mut ty = Self::type_of(&field.ty);
                if field.optional && !ty.ends_with("nil") {
                    ty.push_str(", nil");
                }
                lines.push(format!("# @!attribute [rw] {name}"));
                lines.push(format!("#   @return [{ty}]"));
            }
            let members: Vec<String> = names.iter().map(|n| format!(":{n}")).collect();
            lines.push(format!(
                "{} = Struct.new({}, keyword_init: true)",
                record.name,
                members.join(", ")
            ));
            lines.push(String::new());
        }

        finish(lines)
    }
}
