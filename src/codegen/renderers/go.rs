//! Go structs with `encoding/json` tags

use super::{finish, member_names, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

pub struct GoRenderer;

impl GoRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "interface{}".to_string(),
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Integer => "int64".to_string(),
            TypeRef::Number => "float64".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("[]{}", Self::type_of(inner)),
            TypeRef::Nullable(inner) => Self::pointer(Self::type_of(inner)),
        }
    }

    /// Slices and interfaces are already nilable
    fn pointer(ty: String) -> String {
        if ty.starts_with("[]") || ty == "interface{}" || ty.starts_with('*') {
            ty
        } else {
            format!("*{ty}")
        }
    }
}

impl Renderer for GoRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec!["package main".to_string(), String::new()];

        if model.is_alias() {
            lines.push(format!("type {} {}", model.name, Self::type_of(&model.root)));
            lines.push(String::new());
        }

        for record in &model.records {
            let names = member_names(record, Case::Pascal, &[], &[]);
            lines.push(format!("type {} struct {{", record.name));
            for (field, name) in record.fields.iter().zip(&names) {
                let mut ty = Self::type_of(&field.ty);
                let mut tag = field.json_name.replace('"', "\\\"");
                if field.optional {
                    ty = Self::pointer(ty);
                    tag.push_str(",omitempty");
                }
                lines.push(format!("\t{name} {ty} `json:\"{tag}\"`"));
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
