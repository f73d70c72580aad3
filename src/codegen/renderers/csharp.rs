//! C# classes for System.Text.Json

use super::{finish, member_names, quote, Renderer};
use crate::codegen::model::{TypeModel, TypeRef};
use crate::codegen::naming::Case;

pub struct CSharpRenderer;

impl CSharpRenderer {
    fn type_of(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "object".to_string(),
            TypeRef::Bool => "bool".to_string(),
            TypeRef::Integer => "long".to_string(),
            TypeRef::Number => "double".to_string(),
            TypeRef::String => "string".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("List<{}>", Self::type_of(inner)),
            TypeRef::Nullable(inner) => Self::nullable(Self::type_of(inner)),
        }
    }

    /// Only value types take a `?`
    fn nullable(ty: String) -> String {
        match ty.as_str() {
            "bool" | "long" | "double" => format!("{ty}?"),
            _ => ty,
        }
    }
}

impl Renderer for CSharpRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec![
            "using System.Collections.Generic;".to_string(),
            "using System.Text.Json.Serialization;".to_string(),
            String::new(),
        ];

        if model.is_alias() {
            lines.push(format!("// {}: {}", model.name, Self::type_of(&model.root)));
            lines.push(String::new());
        }

        for record in &model.records {
            // A member may not share its enclosing type's name
            let names = member_names(record, Case::Pascal, &[], &[record.name.as_str()]);
            lines.push(format!("public class {}", record.name));
            lines.push("{".to_string());
            for (i, (field, name)) in record.fields.iter().zip(&names).enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                let mut ty = Self::type_of(&field.ty);
                if field.optional {
                    ty = Self::nullable(ty);
                }
                lines.push(format!("    [JsonPropertyName({})]", quote(&field.json_name)));
                lines.push(format!("    public {ty} {name} {{ get; set; }}"));
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        finish(lines)
    }
}
