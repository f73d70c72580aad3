//! Java classes with Jackson annotations
//!
//! Java allows one public top-level class per file, so every record is nested in
//! a holder class named after the model.

use super::{finish, member_names, quote, Renderer};
use crate::codegen::model::{Record, TypeModel, TypeRef};
use crate::codegen::naming::Case;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "record", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "var", "void", "volatile", "while",
];

pub struct JavaRenderer;

impl JavaRenderer {
    fn type_of(ty: &TypeRef, boxed: bool) -> String {
        match ty {
            TypeRef::Any | TypeRef::Null => "Object".to_string(),
            TypeRef::Bool => (if boxed { "Boolean" } else { "boolean" }).to_string(),
            TypeRef::Integer => (if boxed { "Long" } else { "long" }).to_string(),
            TypeRef::Number => (if boxed { "Double" } else { "double" }).to_string(),
            TypeRef::String => "String".to_string(),
            TypeRef::Record(name) => name.clone(),
            TypeRef::Array(inner) => format!("List<{}>", Self::type_of(inner, true)),
            TypeRef::Nullable(inner) => Self::type_of(inner, true),
        }
    }

    fn push_fields(lines: &mut Vec<String>, record: &Record, indent: &str) {
        let names = member_names(record, Case::Camel, KEYWORDS, &[]);
        for (field, name) in record.fields.iter().zip(&names) {
            lines.push(format!("{indent}@JsonProperty({})", quote(&field.json_name)));
            lines.push(format!(
                "{indent}public {} {name};",
                Self::type_of(&field.ty, field.optional)
            ));
        }
    }
}

impl Renderer for JavaRenderer {
    fn render(&self, model: &TypeModel) -> Vec<String> {
        let mut lines = vec![
            "import com.fasterxml.jackson.annotation.JsonProperty;".to_string(),
            "import java.util.List;".to_string(),
            String::new(),
        ];

        if model.is_alias() {
            lines.push(format!(
                "// {}: {}",
                model.name,
                Self::type_of(&model.root, true)
            ));
        }
        lines.push(format!("public class {} {{", model.name));

        let mut first = true;
        if let Some(root) = model.record(&model.name) {
            Self::push_fields(&mut lines, root, "    ");
            first = root.fields.is_empty();
        }

        for record in model.records.iter().filter(|r| r.name != model.name) {
            if !first {
                lines.push(String::new());
            }
            first = false;
            lines.push(format!("    public static class {} {{", record.name));
            Self::push_fields(&mut lines, record, "        ");
            lines.push("    }".to_string());
        }

        lines.push("}".to_string());
        finish(lines)
    }
}
