//! Per-language renderers
//!
//! Each renderer turns a `TypeModel` into source lines for one target language.

mod csharp;
mod dart;
mod flow;
mod go;
mod java;
mod javascript;
mod kotlin;
mod python;
mod ruby;
mod rust;
mod swift;
mod typescript;

pub use csharp::CSharpRenderer;
pub use dart::DartRenderer;
pub use flow::FlowRenderer;
pub use go::GoRenderer;
pub use java::JavaRenderer;
pub use javascript::JavaScriptRenderer;
pub use kotlin::KotlinRenderer;
pub use python::PythonRenderer;
pub use ruby::RubyRenderer;
pub use rust::RustRenderer;
pub use swift::SwiftRenderer;
pub use typescript::TypeScriptRenderer;

use super::model::{Record, TypeModel, TypeRef};
use super::naming::{identifier, Case, UniqueNames};

/// Renders a type model as source lines
pub trait Renderer {
    /// Render every type in the model
    fn render(&self, model: &TypeModel) -> Vec<String>;
}

/// Look up the renderer for a language identifier
pub fn renderer_for(lang: &str) -> Option<Box<dyn Renderer>> {
    let renderer: Box<dyn Renderer> = match lang {
        "typescript" => Box::new(TypeScriptRenderer),
        "javascript" => Box::new(JavaScriptRenderer),
        "flow" => Box::new(FlowRenderer),
        "swift" => Box::new(SwiftRenderer),
        "kotlin" => Box::new(KotlinRenderer),
        "java" => Box::new(JavaRenderer),
        "go" => Box::new(GoRenderer),
        "rust" => Box::new(RustRenderer),
        "csharp" => Box::new(CSharpRenderer),
        "python" => Box::new(PythonRenderer),
        "ruby" => Box::new(RubyRenderer),
        "dart" => Box::new(DartRenderer),
        _ => return None,
    };
    Some(renderer)
}

/// Member names for a record's fields, unique within the record.
///
/// Names colliding with `keywords` or `reserved` get a trailing underscore.
fn member_names(record: &Record, case: Case, keywords: &[&str], reserved: &[&str]) -> Vec<String> {
    let mut names = UniqueNames::with_reserved(reserved);
    record
        .fields
        .iter()
        .map(|field| {
            let mut name = identifier(&field.json_name, case);
            if keywords.contains(&name.as_str()) {
                name.push('_');
            }
            names.claim(&name)
        })
        .collect()
}

/// JSON string literal for a key
fn quote(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

/// Check if any position in the model is untyped
fn uses_any(model: &TypeModel) -> bool {
    fn walk(ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Any | TypeRef::Null => true,
            TypeRef::Array(inner) | TypeRef::Nullable(inner) => walk(inner),
            _ => false,
        }
    }

    walk(&model.root)
        || model
            .records
            .iter()
            .flat_map(|r| r.fields.iter())
            .any(|f| walk(&f.ty))
}

/// Drop trailing blank lines
fn finish(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
