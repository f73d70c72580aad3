//! Identifier naming helpers

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid regex"));

static PLAIN_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

/// Target case convention for generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `UpperCamelCase`
    Pascal,
    /// `lowerCamelCase`
    Camel,
    /// `snake_case`
    Snake,
}

/// Convert a raw JSON key into an identifier in the given case.
///
/// Never returns an empty string, and never starts with a digit.
pub fn identifier(raw: &str, case: Case) -> String {
    let words = NON_WORD.replace_all(raw, " ");
    let converted = match case {
        Case::Pascal => words.to_upper_camel_case(),
        Case::Camel => words.to_lower_camel_case(),
        Case::Snake => words.to_snake_case(),
    };

    let converted = if converted.is_empty() {
        match case {
            Case::Pascal => "Empty".to_string(),
            Case::Camel | Case::Snake => "empty".to_string(),
        }
    } else {
        converted
    };

    if converted.starts_with(|c: char| c.is_ascii_digit()) {
        match case {
            Case::Pascal => format!("The{converted}"),
            Case::Camel | Case::Snake => format!("the{}{converted}", separator(case)),
        }
    } else {
        converted
    }
}

fn separator(case: Case) -> &'static str {
    if case == Case::Snake {
        "_"
    } else {
        ""
    }
}

/// Type name for a raw key (`UpperCamelCase`)
pub fn type_name(raw: &str) -> String {
    identifier(raw, Case::Pascal)
}

/// Naive English singular, used to name array element types
pub fn singular(name: &str) -> String {
    if name.len() > 3 && name.ends_with("ies") {
        format!("{}y", &name[..name.len() - 3])
    } else if name.len() > 1 && name.ends_with('s') && !name.ends_with("ss") {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}

/// Check if a key can be used unquoted in JavaScript-family object types
pub fn is_plain_identifier(raw: &str) -> bool {
    PLAIN_IDENT.is_match(raw)
}

/// Hands out names that are unique within one scope
#[derive(Debug, Default)]
pub struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope where `reserved` names are already taken
    pub fn with_reserved(reserved: &[&str]) -> Self {
        Self {
            used: reserved.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Claim `base`, or `base2`, `base3`, ... if taken
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
