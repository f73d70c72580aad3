//! JSON parsing shared by every sample and config reader

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Deserializer, Value};

/// Deepest array/object nesting accepted in a JSON document
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a JSON document from raw bytes.
///
/// Invalid UTF-8 is reported as a syntax error. Nesting beyond serde_json's default
/// recursion limit is accepted up to `MAX_NESTING_DEPTH`.
pub fn parse_json_slice(bytes: &[u8]) -> serde_json::Result<Value> {
    let depth = nesting_depth(bytes);
    if depth > MAX_NESTING_DEPTH {
        return Err(serde_json::Error::custom(format!(
            "nesting depth {depth} exceeds limit of {MAX_NESTING_DEPTH}"
        )));
    }

    let mut de = Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Maximum bracket depth, ignoring brackets inside strings
fn nesting_depth(bytes: &[u8]) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &b in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
