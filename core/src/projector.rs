//! Schema Projector: forest to nested `name -> type` JSON object

use crate::field::{Field, FieldType};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Key used for fields with an empty name
pub const UNNAMED: &str = "unnamed";

/// Indentation of the live preview panel
pub const DEFAULT_INDENT: usize = 2;

fn key_for(name: &str) -> String {
    if name.is_empty() {
        UNNAMED.to_string()
    } else {
        name.to_string()
    }
}

/// Project fields to a JSON object.
///
/// Nested fields recurse into their children, every other field maps to its
/// type literal. A later sibling with the same key replaces the earlier value
/// but keeps the earlier key's position.
pub fn generate(fields: &[Arc<Field>]) -> Value {
    let mut schema = Map::new();
    for field in fields {
        let value = match field.field_type {
            FieldType::Nested => generate(&field.children),
            other => Value::String(other.as_str().to_string()),
        };
        schema.insert(key_for(&field.name), value);
    }
    Value::Object(schema)
}

/// Project an untyped JSON forest document.
///
/// Anything other than an array yields `{}`. Keys follow loose-object rules:
/// a falsy `name` (missing, `null`, `false`, `0`, `""`) becomes `"unnamed"`,
/// any other name is stringified. A `type` of `"nested"` recurses into
/// `children`; any other `type` value is copied verbatim. An element without
/// a `type` leaves its key undefined, which drops the key from the output
/// even if an earlier sibling had set it.
pub fn generate_value(input: &Value) -> Value {
    let Some(fields) = input.as_array() else {
        return Value::Object(Map::new());
    };

    let mut schema = Map::new();
    let mut undefined = HashSet::new();
    for field in fields {
        let key = match field.get("name") {
            Some(name) if is_truthy(name) => loose_string(name),
            _ => UNNAMED.to_string(),
        };
        let value = match field.get("type") {
            None => {
                // keep the slot so a later sibling reuses its position
                schema.insert(key.clone(), Value::Null);
                undefined.insert(key);
                continue;
            }
            Some(Value::String(t)) if t.as_str() == FieldType::Nested.as_str() => {
                let children = field.get("children").filter(|c| is_truthy(c));
                generate_value(children.unwrap_or(&Value::Null))
            }
            Some(other) => other.clone(),
        };
        undefined.remove(&key);
        schema.insert(key, value);
    }

    Value::Object(
        schema
            .into_iter()
            .filter(|(key, _)| !undefined.contains(key))
            .collect(),
    )
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String conversion used for object keys
fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(loose_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Pretty-print with `indent` spaces per level
pub fn render_pretty(value: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    if let Err(e) = value.serialize(&mut serializer) {
        log::warn!("Failed to render schema preview: {}", e);
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
