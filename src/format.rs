//! Response decoration.
//!
//! Upstream payloads are passed through mostly untouched; this module adds
//! a handful of display-ready fields the frontend would otherwise derive
//! itself on every render.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Return a shallow copy of `value` augmented with derived display fields.
///
/// - `retrieved_at`: ISO-8601 UTC timestamp, added unconditionally;
/// - `display_tag`: `#` plus the tag with any `%23` removed, when both
///   `tag` and `name` are present;
/// - `trophies_formatted`: thousands-grouped rendering of a numeric
///   `trophies` field.
///
/// Non-objects are returned as-is. The caller's value is never mutated and
/// no existing field is altered or removed.
pub fn decorate(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };

    let mut out = obj.clone();

    out.insert(
        "retrieved_at".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    );

    if let (Some(tag), Some(_name)) = (
        obj.get("tag").and_then(Value::as_str),
        obj.get("name").and_then(Value::as_str),
    ) {
        let display = format!("#{}", tag.replace("%23", "").replace('#', ""));
        out.insert("display_tag".to_string(), Value::String(display));
    }

    if let Some(trophies) = obj.get("trophies").and_then(Value::as_i64) {
        out.insert(
            "trophies_formatted".to_string(),
            Value::String(group_thousands(trophies)),
        );
    }

    Value::Object(out)
}

/// Render an integer with comma-grouped thousands (e.g. `12345` -> `12,345`).
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
