use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Write;

use crate::{Array, Map, Value};

/// Converts a `serde_json` tree into the generic [`Value`], numbers as `f64`.
pub(crate) fn from_serde(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_serde).collect::<Array>())
        }
        serde_json::Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect::<Map>(),
        ),
    }
}

/// Parses `text` with `serde_json` and converts the result.
pub(crate) fn expected(text: &str) -> Value {
    from_serde(serde_json::from_str(text).expect("reference JSON must parse"))
}

/// Renders a generic value as compact JSON text, with every non-ASCII or
/// control character written as `\u` escapes so the decoder's escape
/// handling is exercised.
pub(crate) fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        // `Display` for f64 never uses exponent notation, which the decoder
        // only accepts with an explicit sign.
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, item)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(out, "\\u{unit:04x}").expect("writing to a String cannot fail");
                }
            }
        }
    }
    out.push('"');
}

/// Surrounds `text` with a mix of the four whitespace bytes.
pub(crate) fn padded(text: &str, pad: usize) -> String {
    const WS: [char; 4] = [' ', '\t', '\r', '\n'];
    let ws: String = (0..pad).map(|i| WS[i % WS.len()]).collect();
    format!("{ws}{text}{ws}")
}
