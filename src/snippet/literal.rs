use serde_json::Value;

/// Literal syntax used when writing a JSON value into snippet source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralStyle {
    /// Object literal: bare identifier keys, single-quoted strings.
    JavaScript,
    /// Dict literal: `True`, `False`, `None`.
    Python,
    /// Plain JSON text.
    Json,
    /// Tokens accepted by `serde_json::json!`.
    RustJson,
}

/// Writes `value` starting at the current cursor. Nested lines are indented
/// with `indent` plus one `unit` per level.
pub fn write_value(out: &mut String, value: &Value, style: LiteralStyle, indent: &str, unit: &str) {
    match value {
        Value::Null => out.push_str(match style {
            LiteralStyle::Python => "None",
            _ => "null",
        }),
        Value::Bool(b) => out.push_str(match (style, b) {
            (LiteralStyle::Python, true) => "True",
            (LiteralStyle::Python, false) => "False",
            (_, true) => "true",
            (_, false) => "false",
        }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&quote(s, style)),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            let inner = format!("{}{}", indent, unit);
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                out.push_str(&inner);
                write_value(out, item, style, &inner, unit);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(indent);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            let inner = format!("{}{}", indent, unit);
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(&inner);
                out.push_str(&key_literal(key, style));
                out.push_str(": ");
                write_value(out, item, style, &inner, unit);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(indent);
            out.push('}');
        }
    }
}

pub fn render_value(value: &Value, style: LiteralStyle, indent: &str, unit: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, value, style, indent, unit);
    out
}

fn key_literal(key: &str, style: LiteralStyle) -> String {
    if style == LiteralStyle::JavaScript && is_js_identifier(key) {
        key.to_string()
    } else {
        quote(key, style)
    }
}

/// String literal for `s` in the given style.
pub fn quote(s: &str, style: LiteralStyle) -> String {
    match style {
        LiteralStyle::JavaScript => js_single_quoted(s),
        // JSON escapes are valid inside Python double-quoted strings.
        LiteralStyle::Python | LiteralStyle::Json => {
            serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
        }
        LiteralStyle::RustJson => format!("{:?}", s),
    }
}

pub fn js_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Wraps `s` in single quotes for a POSIX shell.
pub fn shell_single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn is_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
